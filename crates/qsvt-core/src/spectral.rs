//! Classical spectral application of scalar functions.
//!
//! For a diagonalizable Hermitian operator `A = U Λ Uᴴ`, any scalar
//! function acts on the spectrum alone: `f(A) = U f(Λ) Uᴴ`. This is the
//! classical reference the engine is verified against, and the mechanism
//! behind the matrix powers-and-roots demonstrations.

use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::encoding::{HERMITICITY_EPS, hermiticity_deviation};
use crate::error::{CoreError, CoreResult};

/// Apply `f` to the eigenvalues of a Hermitian operator.
pub fn apply_spectral_function<F: Fn(f64) -> f64>(
    a: &DMatrix<Complex64>,
    f: F,
) -> CoreResult<DMatrix<Complex64>> {
    if a.nrows() != a.ncols() {
        return Err(CoreError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    let deviation = hermiticity_deviation(a);
    if deviation > HERMITICITY_EPS {
        return Err(CoreError::NotHermitian { deviation });
    }
    let eigen = a.clone().symmetric_eigen();
    let mapped = eigen.eigenvalues.map(|l| Complex64::new(f(l), 0.0));
    Ok(&eigen.eigenvectors * DMatrix::from_diagonal(&mapped) * eigen.eigenvectors.adjoint())
}

/// Integer matrix power by repeated multiplication.
pub fn matrix_power(a: &DMatrix<Complex64>, k: u32) -> CoreResult<DMatrix<Complex64>> {
    if a.nrows() != a.ncols() {
        return Err(CoreError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    let mut out = DMatrix::identity(a.nrows(), a.ncols());
    for _ in 0..k {
        out *= a;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(values: &[f64]) -> DMatrix<Complex64> {
        DMatrix::from_fn(values.len(), values.len(), |i, j| {
            if i == j {
                Complex64::new(values[i], 0.0)
            } else {
                Complex64::new(0.0, 0.0)
            }
        })
    }

    #[test]
    fn spectral_square_matches_direct_product() {
        let a = diag(&[0.9, 0.3]);
        let squared = apply_spectral_function(&a, |x| x * x).unwrap();
        assert!((squared[(0, 0)].re - 0.81).abs() < 1e-12);
        assert!((squared[(1, 1)].re - 0.09).abs() < 1e-12);
    }

    #[test]
    fn power_matches_spectral_map() {
        let a = diag(&[0.5, -0.25]);
        let cubed = matrix_power(&a, 3).unwrap();
        let spectral = apply_spectral_function(&a, |x| x.powi(3)).unwrap();
        assert!((&cubed - &spectral).iter().all(|e| e.norm() < 1e-12));
    }

    #[test]
    fn non_hermitian_rejected() {
        let mut a = diag(&[0.5, 0.5]);
        a[(0, 1)] = Complex64::new(0.3, 0.0);
        assert!(matches!(
            apply_spectral_function(&a, |x| x),
            Err(CoreError::NotHermitian { .. })
        ));
    }
}
