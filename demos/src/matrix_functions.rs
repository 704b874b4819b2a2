//! Matrix powers and roots via spectral application.
//!
//! Companion pieces to the engine proper: classical spectral evaluation
//! of integer powers and of √A, the latter through a Chebyshev fit of
//! √x on a subinterval bounded away from zero.

use nalgebra::DMatrix;
use num_complex::Complex64;

use qsvt_core::{CoreResult, apply_spectral_function, matrix_power};
use qsvt_poly::ChebyshevFit;

/// A Hermitian test matrix with prescribed eigenvalues, mixed through a
/// rotation basis: `R(θ) · diag(λ) · R(θ)ᵀ`.
pub fn rotation_mixed(theta: f64, eigenvalues: &[f64]) -> DMatrix<Complex64> {
    let n = eigenvalues.len();
    let (c, s) = (theta.cos(), theta.sin());
    // Rotate in the leading 2×2 plane; higher dimensions stay diagonal.
    let mut rotation = DMatrix::<f64>::identity(n, n);
    if n >= 2 {
        rotation[(0, 0)] = c;
        rotation[(0, 1)] = -s;
        rotation[(1, 0)] = s;
        rotation[(1, 1)] = c;
    }
    let lambda = DMatrix::from_fn(n, n, |i, j| if i == j { eigenvalues[i] } else { 0.0 });
    (&rotation * lambda * rotation.transpose()).map(|e| Complex64::new(e, 0.0))
}

/// `√A` for a Hermitian positive matrix, through a degree-`degree`
/// Chebyshev fit of √x on `[lo, 1]`.
///
/// `lo` must lower-bound the spectrum; eigenvalues below it are evaluated
/// by extrapolation of the fit and lose accuracy fast.
pub fn matrix_sqrt(a: &DMatrix<Complex64>, lo: f64, degree: usize) -> CoreResult<DMatrix<Complex64>> {
    let fit = ChebyshevFit::new(|x| x.sqrt(), lo, 1.0, degree)?;
    apply_spectral_function(a, |x| fit.value(x))
}

/// Worst entrywise deviation between repeated multiplication and the
/// spectral evaluation of `x^k`. A consistency diagnostic for the demos.
pub fn power_deviation(a: &DMatrix<Complex64>, k: u32) -> CoreResult<f64> {
    let direct = matrix_power(a, k)?;
    let spectral = apply_spectral_function(a, |x| x.powi(k as i32))?;
    Ok((direct - spectral).iter().map(|e| e.norm()).fold(0.0, f64::max))
}
