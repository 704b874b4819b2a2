//! Linear-system demonstration: polynomial inversion direction check.
//!
//! A QSVT linear-system primitive applies an odd polynomial approximation
//! of 1/x to a Hermitian operator and compares the direction of `P(A)b`
//! against the exact solution of `Ax = b`. Up to the normalization a real
//! solver would track, a good approximation leaves the two vectors
//! (anti-)parallel, so the figure of merit is the sign-insensitive cosine
//! similarity.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;
use serde::Serialize;
use tracing::debug;

use qsvt_core::{BlockEncoding, CircuitSimulator, CoreError, CoreResult, PhaseAngleSolver};
use qsvt_poly::PolynomialSpec;

/// Default pass threshold on |cosine|.
pub const DEFAULT_COSINE_THRESHOLD: f64 = 0.999;

/// Eigenvalues below this magnitude make the exact solve meaningless.
const SINGULARITY_EPS: f64 = 1e-12;

/// Outcome of one linear-system run.
#[derive(Debug, Clone, Serialize)]
pub struct LinearSystemReport {
    /// Degree of the inversion polynomial.
    pub degree: usize,
    /// `|⟨P(A)b, A⁻¹b⟩|` over the product of norms.
    pub cosine_similarity: f64,
    /// Threshold the run was judged against.
    pub threshold: f64,
    /// True when the cosine reached the threshold.
    pub passed: bool,
    /// Norm of the QSVT-transformed vector.
    pub approx_norm: f64,
    /// Norm of the exact solution.
    pub exact_norm: f64,
}

/// Applies an odd inversion polynomial to `b` through the full engine
/// pipeline and scores it against the exact solution.
pub struct LinearSystemDemo {
    matrix: DMatrix<Complex64>,
    rhs: DVector<Complex64>,
    poly: PolynomialSpec,
    threshold: f64,
}

impl LinearSystemDemo {
    /// A demo over `Ax = b` with the given inversion polynomial.
    pub fn new(matrix: DMatrix<Complex64>, rhs: DVector<Complex64>, poly: PolynomialSpec) -> Self {
        Self {
            matrix,
            rhs,
            poly,
            threshold: DEFAULT_COSINE_THRESHOLD,
        }
    }

    /// Override the pass threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Solve angles, encode, simulate, apply to `b`, and compare.
    pub fn run(&self) -> CoreResult<LinearSystemReport> {
        if self.matrix.nrows() != self.rhs.len() {
            return Err(CoreError::DimensionMismatch {
                expected: self.matrix.nrows(),
                actual: self.rhs.len(),
            });
        }

        let angles = PhaseAngleSolver::new().solve(&self.poly)?;
        let encoding = BlockEncoding::hermitian(&self.matrix)?;
        let transformed = CircuitSimulator::new(&encoding, &angles)
            .run()
            .extract_hermitian_block();
        let approx = &transformed * &self.rhs;

        let exact = self.exact_solution()?;
        let cosine = cosine_similarity(&approx, &exact);
        let passed = cosine >= self.threshold;
        debug!(cosine, passed, degree = self.poly.degree(), "linear-system run scored");

        Ok(LinearSystemReport {
            degree: self.poly.degree(),
            cosine_similarity: cosine,
            threshold: self.threshold,
            passed,
            approx_norm: approx.norm(),
            exact_norm: exact.norm(),
        })
    }

    /// Exact `A⁻¹b` by LU; rejects (near-)singular operators first.
    fn exact_solution(&self) -> CoreResult<DVector<Complex64>> {
        let min_eigenvalue = self
            .matrix
            .clone()
            .symmetric_eigen()
            .eigenvalues
            .iter()
            .map(|l| l.abs())
            .fold(f64::INFINITY, f64::min);
        if min_eigenvalue < SINGULARITY_EPS {
            return Err(CoreError::SingularOperator { min_eigenvalue });
        }
        self.matrix
            .clone()
            .lu()
            .solve(&self.rhs)
            .ok_or(CoreError::SingularOperator { min_eigenvalue })
    }
}

/// `|⟨u, v⟩| / (‖u‖‖v‖)`; zero if either vector vanishes.
pub fn cosine_similarity(u: &DVector<Complex64>, v: &DVector<Complex64>) -> f64 {
    let norms = u.norm() * v.norm();
    if norms == 0.0 {
        return 0.0;
    }
    u.dotc(v).norm() / norms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real_vector(values: &[f64]) -> DVector<Complex64> {
        DVector::from_iterator(values.len(), values.iter().map(|&v| Complex64::new(v, 0.0)))
    }

    #[test]
    fn cosine_of_antiparallel_vectors_is_one() {
        let u = real_vector(&[1.0, 2.0]);
        let v = real_vector(&[-2.0, -4.0]);
        assert!((cosine_similarity(&u, &v) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        let u = real_vector(&[1.0, 0.0]);
        let v = real_vector(&[0.0, 1.0]);
        assert!(cosine_similarity(&u, &v) < 1e-15);
    }

    #[test]
    fn zero_vector_scores_zero() {
        let u = real_vector(&[0.0, 0.0]);
        let v = real_vector(&[1.0, 1.0]);
        assert_eq!(cosine_similarity(&u, &v), 0.0);
    }
}
