//! Error types for the QSVT engine.

use thiserror::Error;

use qsvt_poly::PolyError;

/// Errors produced by block encoding, angle solving, and verification.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The operator is not square.
    #[error("operator is not square: {rows}×{cols}")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// The operator norm exceeds the block-encoding normalization.
    #[error("operator norm {norm} exceeds the normalization α = {alpha}")]
    NormBound {
        /// Spectral norm (or largest singular value) of the operator.
        norm: f64,
        /// The normalization constant supplied by the caller.
        alpha: f64,
    },

    /// The operator is required to be Hermitian but is not.
    #[error("operator is not Hermitian: worst |A − Aᴴ| entry is {deviation}")]
    NotHermitian {
        /// Largest entrywise deviation from the adjoint.
        deviation: f64,
    },

    /// A scalar encoding was requested outside the signal range.
    #[error("scalar {value} lies outside [-1, 1]")]
    ScalarOutOfRange {
        /// The offending value.
        value: f64,
    },

    /// The normalization constant must satisfy α ≥ 1.
    #[error("normalization α = {alpha} must be at least 1")]
    InvalidNormalization {
        /// The offending constant.
        alpha: f64,
    },

    /// QSVT needs a definite parity for the unitary decomposition to exist.
    #[error("polynomial has mixed parity; QSVT requires definite parity")]
    MixedParity,

    /// The phase-angle iteration exhausted its budget without converging.
    #[error(
        "phase-angle solver diverged for degree {degree}: \
         residual {residual} after {iterations} iterations"
    )]
    AngleSolverDivergence {
        /// Degree of the target polynomial.
        degree: usize,
        /// Last coefficient-matching residual (∞-norm).
        residual: f64,
        /// Iterations spent before giving up.
        iterations: usize,
    },

    /// The operator is singular where an inverse (or solve) is required.
    #[error("operator is singular: smallest |eigenvalue| is {min_eigenvalue}")]
    SingularOperator {
        /// Smallest eigenvalue magnitude observed.
        min_eigenvalue: f64,
    },

    /// Two collaborating operators disagree on dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension implied by the first operand.
        expected: usize,
        /// Dimension of the second operand.
        actual: usize,
    },

    /// A verification run exceeded its residual tolerance.
    ///
    /// Only raised through [`VerificationResult::ensure`]; verification
    /// itself reports structured residuals instead of failing.
    ///
    /// [`VerificationResult::ensure`]: crate::verify::VerificationResult::ensure
    #[error("verification failed: worst residual {worst_residual} exceeds tolerance {tolerance}")]
    VerificationMismatch {
        /// Largest per-eigenvalue residual observed.
        worst_residual: f64,
        /// The tolerance it was compared against.
        tolerance: f64,
    },

    /// The target polynomial failed admissibility.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

/// Result type for engine operations.
pub type CoreResult<T> = Result<T, CoreError>;
