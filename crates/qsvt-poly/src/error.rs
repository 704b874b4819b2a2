//! Error types for the polynomial crate.

use thiserror::Error;

use crate::polynomial::Parity;

/// Errors produced while constructing or fitting polynomials.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PolyError {
    /// No coefficients were supplied.
    #[error("polynomial has no coefficients")]
    Empty,

    /// The polynomial exceeds the unit bound somewhere on [-1, 1].
    #[error("polynomial is not bounded by 1 on [-1, 1]: |f({x})| = {value}")]
    Unbounded {
        /// The violating sample point.
        x: f64,
        /// The magnitude of the polynomial there.
        value: f64,
    },

    /// A coefficient contradicts the declared parity.
    #[error("coefficient of degree {index} is {value}, violating declared {declared:?} parity")]
    ParityViolation {
        /// Degree of the offending coefficient.
        index: usize,
        /// Its value.
        value: f64,
        /// The parity the caller declared.
        declared: Parity,
    },

    /// A Chebyshev fit was requested on an empty or inverted interval.
    #[error("fit interval [{lo}, {hi}] is empty")]
    EmptyInterval {
        /// Lower edge.
        lo: f64,
        /// Upper edge.
        hi: f64,
    },
}

/// Result type for polynomial operations.
pub type PolyResult<T> = Result<T, PolyError>;
