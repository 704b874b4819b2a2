//! Target polynomial specifications.
//!
//! A [`PolynomialSpec`] is a real polynomial
//!
//!   f(x) = Σ_k c_k x^k
//!
//! intended as a QSVT target. Admissibility is enforced at construction:
//! the polynomial must stay within the unit bound on [-1, 1] (sampled on a
//! dense grid), and a declared parity must match the coefficients. Mixed
//! parity is representable but is rejected by consumers that require the
//! unitary decomposition to exist.
//!
//! # Example
//!
//! ```rust
//! use qsvt_poly::PolynomialSpec;
//!
//! // f(x) = x²
//! let f = PolynomialSpec::new(vec![0.0, 0.0, 1.0]).unwrap();
//! assert_eq!(f.degree(), 2);
//! assert!((f.evaluate(0.7) - 0.49).abs() < 1e-15);
//! ```

use serde::{Deserialize, Serialize};

use crate::chebyshev;
use crate::error::{PolyError, PolyResult};

/// Tolerance below which a coefficient counts as numerically zero.
pub const COEFF_EPS: f64 = 1e-12;

/// Slack allowed on the |f(x)| ≤ 1 admissibility bound.
pub const BOUND_EPS: f64 = 1e-9;

/// Parity of a polynomial's nonzero terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    /// All nonzero coefficients sit at even degrees.
    Even,
    /// All nonzero coefficients sit at odd degrees.
    Odd,
    /// Both parities carry weight; not realizable by a single QSVT sequence.
    Mixed,
}

impl Parity {
    /// The parity of a single degree-`k` term.
    pub fn of_degree(k: usize) -> Self {
        if k % 2 == 0 { Parity::Even } else { Parity::Odd }
    }
}

/// An immutable real polynomial with validated QSVT admissibility.
///
/// Coefficients are stored dense, indexed by degree, with trailing
/// numerically-zero coefficients trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialSpec {
    coeffs: Vec<f64>,
    parity: Parity,
}

impl PolynomialSpec {
    /// Construct from monomial coefficients, inferring the parity.
    ///
    /// Fails with [`PolyError::Empty`] on empty input and
    /// [`PolyError::Unbounded`] if any sample of a dense grid on [-1, 1]
    /// exceeds the unit bound (the error names the violating point).
    pub fn new(coeffs: Vec<f64>) -> PolyResult<Self> {
        if coeffs.is_empty() {
            return Err(PolyError::Empty);
        }
        let coeffs = trim(coeffs);
        let parity = infer_parity(&coeffs);
        let spec = Self { coeffs, parity };
        spec.check_bounded()?;
        Ok(spec)
    }

    /// Construct with a declared parity.
    ///
    /// Every coefficient of the opposite parity must be numerically zero;
    /// otherwise [`PolyError::ParityViolation`] names the offending degree.
    pub fn with_parity(coeffs: Vec<f64>, declared: Parity) -> PolyResult<Self> {
        if coeffs.is_empty() {
            return Err(PolyError::Empty);
        }
        if declared != Parity::Mixed {
            for (index, &value) in coeffs.iter().enumerate() {
                if Parity::of_degree(index) != declared && value.abs() > COEFF_EPS {
                    return Err(PolyError::ParityViolation {
                        index,
                        value,
                        declared,
                    });
                }
            }
        }
        let coeffs = trim(coeffs);
        let spec = Self {
            coeffs,
            parity: declared,
        };
        spec.check_bounded()?;
        Ok(spec)
    }

    /// The Chebyshev polynomial T_k as a spec (bounded by construction).
    pub fn chebyshev(k: usize) -> Self {
        let coeffs = chebyshev::chebyshev_t(k);
        let parity = infer_parity(&coeffs);
        Self { coeffs, parity }
    }

    /// Monomial coefficients, indexed by degree.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Degree of the polynomial (0 for constants, including the zero poly).
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The (inferred or declared) parity.
    pub fn parity(&self) -> Parity {
        self.parity
    }

    /// True unless the parity is [`Parity::Mixed`].
    pub fn has_definite_parity(&self) -> bool {
        self.parity != Parity::Mixed
    }

    /// Classical evaluation by Horner's rule.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Coefficients in the Chebyshev basis, indexed by order.
    pub fn chebyshev_coefficients(&self) -> Vec<f64> {
        chebyshev::to_chebyshev(&self.coeffs)
    }

    /// Boundedness check over a dense grid (at least 10 points per degree).
    fn check_bounded(&self) -> PolyResult<()> {
        let n = (10 * self.degree()).max(101);
        for i in 0..n {
            let x = -1.0 + 2.0 * i as f64 / (n - 1) as f64;
            let value = self.evaluate(x).abs();
            if value > 1.0 + BOUND_EPS {
                return Err(PolyError::Unbounded { x, value });
            }
        }
        Ok(())
    }
}

/// Drop trailing numerically-zero coefficients, keeping at least one.
fn trim(mut coeffs: Vec<f64>) -> Vec<f64> {
    while coeffs.len() > 1 && coeffs.last().is_some_and(|c| c.abs() <= COEFF_EPS) {
        coeffs.pop();
    }
    coeffs
}

fn infer_parity(coeffs: &[f64]) -> Parity {
    let has_even = coeffs
        .iter()
        .step_by(2)
        .any(|c| c.abs() > COEFF_EPS);
    let has_odd = coeffs
        .iter()
        .skip(1)
        .step_by(2)
        .any(|c| c.abs() > COEFF_EPS);
    match (has_even, has_odd) {
        (true, true) => Parity::Mixed,
        (false, true) => Parity::Odd,
        // The zero polynomial counts as even.
        _ => Parity::Even,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_zeros_are_trimmed() {
        let f = PolynomialSpec::new(vec![0.0, 1.0, 0.0, 0.0]).unwrap();
        assert_eq!(f.degree(), 1);
        assert_eq!(f.parity(), Parity::Odd);
    }

    #[test]
    fn zero_polynomial_is_even_degree_zero() {
        let f = PolynomialSpec::new(vec![0.0]).unwrap();
        assert_eq!(f.degree(), 0);
        assert_eq!(f.parity(), Parity::Even);
    }
}
