//! Chebyshev basis tooling.
//!
//! QSVT angle finding works in the Chebyshev basis, and bounded
//! approximations of non-polynomial spectral functions (√x, fractional
//! powers) are built by Chebyshev interpolation on a subinterval before
//! being handed to the engine. This module provides:
//!
//! - the monomial coefficients of T_k,
//! - exact monomial ⇄ Chebyshev basis conversion for small degrees,
//! - [`ChebyshevFit`]: interpolation of a scalar function at Chebyshev
//!   nodes mapped onto [lo, hi], evaluated by Clenshaw recurrence.

use serde::{Deserialize, Serialize};

use crate::error::{PolyError, PolyResult};

/// Monomial coefficients of the Chebyshev polynomial T_k, indexed by degree.
///
/// T_0 = 1, T_1 = x, T_{k+1} = 2x·T_k − T_{k−1}.
pub fn chebyshev_t(k: usize) -> Vec<f64> {
    let mut prev = vec![1.0];
    if k == 0 {
        return prev;
    }
    let mut cur = vec![0.0, 1.0];
    for _ in 1..k {
        let mut next = vec![0.0; cur.len() + 1];
        for (i, &c) in cur.iter().enumerate() {
            next[i + 1] += 2.0 * c;
        }
        for (i, &c) in prev.iter().enumerate() {
            next[i] -= c;
        }
        prev = cur;
        cur = next;
    }
    cur
}

/// Convert monomial coefficients to Chebyshev coefficients.
///
/// Exact back-substitution against the triangular T_k table; `out[j]` is
/// the weight of T_j, so `Σ_j out[j]·T_j(x) = Σ_k coeffs[k]·x^k`.
pub fn to_chebyshev(coeffs: &[f64]) -> Vec<f64> {
    let n = coeffs.len();
    let mut residual = coeffs.to_vec();
    let mut out = vec![0.0; n];
    for j in (0..n).rev() {
        let table = chebyshev_t(j);
        // Leading coefficient of T_j is 2^{j-1} (1 for j = 0).
        out[j] = residual[j] / table[j];
        for (i, &t) in table.iter().enumerate() {
            residual[i] -= out[j] * t;
        }
    }
    out
}

/// Convert Chebyshev coefficients back to monomial coefficients.
pub fn from_chebyshev(cheb: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; cheb.len().max(1)];
    for (j, &a) in cheb.iter().enumerate() {
        for (i, &t) in chebyshev_t(j).iter().enumerate() {
            out[i] += a * t;
        }
    }
    out
}

/// Evaluate `Σ_j coeffs[j]·T_j(x)` by the Clenshaw recurrence.
pub fn chebyshev_value(coeffs: &[f64], x: f64) -> f64 {
    let mut b1 = 0.0;
    let mut b2 = 0.0;
    for &a in coeffs.iter().skip(1).rev() {
        let b = a + 2.0 * x * b1 - b2;
        b2 = b1;
        b1 = b;
    }
    coeffs.first().copied().unwrap_or(0.0) + x * b1 - b2
}

/// A Chebyshev interpolant of a scalar function on [lo, hi].
///
/// Used to turn smooth non-polynomial targets (√x, x^α) into bounded
/// polynomials on the subinterval where the spectrum lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChebyshevFit {
    coeffs: Vec<f64>,
    lo: f64,
    hi: f64,
}

impl ChebyshevFit {
    /// Interpolate `f` at `degree + 1` Chebyshev nodes mapped onto [lo, hi].
    pub fn new<F: Fn(f64) -> f64>(f: F, lo: f64, hi: f64, degree: usize) -> PolyResult<Self> {
        if !(hi > lo) {
            return Err(PolyError::EmptyInterval { lo, hi });
        }
        let n = degree + 1;
        let ys: Vec<f64> = (0..n)
            .map(|k| {
                let s = (std::f64::consts::PI * (k as f64 + 0.5) / n as f64).cos();
                f(lo + (hi - lo) * (s + 1.0) / 2.0)
            })
            .collect();
        let mut coeffs = vec![0.0; n];
        for (j, c) in coeffs.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (k, &y) in ys.iter().enumerate() {
                sum += y * (std::f64::consts::PI * j as f64 * (k as f64 + 0.5) / n as f64).cos();
            }
            *c = 2.0 * sum / n as f64;
        }
        // Fold the standard ½·c_0 convention into the stored coefficients.
        coeffs[0] /= 2.0;
        Ok(Self { coeffs, lo, hi })
    }

    /// Evaluate the interpolant at `t ∈ [lo, hi]`.
    pub fn value(&self, t: f64) -> f64 {
        let s = (2.0 * t - self.lo - self.hi) / (self.hi - self.lo);
        chebyshev_value(&self.coeffs, s)
    }

    /// Chebyshev coefficients on the mapped variable.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// The fitted interval.
    pub fn interval(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t3_coefficients() {
        // T_3 = 4x³ − 3x
        assert_eq!(chebyshev_t(3), vec![0.0, -3.0, 0.0, 4.0]);
    }

    #[test]
    fn basis_round_trip() {
        let mono = vec![0.25, -0.5, 0.125, 0.375];
        let back = from_chebyshev(&to_chebyshev(&mono));
        for (a, b) in mono.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn clenshaw_matches_direct_sum() {
        // x² = (T_0 + T_2)/2
        let cheb = to_chebyshev(&[0.0, 0.0, 1.0]);
        assert!((cheb[0] - 0.5).abs() < 1e-15);
        assert!((cheb[2] - 0.5).abs() < 1e-15);
        assert!((chebyshev_value(&cheb, 0.7) - 0.49).abs() < 1e-14);
    }
}
