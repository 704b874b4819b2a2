//! Spectrum verification of transformed operators.
//!
//! A read-only diagnostic: eigenvalues (or singular values) of the source
//! operator are pushed through the target polynomial classically and
//! compared against the spectrum of the simulated transform. Matching is
//! by nearest value, since unitary composition does not preserve the
//! labelling of eigenvectors. Failures are reported as structured
//! residual data, not errors — "how wrong" is a legitimate result for an
//! approximate transform.

use nalgebra::DMatrix;
use num_complex::Complex64;
use serde::Serialize;
use tracing::debug;

use qsvt_poly::PolynomialSpec;

use crate::encoding::{HERMITICITY_EPS, hermiticity_deviation};
use crate::error::{CoreError, CoreResult};

/// Default verification tolerance. Looser than the solver tolerance:
/// floating-point error compounds through a multiplication chain whose
/// length grows with the polynomial degree.
pub const DEFAULT_VERIFY_TOLERANCE: f64 = 1e-6;

/// One matched eigenvalue pair.
#[derive(Debug, Clone, Serialize)]
pub struct EigenResidual {
    /// Classical value `f(λ)`.
    pub expected: f64,
    /// Spectral value of the transformed block.
    pub observed: f64,
    /// `|observed − expected|`.
    pub residual: f64,
}

/// Outcome of one verification run.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    /// True when every residual is within tolerance.
    pub passed: bool,
    /// Largest per-pair residual.
    pub worst_residual: f64,
    /// The tolerance the run was judged against.
    pub tolerance: f64,
    /// Per-eigenvalue pairing details, ordered by the source spectrum.
    pub residuals: Vec<EigenResidual>,
}

impl VerificationResult {
    /// Convert a failing result into [`CoreError::VerificationMismatch`].
    pub fn ensure(self) -> CoreResult<Self> {
        if self.passed {
            Ok(self)
        } else {
            Err(CoreError::VerificationMismatch {
                worst_residual: self.worst_residual,
                tolerance: self.tolerance,
            })
        }
    }
}

/// Compares simulated transforms against classical polynomial evaluation.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumVerifier {
    tolerance: f64,
}

impl Default for SpectrumVerifier {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_VERIFY_TOLERANCE,
        }
    }
}

impl SpectrumVerifier {
    /// Verifier with the default tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the residual tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Verify `f(eigenvalues of A)` against the transformed block of a
    /// Hermitian source.
    ///
    /// `transformed` may be the raw complex block; its Hermitian part is
    /// taken internally before the spectra are compared.
    pub fn verify_hermitian(
        &self,
        a: &DMatrix<Complex64>,
        poly: &PolynomialSpec,
        transformed: &DMatrix<Complex64>,
    ) -> CoreResult<VerificationResult> {
        check_dims(a, transformed)?;
        let deviation = hermiticity_deviation(a);
        if deviation > HERMITICITY_EPS {
            return Err(CoreError::NotHermitian { deviation });
        }

        let expected: Vec<f64> = a
            .clone()
            .symmetric_eigen()
            .eigenvalues
            .iter()
            .map(|&l| poly.evaluate(l))
            .collect();
        let hermitian_part = {
            let adjoint = transformed.adjoint();
            (transformed + adjoint).map(|e| e * 0.5)
        };
        let observed: Vec<f64> = hermitian_part
            .symmetric_eigen()
            .eigenvalues
            .iter()
            .copied()
            .collect();

        Ok(self.pair_and_report(expected, observed))
    }

    /// Verify `|f(singular values of A)|` against the singular values of
    /// the transformed block, for generic (non-Hermitian) sources.
    pub fn verify_singular(
        &self,
        a: &DMatrix<Complex64>,
        poly: &PolynomialSpec,
        transformed: &DMatrix<Complex64>,
    ) -> CoreResult<VerificationResult> {
        check_dims(a, transformed)?;
        let expected: Vec<f64> = a
            .clone()
            .svd(false, false)
            .singular_values
            .iter()
            .map(|&s| poly.evaluate(s).abs())
            .collect();
        let observed: Vec<f64> = transformed
            .clone()
            .svd(false, false)
            .singular_values
            .iter()
            .copied()
            .collect();
        Ok(self.pair_and_report(expected, observed))
    }

    /// Nearest-value pairing, deterministic: expected values are walked
    /// in source order, each claiming its closest unclaimed observation.
    fn pair_and_report(&self, expected: Vec<f64>, observed: Vec<f64>) -> VerificationResult {
        let mut remaining: Vec<f64> = observed;
        let mut residuals = Vec::with_capacity(expected.len());
        let mut worst: f64 = 0.0;

        for e in expected {
            let (idx, &nearest) = remaining
                .iter()
                .enumerate()
                .min_by(|(_, x), (_, y)| {
                    (e - **x).abs().total_cmp(&(e - **y).abs())
                })
                .expect("spectra have equal length");
            remaining.swap_remove(idx);
            let residual = (e - nearest).abs();
            worst = worst.max(residual);
            residuals.push(EigenResidual {
                expected: e,
                observed: nearest,
                residual,
            });
        }

        let passed = worst <= self.tolerance;
        debug!(worst, passed, "spectrum verification complete");
        VerificationResult {
            passed,
            worst_residual: worst,
            tolerance: self.tolerance,
            residuals,
        }
    }
}

fn check_dims(a: &DMatrix<Complex64>, b: &DMatrix<Complex64>) -> CoreResult<()> {
    if a.nrows() != a.ncols() {
        return Err(CoreError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    if a.nrows() != b.nrows() || b.nrows() != b.ncols() {
        return Err(CoreError::DimensionMismatch {
            expected: a.nrows(),
            actual: b.nrows(),
        });
    }
    Ok(())
}
