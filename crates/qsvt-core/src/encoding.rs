//! Block encodings of scalars and matrices.
//!
//! A block encoding is a unitary whose designated top-left block equals
//! the source operator scaled by 1/α. Three construction strategies are
//! supported:
//!
//! - [`BlockEncoding::scalar`] — the minimal 2×2 signal rotation `W(x)`
//!   used by the scalar QSP case,
//! - [`BlockEncoding::hermitian`] — the qubitized dilation
//!   `[[A, i√(I−A²)], [i√(I−A²), A]]`, which acts as `W(λ)` on each
//!   eigenspace of a Hermitian A,
//! - [`BlockEncoding::embed`] — the generic SVD two-block completion
//!   `[[A, √(I−AAᴴ)], [√(I−AᴴA), −Aᴴ]]` for any square A.
//!
//! All strategies are simulation-only explicit dilations, suitable for
//! the small dense matrices this engine targets. The ancilla-zero
//! subspace is the *first* block row/column; the simulator and
//! [`extract_block`] both rely on that ordering.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Tolerance on the Hermiticity boundary check.
pub const HERMITICITY_EPS: f64 = 1e-10;

/// Slack on spectral-norm boundary checks.
pub const NORM_EPS: f64 = 1e-9;

/// How a block encoding was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodingStrategy {
    /// 2×2 signal rotation for a scalar in [-1, 1].
    Scalar,
    /// Qubitized Hermitian dilation.
    Hermitian,
    /// Generic SVD unitary completion.
    Dilation,
}

/// An immutable unitary embedding of a source operator.
#[derive(Debug, Clone)]
pub struct BlockEncoding {
    unitary: DMatrix<Complex64>,
    alpha: f64,
    logical_dim: usize,
    strategy: EncodingStrategy,
}

impl BlockEncoding {
    /// The minimal signal rotation `W(x)` for a scalar `x ∈ [-1, 1]`.
    pub fn scalar(x: f64) -> CoreResult<Self> {
        if x.abs() > 1.0 + NORM_EPS {
            return Err(CoreError::ScalarOutOfRange { value: x });
        }
        let s = (1.0 - x * x).max(0.0).sqrt();
        let unitary = DMatrix::from_row_slice(
            2,
            2,
            &[
                Complex64::new(x, 0.0),
                Complex64::new(0.0, s),
                Complex64::new(0.0, s),
                Complex64::new(x, 0.0),
            ],
        );
        Ok(Self {
            unitary,
            alpha: 1.0,
            logical_dim: 1,
            strategy: EncodingStrategy::Scalar,
        })
    }

    /// Qubitized dilation of a Hermitian operator with ‖A‖ ≤ 1.
    pub fn hermitian(a: &DMatrix<Complex64>) -> CoreResult<Self> {
        Self::hermitian_scaled(a, 1.0)
    }

    /// Qubitized dilation of `A/α` for a Hermitian A with ‖A‖ ≤ α.
    pub fn hermitian_scaled(a: &DMatrix<Complex64>, alpha: f64) -> CoreResult<Self> {
        let n = require_square(a)?;
        require_normalization(alpha)?;
        let deviation = hermiticity_deviation(a);
        if deviation > HERMITICITY_EPS {
            return Err(CoreError::NotHermitian { deviation });
        }
        let scaled = a.map(|e| e / alpha);

        let eigen = scaled.clone().symmetric_eigen();
        let spectral_norm = eigen.eigenvalues.amax();
        if spectral_norm > 1.0 + NORM_EPS {
            return Err(CoreError::NormBound {
                norm: spectral_norm * alpha,
                alpha,
            });
        }
        // √(I − A²) through the same eigenbasis; clamp guards roundoff at
        // eigenvalues on the unit boundary.
        let root_values = eigen
            .eigenvalues
            .map(|l| Complex64::new((1.0 - l * l).max(0.0).sqrt(), 0.0));
        let root = recompose(&eigen.eigenvectors, &root_values);

        let i = Complex64::new(0.0, 1.0);
        let unitary = assemble(&scaled, &root.map(|e| e * i), &root.map(|e| e * i), &scaled);
        debug!(n, alpha, "built Hermitian block encoding");
        Ok(Self {
            unitary,
            alpha,
            logical_dim: n,
            strategy: EncodingStrategy::Hermitian,
        })
    }

    /// Generic unitary completion of a square operator with ‖A‖ ≤ 1.
    pub fn embed(a: &DMatrix<Complex64>) -> CoreResult<Self> {
        Self::embed_scaled(a, 1.0)
    }

    /// Generic unitary completion of `A/α` for any square A with σ_max ≤ α.
    pub fn embed_scaled(a: &DMatrix<Complex64>, alpha: f64) -> CoreResult<Self> {
        let n = require_square(a)?;
        require_normalization(alpha)?;
        let scaled = a.map(|e| e / alpha);

        let svd = scaled.clone().svd(true, true);
        let sigma_max = svd.singular_values.max();
        if sigma_max > 1.0 + NORM_EPS {
            return Err(CoreError::NormBound {
                norm: sigma_max * alpha,
                alpha,
            });
        }
        let u = svd.u.as_ref().expect("SVD computed with u requested");
        let v_t = svd.v_t.as_ref().expect("SVD computed with v_t requested");
        let v = v_t.adjoint();
        let root_values = svd
            .singular_values
            .map(|s| Complex64::new((1.0 - s * s).max(0.0).sqrt(), 0.0));
        // √(I − AAᴴ) and √(I − AᴴA) share singular values with A.
        let top_right = recompose(u, &root_values);
        let bottom_left = recompose(&v, &root_values);
        let neg_adjoint = scaled.adjoint().map(|e| -e);

        let unitary = assemble(&scaled, &top_right, &bottom_left, &neg_adjoint);
        debug!(n, alpha, sigma_max, "built SVD dilation encoding");
        Ok(Self {
            unitary,
            alpha,
            logical_dim: n,
            strategy: EncodingStrategy::Dilation,
        })
    }

    /// The enlarged unitary (dimension `2·logical_dim`).
    pub fn unitary(&self) -> &DMatrix<Complex64> {
        &self.unitary
    }

    /// The normalization constant α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Dimension of the encoded operator.
    pub fn logical_dim(&self) -> usize {
        self.logical_dim
    }

    /// Dimension of the enlarged unitary.
    pub fn dim(&self) -> usize {
        self.unitary.nrows()
    }

    /// The construction strategy.
    pub fn strategy(&self) -> EncodingStrategy {
        self.strategy
    }

    /// The ancilla-zero block of the enlarged unitary (equals `A/α`).
    pub fn extract_block(&self) -> DMatrix<Complex64> {
        extract_block(&self.unitary, self.logical_dim)
    }

    /// `α ·` [`Self::extract_block`] — reproduces the source operator.
    pub fn reconstruct(&self) -> DMatrix<Complex64> {
        self.extract_block().map(|e| e * self.alpha)
    }
}

/// Top-left `n×n` block of an enlarged operator.
pub fn extract_block(u: &DMatrix<Complex64>, n: usize) -> DMatrix<Complex64> {
    u.view((0, 0), (n, n)).into_owned()
}

/// Largest entrywise deviation of `a` from its adjoint.
pub fn hermiticity_deviation(a: &DMatrix<Complex64>) -> f64 {
    let adjoint = a.adjoint();
    (a - adjoint).iter().map(|e| e.norm()).fold(0.0, f64::max)
}

fn require_square(a: &DMatrix<Complex64>) -> CoreResult<usize> {
    if a.nrows() != a.ncols() {
        return Err(CoreError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    Ok(a.nrows())
}

fn require_normalization(alpha: f64) -> CoreResult<()> {
    if alpha < 1.0 {
        return Err(CoreError::InvalidNormalization { alpha });
    }
    Ok(())
}

/// `basis · diag(values) · basisᴴ`.
fn recompose(basis: &DMatrix<Complex64>, values: &DVector<Complex64>) -> DMatrix<Complex64> {
    basis * DMatrix::from_diagonal(values) * basis.adjoint()
}

/// Assemble `[[tl, tr], [bl, br]]` into a single 2n×2n matrix.
fn assemble(
    tl: &DMatrix<Complex64>,
    tr: &DMatrix<Complex64>,
    bl: &DMatrix<Complex64>,
    br: &DMatrix<Complex64>,
) -> DMatrix<Complex64> {
    let n = tl.nrows();
    DMatrix::from_fn(2 * n, 2 * n, |i, j| match (i < n, j < n) {
        (true, true) => tl[(i, j)],
        (true, false) => tr[(i, j - n)],
        (false, true) => bl[(i - n, j)],
        (false, false) => br[(i - n, j - n)],
    })
}
