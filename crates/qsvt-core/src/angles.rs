//! Phase-angle finding for quantum signal processing.
//!
//! # Conventions (fixed for the whole engine)
//!
//! - Signal operator: `W(x) = [[x, i√(1-x²)], [i√(1-x²), x]]`, i.e.
//!   `exp(iθX)` with `x = cos θ`.
//! - Phase operator: `exp(iφ(2Π−I))` with Π the ancilla-zero projector;
//!   on the scalar encoding this is `exp(iφZ)`.
//! - Realized polynomial: `Re ⟨0|·|0⟩` of the interleaved product. The
//!   all-zero *internal* phase vector realizes the Chebyshev polynomial
//!   T_d; this anchors the sign/branch convention.
//! - Published angles are in the alternating-signal convention consumed
//!   by the simulator (signal, adjoint, signal, …). They differ from the
//!   internal Wx angles by a fixed shift: +π/2 on every interior angle,
//!   +π/2 on the trailing angle when the degree is even, and +π on the
//!   leading angle when ⌊d/2⌋ is odd. The simulator applies them
//!   verbatim; keep the two sides in lockstep or sign flips follow.
//!
//! # Algorithm
//!
//! The interleaved product is SU(2)-valued, so it can be tracked exactly
//! as four real trigonometric series (cos-series for the I/Z components,
//! sin-series for X/Y). The realized Chebyshev coefficients of the target
//! component are therefore exact linear algebra in the phases, and the
//! angle-finding problem reduces to matching the definite-parity
//! coefficients of the target. A damped Newton iteration over the
//! symmetric reduced phase vector (finite-difference Jacobian, Levenberg
//! fallback, deterministic seed ladder) solves that system; Chebyshev
//! targets short-circuit to the zero internal vector.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use qsvt_poly::{Parity, PolynomialSpec};

use crate::error::{CoreError, CoreResult};

/// Default ∞-norm tolerance on the coefficient-matching residual.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default Newton iteration budget per seed.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Deterministic seed ladder for the reduced phase vector.
const SEEDS: [f64; 5] = [0.3, 0.7, -0.4, 1.1, -0.9];

/// Central-difference step for the Jacobian.
const JACOBIAN_STEP: f64 = 1e-6;

/// An ordered phase-angle sequence realizing one target polynomial.
///
/// Length is `degree + 1` for both parities. Immutable; consumed
/// read-only by the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleSequence {
    angles: Vec<f64>,
    parity: Parity,
    degree: usize,
}

impl AngleSequence {
    /// The published angles, in application order.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Number of angles (`degree + 1`).
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always false; a sequence carries at least the leading angle.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Degree of the realized polynomial.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Parity of the realized polynomial.
    pub fn parity(&self) -> Parity {
        self.parity
    }
}

/// Solver configuration. Pure: identical input yields bit-identical output.
#[derive(Debug, Clone, Copy)]
pub struct PhaseAngleSolver {
    tolerance: f64,
    max_iterations: usize,
}

impl Default for PhaseAngleSolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PhaseAngleSolver {
    /// Solver with default tolerance and iteration budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the residual tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Override the per-seed iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Compute the angle sequence realizing `poly`.
    ///
    /// Rejects mixed parity; a constant polynomial yields the length-1
    /// sequence `[acos(c₀)]`. Non-convergence within the iteration budget
    /// returns [`CoreError::AngleSolverDivergence`] naming the degree.
    pub fn solve(&self, poly: &PolynomialSpec) -> CoreResult<AngleSequence> {
        if !poly.has_definite_parity() {
            return Err(CoreError::MixedParity);
        }
        let degree = poly.degree();
        let parity = poly.parity();

        if degree == 0 {
            let c0 = poly.coefficients()[0].clamp(-1.0, 1.0);
            return Ok(AngleSequence {
                angles: vec![c0.acos()],
                parity,
                degree,
            });
        }

        let cheb = poly.chebyshev_coefficients();
        let target: Vec<f64> = (degree % 2..=degree).step_by(2).map(|k| cheb[k]).collect();

        let internal = if is_pure_chebyshev(&target) {
            // T_d is realized by the zero internal vector; this fixes the
            // branch for the whole Chebyshev family.
            vec![0.0; degree + 1]
        } else {
            self.solve_newton(&target, degree)?
        };

        debug!(degree, ?parity, "phase angles solved");
        Ok(AngleSequence {
            angles: to_alternating(&internal, degree),
            parity,
            degree,
        })
    }

    /// Damped Newton iteration on the symmetric reduced phase vector.
    fn solve_newton(&self, target: &[f64], degree: usize) -> CoreResult<Vec<f64>> {
        let m = target.len();
        let target = DVector::from_column_slice(target);
        let mut last_residual = f64::INFINITY;

        for &seed in &SEEDS {
            let mut psi = DVector::from_element(m, seed);
            let mut residual = residual_vector(&psi, &target, degree);
            let mut norm = residual.amax();

            for iteration in 0..self.max_iterations {
                if norm < self.tolerance {
                    debug!(degree, seed, iteration, norm, "angle iteration converged");
                    return Ok(mirror(psi.as_slice(), degree));
                }
                let jacobian = jacobian_matrix(&psi, &target, degree);
                match damped_step(&jacobian, &residual, &psi, &target, degree, norm) {
                    Some((next_psi, next_residual, next_norm)) => {
                        psi = next_psi;
                        residual = next_residual;
                        norm = next_norm;
                    }
                    // No damping level reduced the residual: restart from
                    // the next seed.
                    None => break,
                }
            }
            if norm < self.tolerance {
                return Ok(mirror(psi.as_slice(), degree));
            }
            last_residual = last_residual.min(norm);
        }

        Err(CoreError::AngleSolverDivergence {
            degree,
            residual: last_residual,
            iterations: self.max_iterations,
        })
    }
}

/// True if the target is the unit vector on its top coefficient.
fn is_pure_chebyshev(target: &[f64]) -> bool {
    let (last, rest) = target.split_last().expect("degree ≥ 1 has coefficients");
    (last - 1.0).abs() < 1e-13 && rest.iter().all(|c| c.abs() < 1e-13)
}

/// Expand the reduced symmetric vector to the full phase list.
fn mirror(psi: &[f64], degree: usize) -> Vec<f64> {
    (0..=degree).map(|i| psi[i.min(degree - i)]).collect()
}

/// Residual of the realized definite-parity coefficients against the target.
fn residual_vector(psi: &DVector<f64>, target: &DVector<f64>, degree: usize) -> DVector<f64> {
    let phases = mirror(psi.as_slice(), degree);
    let realized = realized_chebyshev(&phases, degree);
    let picked: Vec<f64> = (degree % 2..=degree)
        .step_by(2)
        .map(|k| realized[k])
        .collect();
    DVector::from_vec(picked) - target
}

/// Central-difference Jacobian of the residual in the reduced phases.
fn jacobian_matrix(psi: &DVector<f64>, target: &DVector<f64>, degree: usize) -> DMatrix<f64> {
    let m = psi.len();
    let mut jacobian = DMatrix::zeros(m, m);
    for j in 0..m {
        let mut hi = psi.clone();
        let mut lo = psi.clone();
        hi[j] += JACOBIAN_STEP;
        lo[j] -= JACOBIAN_STEP;
        let column =
            (residual_vector(&hi, target, degree) - residual_vector(&lo, target, degree))
                / (2.0 * JACOBIAN_STEP);
        jacobian.set_column(j, &column);
    }
    jacobian
}

/// One Newton step with Levenberg fallback; returns the first damping
/// level that strictly reduces the residual ∞-norm.
fn damped_step(
    jacobian: &DMatrix<f64>,
    residual: &DVector<f64>,
    psi: &DVector<f64>,
    target: &DVector<f64>,
    degree: usize,
    current_norm: f64,
) -> Option<(DVector<f64>, DVector<f64>, f64)> {
    let mut candidates: Vec<DVector<f64>> = Vec::new();
    if let Some(step) = jacobian.clone().lu().solve(&(-residual)) {
        candidates.push(step);
    }
    for lambda in [1e-8, 1e-4, 1e-2, 1.0, 1e2] {
        let m = jacobian.ncols();
        let normal = jacobian.transpose() * jacobian + DMatrix::identity(m, m) * lambda;
        let rhs = jacobian.transpose() * (-residual);
        if let Some(step) = normal.lu().solve(&rhs) {
            candidates.push(step);
        }
    }
    for step in candidates {
        let next_psi = psi + &step;
        let next_residual = residual_vector(&next_psi, target, degree);
        let next_norm = next_residual.amax();
        if next_norm < current_norm {
            return Some((next_psi, next_residual, next_norm));
        }
    }
    None
}

/// Convert internal Wx phases to the published alternating convention.
fn to_alternating(internal: &[f64], degree: usize) -> Vec<f64> {
    use std::f64::consts::{FRAC_PI_2, PI};

    let mut out = internal.to_vec();
    for angle in out.iter_mut().take(degree).skip(1) {
        *angle += FRAC_PI_2;
    }
    if degree % 2 == 0 {
        out[degree] += FRAC_PI_2;
    }
    if (degree / 2) % 2 == 1 {
        out[0] += PI;
    }
    for angle in &mut out {
        *angle = wrap_angle(*angle);
    }
    out
}

/// Reduce an angle to (−π, π].
fn wrap_angle(angle: f64) -> f64 {
    use std::f64::consts::PI;
    let wrapped = angle.rem_euclid(2.0 * PI);
    if wrapped > PI { wrapped - 2.0 * PI } else { wrapped }
}

// ---------------------------------------------------------------------------
// Exact forward map: SU(2) product as trigonometric series
// ---------------------------------------------------------------------------

/// Chebyshev coefficients of the realized polynomial `Re ⟨0|·|0⟩` for the
/// internal Wx product `Z(φ₀)·∏ₖ X(θ)·Z(φₖ)` with `x = cos θ`.
///
/// The product is tracked as `p₀·I + i(pₓX + p_yY + p_zZ)` where p₀, p_z
/// are cos-series and pₓ, p_y sin-series in θ; every update below is the
/// exact product-to-sum identity, so the returned coefficients carry no
/// truncation error.
fn realized_chebyshev(phases: &[f64], degree: usize) -> Vec<f64> {
    let n = degree + 1;
    let mut p0 = vec![0.0; n];
    let mut px = vec![0.0; n];
    let mut py = vec![0.0; n];
    let mut pz = vec![0.0; n];
    p0[0] = phases[0].cos();
    pz[0] = phases[0].sin();

    for &phi in &phases[1..] {
        // Right-multiply by the signal exp(iθX).
        let q0 = sub(&mul_cos_by_cos(&p0), &mul_sin_by_sin(&px));
        let qx = add(&mul_cos_by_sin(&p0), &mul_sin_by_cos(&px));
        let qy = sub(&mul_sin_by_cos(&py), &mul_cos_by_sin(&pz));
        let qz = add(&mul_cos_by_cos(&pz), &mul_sin_by_sin(&py));
        // Right-multiply by the phase exp(iφZ).
        let (c, s) = (phi.cos(), phi.sin());
        p0 = combine(&q0, &qz, c, -s);
        pz = combine(&qz, &q0, c, s);
        px = combine(&qx, &qy, c, -s);
        py = combine(&qy, &qx, c, s);
    }
    p0
}

fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// `c·a + s·b` elementwise.
fn combine(a: &[f64], b: &[f64], c: f64, s: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| c * x + s * y).collect()
}

/// cos θ · Σ aₖ cos kθ → cos-series (`cos θ cos kθ = ½[cos(k+1)θ + cos|k−1|θ]`).
fn mul_cos_by_cos(a: &[f64]) -> Vec<f64> {
    let n = a.len();
    let mut out = vec![0.0; n];
    for (k, &c) in a.iter().enumerate() {
        let half = 0.5 * c;
        if k + 1 < n {
            out[k + 1] += half;
        }
        let down = if k >= 1 { k - 1 } else { 1 };
        if down < n {
            out[down] += half;
        }
    }
    out
}

/// sin θ · Σ bₖ sin kθ → cos-series (`sin θ sin kθ = ½[cos(k−1)θ − cos(k+1)θ]`).
fn mul_sin_by_sin(b: &[f64]) -> Vec<f64> {
    let n = b.len();
    let mut out = vec![0.0; n];
    for (k, &c) in b.iter().enumerate().skip(1) {
        let half = 0.5 * c;
        out[k - 1] += half;
        if k + 1 < n {
            out[k + 1] -= half;
        }
    }
    out
}

/// cos θ · Σ bₖ sin kθ → sin-series (`cos θ sin kθ = ½[sin(k+1)θ + sin(k−1)θ]`).
fn mul_sin_by_cos(b: &[f64]) -> Vec<f64> {
    let n = b.len();
    let mut out = vec![0.0; n];
    for (k, &c) in b.iter().enumerate().skip(1) {
        let half = 0.5 * c;
        if k + 1 < n {
            out[k + 1] += half;
        }
        if k >= 2 {
            out[k - 1] += half;
        }
    }
    out
}

/// sin θ · Σ aₖ cos kθ → sin-series (`sin θ cos kθ = ½[sin(k+1)θ − sin(k−1)θ]`).
fn mul_cos_by_sin(a: &[f64]) -> Vec<f64> {
    let n = a.len();
    let mut out = vec![0.0; n];
    for (k, &c) in a.iter().enumerate() {
        if k == 0 {
            if n > 1 {
                out[1] += c;
            }
        } else {
            let half = 0.5 * c;
            if k + 1 < n {
                out[k + 1] += half;
            }
            if k >= 2 {
                out[k - 1] -= half;
            }
        }
    }
    out
}
