//! `qsvt-core` — the quantum singular value transformation engine.
//!
//! Given an admissible target polynomial (from `qsvt-poly`) and a source
//! operator, the engine:
//!
//! 1. solves for the phase-angle sequence realizing the polynomial on a
//!    signal unitary ([`PhaseAngleSolver`]),
//! 2. builds a unitary block encoding of the operator ([`BlockEncoding`]),
//! 3. composes the interleaved signal/phase sequence
//!    ([`CircuitSimulator`]) into the transformed operator,
//! 4. verifies the transformed spectrum against classical evaluation
//!    ([`SpectrumVerifier`]).
//!
//! Everything is deterministic, synchronous dense linear algebra over
//! matrices with dimensions in the tens; eigendecomposition and SVD are
//! delegated to `nalgebra`.
//!
//! # Quick start
//!
//! ```rust
//! use qsvt_core::{BlockEncoding, CircuitSimulator, PhaseAngleSolver};
//! use qsvt_poly::PolynomialSpec;
//!
//! // T₃(x) = 4x³ − 3x applied to the scalar x = 0.5.
//! let t3 = PolynomialSpec::chebyshev(3);
//! let angles = PhaseAngleSolver::new().solve(&t3).unwrap();
//! let encoding = BlockEncoding::scalar(0.5).unwrap();
//! let composite = CircuitSimulator::new(&encoding, &angles).run();
//!
//! let realized = composite.top_left_scalar().re;
//! assert!((realized - t3.evaluate(0.5)).abs() < 1e-10); // T₃(0.5) = −1
//! ```

pub mod angles;
pub mod encoding;
pub mod error;
pub mod simulator;
pub mod spectral;
pub mod verify;

pub use angles::{AngleSequence, PhaseAngleSolver};
pub use encoding::{BlockEncoding, EncodingStrategy};
pub use error::{CoreError, CoreResult};
pub use simulator::{CircuitSimulator, CompositeOperator};
pub use spectral::{apply_spectral_function, matrix_power};
pub use verify::{SpectrumVerifier, VerificationResult};
