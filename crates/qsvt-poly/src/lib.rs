//! `qsvt-poly` — polynomial targets for quantum singular value transformation.
//!
//! A QSVT circuit realizes a real polynomial on the singular values of a
//! block-encoded operator. This crate owns the classical half of that
//! contract:
//!
//! - [`PolynomialSpec`] — coefficients, degree, parity, and the
//!   admissibility checks (unit bound on [-1, 1], definite parity) a
//!   polynomial must pass before angle finding is attempted
//! - [`chebyshev`] — basis conversion and [`ChebyshevFit`], the
//!   interpolation layer that turns smooth non-polynomial spectral
//!   functions (√x, fractional powers) into admissible polynomials on a
//!   subinterval
//!
//! # Quick start
//!
//! ```rust
//! use qsvt_poly::{Parity, PolynomialSpec};
//!
//! // T₃(x) = 4x³ − 3x
//! let t3 = PolynomialSpec::new(vec![0.0, -3.0, 0.0, 4.0]).unwrap();
//! assert_eq!(t3.degree(), 3);
//! assert_eq!(t3.parity(), Parity::Odd);
//!
//! // f(x) = 2x escapes the unit bound and is rejected.
//! assert!(PolynomialSpec::new(vec![0.0, 2.0]).is_err());
//! ```

pub mod chebyshev;
pub mod error;
pub mod polynomial;

pub use chebyshev::ChebyshevFit;
pub use error::{PolyError, PolyResult};
pub use polynomial::{Parity, PolynomialSpec};
