//! Tests for block-encoding construction.

use nalgebra::DMatrix;
use num_complex::Complex64;

use qsvt_core::{BlockEncoding, CoreError, EncodingStrategy};

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Largest entrywise deviation of `UᴴU` from the identity.
fn unitarity_deviation(u: &DMatrix<Complex64>) -> f64 {
    let product = u.adjoint() * u;
    let identity = DMatrix::<Complex64>::identity(u.nrows(), u.ncols());
    (product - identity).iter().map(|e| e.norm()).fold(0.0, f64::max)
}

/// A fixed 3×3 Hermitian test operator with spectral norm below 1.
fn hermitian_sample() -> DMatrix<Complex64> {
    DMatrix::from_row_slice(
        3,
        3,
        &[
            c(0.30, 0.0),
            c(0.10, -0.05),
            c(0.00, 0.20),
            c(0.10, 0.05),
            c(-0.20, 0.0),
            c(0.15, 0.0),
            c(0.00, -0.20),
            c(0.15, 0.0),
            c(0.40, 0.0),
        ],
    )
}

// ---------------------------------------------------------------------------
// Scalar encoding
// ---------------------------------------------------------------------------

#[test]
fn scalar_strategy_and_dimensions() {
    let enc = BlockEncoding::scalar(0.25).unwrap();
    assert_eq!(enc.strategy(), EncodingStrategy::Scalar);
    assert_eq!(enc.dim(), 2);
    assert_eq!(enc.logical_dim(), 1);
    assert!((enc.alpha() - 1.0).abs() < 1e-15);
    assert!((enc.extract_block()[(0, 0)].re - 0.25).abs() < 1e-15);
}

#[test]
fn scalar_endpoints_are_admissible() {
    for x in [-1.0, 0.0, 1.0] {
        let enc = BlockEncoding::scalar(x).unwrap();
        assert!(unitarity_deviation(enc.unitary()) < 1e-14);
    }
}

// ---------------------------------------------------------------------------
// Hermitian qubitized dilation
// ---------------------------------------------------------------------------

#[test]
fn hermitian_dilation_is_unitary_and_round_trips() {
    let a = hermitian_sample();
    let enc = BlockEncoding::hermitian(&a).unwrap();
    assert_eq!(enc.strategy(), EncodingStrategy::Hermitian);
    assert_eq!(enc.dim(), 6);
    assert!(unitarity_deviation(enc.unitary()) < 1e-12);

    let diff = enc.reconstruct() - &a;
    assert!(diff.iter().all(|e| e.norm() < 1e-12));
}

#[test]
fn hermitian_scaled_divides_by_alpha() {
    let a = DMatrix::from_diagonal(&nalgebra::DVector::from_vec(vec![c(1.8, 0.0), c(0.4, 0.0)]));
    let enc = BlockEncoding::hermitian_scaled(&a, 2.0).unwrap();
    assert!((enc.alpha() - 2.0).abs() < 1e-15);
    let block = enc.extract_block();
    assert!((block[(0, 0)].re - 0.9).abs() < 1e-12);
    assert!((block[(1, 1)].re - 0.2).abs() < 1e-12);
    let diff = enc.reconstruct() - &a;
    assert!(diff.iter().all(|e| e.norm() < 1e-12));
}

#[test]
fn hermitian_rejects_norm_violation() {
    let a = DMatrix::from_diagonal(&nalgebra::DVector::from_vec(vec![c(1.5, 0.0), c(0.2, 0.0)]));
    match BlockEncoding::hermitian(&a) {
        Err(CoreError::NormBound { norm, alpha }) => {
            assert!((norm - 1.5).abs() < 1e-12);
            assert!((alpha - 1.0).abs() < 1e-15);
        }
        other => panic!("expected NormBound, got {other:?}"),
    }
}

#[test]
fn hermitian_rejects_non_hermitian_input() {
    let a = DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(0.5, 0.0), c(-0.5, 0.0), c(0.0, 0.0)]);
    assert!(matches!(
        BlockEncoding::hermitian(&a),
        Err(CoreError::NotHermitian { .. })
    ));
}

#[test]
fn hermitian_rejects_non_square_input() {
    let a = DMatrix::from_element(2, 3, c(0.1, 0.0));
    assert!(matches!(
        BlockEncoding::hermitian(&a),
        Err(CoreError::NotSquare { rows: 2, cols: 3 })
    ));
}

#[test]
fn alpha_below_one_rejected() {
    let a = hermitian_sample();
    assert!(matches!(
        BlockEncoding::hermitian_scaled(&a, 0.5),
        Err(CoreError::InvalidNormalization { .. })
    ));
}

// ---------------------------------------------------------------------------
// Generic SVD completion
// ---------------------------------------------------------------------------

#[test]
fn embed_handles_non_hermitian_operators() {
    let a = DMatrix::from_row_slice(
        2,
        2,
        &[c(0.10, 0.0), c(0.70, 0.0), c(-0.20, 0.0), c(0.30, 0.0)],
    );
    let enc = BlockEncoding::embed(&a).unwrap();
    assert_eq!(enc.strategy(), EncodingStrategy::Dilation);
    assert!(unitarity_deviation(enc.unitary()) < 1e-12);
    let diff = enc.reconstruct() - &a;
    assert!(diff.iter().all(|e| e.norm() < 1e-12));
}

#[test]
fn embed_handles_complex_entries() {
    let a = DMatrix::from_row_slice(
        2,
        2,
        &[c(0.2, 0.1), c(0.3, -0.2), c(0.0, 0.4), c(-0.1, 0.0)],
    );
    let enc = BlockEncoding::embed(&a).unwrap();
    assert!(unitarity_deviation(enc.unitary()) < 1e-12);
    let diff = enc.reconstruct() - &a;
    assert!(diff.iter().all(|e| e.norm() < 1e-12));
}

#[test]
fn embed_rejects_singular_value_above_alpha() {
    let a = DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(1.4, 0.0), c(0.0, 0.0), c(0.0, 0.0)]);
    assert!(matches!(
        BlockEncoding::embed(&a),
        Err(CoreError::NormBound { .. })
    ));
}
