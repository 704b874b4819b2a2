//! Integration tests for the demo suite.
//!
//! End-to-end checks of the composition layer: the linear-system
//! direction comparison and the matrix-function helpers, driven through
//! the full angle-solve / encode / simulate pipeline.

use nalgebra::DVector;
use num_complex::Complex64;

use qsvt_demos::linear_system::{LinearSystemDemo, cosine_similarity};
use qsvt_demos::matrix_functions::{matrix_sqrt, power_deviation, rotation_mixed};
use qsvt_poly::PolynomialSpec;

fn ones(n: usize) -> DVector<Complex64> {
    DVector::from_element(n, Complex64::new(1.0, 0.0))
}

/// Eigenvalues ±0.5 with T₃ standing in for 1/x: the spectrum is
/// symmetric, so P(A)b and A⁻¹b must be (anti-)parallel.
#[test]
fn linear_system_direction_matches_exact_solve() {
    let a = rotation_mixed(0.6, &[0.5, -0.5]);
    let report = LinearSystemDemo::new(a, ones(2), PolynomialSpec::chebyshev(3))
        .run()
        .unwrap();
    assert!(
        report.cosine_similarity >= 0.999,
        "cosine {}",
        report.cosine_similarity
    );
    assert!(report.passed);
    assert_eq!(report.degree, 3);
}

#[test]
fn linear_system_threshold_override() {
    let a = rotation_mixed(0.6, &[0.5, -0.5]);
    let report = LinearSystemDemo::new(a, ones(2), PolynomialSpec::chebyshev(3))
        .with_threshold(1.1)
        .run()
        .unwrap();
    // Cosine can never reach an impossible threshold.
    assert!(!report.passed);
}

#[test]
fn linear_system_rejects_mismatched_rhs() {
    let a = rotation_mixed(0.6, &[0.5, -0.5]);
    assert!(LinearSystemDemo::new(a, ones(3), PolynomialSpec::chebyshev(3))
        .run()
        .is_err());
}

#[test]
fn linear_system_rejects_singular_operator() {
    let a = rotation_mixed(0.3, &[0.5, 0.0]);
    assert!(LinearSystemDemo::new(a, ones(2), PolynomialSpec::chebyshev(3))
        .run()
        .is_err());
}

#[test]
fn sqrt_and_power_compose_to_identity_behavior() {
    // (√A)⁴ must equal A² for a positive operator.
    let a = rotation_mixed(0.5, &[0.81, 0.25]);
    let root = matrix_sqrt(&a, 0.04, 24).unwrap();
    let fourth = &root * &root * &root * &root;
    let squared = &a * &a;
    let deviation = (fourth - squared).iter().map(|e| e.norm()).fold(0.0, f64::max);
    assert!(deviation < 1e-5, "deviation {deviation}");
}

#[test]
fn power_helpers_are_consistent() {
    let a = rotation_mixed(0.9, &[0.6, -0.4]);
    for k in 0..5 {
        assert!(power_deviation(&a, k).unwrap() < 1e-12);
    }
}

#[test]
fn cosine_similarity_is_sign_insensitive() {
    let u = DVector::from_iterator(2, [1.0, 0.5].iter().map(|&v| Complex64::new(v, 0.0)));
    let v = u.map(|e| -e);
    assert!((cosine_similarity(&u, &v) - 1.0).abs() < 1e-15);
}
