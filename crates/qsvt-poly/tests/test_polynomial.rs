//! Tests for polynomial specification and admissibility.

use qsvt_poly::{Parity, PolyError, PolynomialSpec};

// ---------------------------------------------------------------------------
// Construction & validation
// ---------------------------------------------------------------------------

#[test]
fn empty_coefficients_rejected() {
    assert!(matches!(
        PolynomialSpec::new(vec![]),
        Err(PolyError::Empty)
    ));
}

#[test]
fn unbounded_polynomial_rejected() {
    // f(x) = 2x has |f(1)| = 2 > 1.
    let err = PolynomialSpec::new(vec![0.0, 2.0]).unwrap_err();
    match err {
        PolyError::Unbounded { x, value } => {
            assert!(x.abs() > 0.5, "violation should be near an endpoint, got x = {x}");
            assert!(value > 1.0);
        }
        other => panic!("expected Unbounded, got {other:?}"),
    }
}

#[test]
fn slightly_out_of_bound_sum_rejected() {
    // f(1) = 0.6 + 0.6 = 1.2 > 1 even though each term is bounded.
    assert!(matches!(
        PolynomialSpec::new(vec![0.6, 0.0, 0.6]),
        Err(PolyError::Unbounded { .. })
    ));
}

#[test]
fn declared_parity_violation_names_degree() {
    let err = PolynomialSpec::with_parity(vec![0.0, 0.5, 0.25], Parity::Odd).unwrap_err();
    match err {
        PolyError::ParityViolation {
            index, declared, ..
        } => {
            assert_eq!(index, 2);
            assert_eq!(declared, Parity::Odd);
        }
        other => panic!("expected ParityViolation, got {other:?}"),
    }
}

#[test]
fn declared_parity_accepts_matching_coefficients() {
    let f = PolynomialSpec::with_parity(vec![0.0, 0.5, 0.0, 0.25], Parity::Odd).unwrap();
    assert_eq!(f.parity(), Parity::Odd);
    assert_eq!(f.degree(), 3);
}

// ---------------------------------------------------------------------------
// Parity inference
// ---------------------------------------------------------------------------

#[test]
fn parity_inference() {
    assert_eq!(
        PolynomialSpec::new(vec![0.5, 0.0, 0.5]).unwrap().parity(),
        Parity::Even
    );
    assert_eq!(
        PolynomialSpec::new(vec![0.0, 1.0]).unwrap().parity(),
        Parity::Odd
    );
    assert_eq!(
        PolynomialSpec::new(vec![0.25, 0.25, 0.25]).unwrap().parity(),
        Parity::Mixed
    );
}

#[test]
fn chebyshev_constructor_has_definite_parity() {
    for k in 0..8 {
        let t = PolynomialSpec::chebyshev(k);
        assert_eq!(t.degree(), k);
        assert_eq!(t.parity(), Parity::of_degree(k));
        assert!(t.has_definite_parity());
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

#[test]
fn horner_matches_known_values() {
    let t3 = PolynomialSpec::chebyshev(3);
    assert!((t3.evaluate(0.5) - (-1.0)).abs() < 1e-14);
    assert!((t3.evaluate(-0.5) - 1.0).abs() < 1e-14);
    assert!((t3.evaluate(1.0) - 1.0).abs() < 1e-14);
}

#[test]
fn chebyshev_identity_on_grid() {
    // T_k(cos θ) = cos(kθ) across the interval.
    for k in 0..7 {
        let t = PolynomialSpec::chebyshev(k);
        for i in 0..50 {
            let theta = std::f64::consts::PI * i as f64 / 49.0;
            let expected = (k as f64 * theta).cos();
            assert!(
                (t.evaluate(theta.cos()) - expected).abs() < 1e-11,
                "T_{k} mismatch at θ = {theta}"
            );
        }
    }
}
