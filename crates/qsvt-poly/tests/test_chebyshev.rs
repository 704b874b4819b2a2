//! Tests for Chebyshev basis conversion and interval fits.

use proptest::prelude::*;
use qsvt_poly::chebyshev::{chebyshev_t, chebyshev_value, from_chebyshev, to_chebyshev};
use qsvt_poly::{ChebyshevFit, PolyError, PolynomialSpec};

// ---------------------------------------------------------------------------
// Basis conversion
// ---------------------------------------------------------------------------

#[test]
fn x_squared_in_chebyshev_basis() {
    let cheb = to_chebyshev(&[0.0, 0.0, 1.0]);
    assert!((cheb[0] - 0.5).abs() < 1e-14);
    assert!(cheb[1].abs() < 1e-14);
    assert!((cheb[2] - 0.5).abs() < 1e-14);
}

#[test]
fn chebyshev_t_leading_coefficient_doubles() {
    for k in 1..10 {
        let t = chebyshev_t(k);
        assert!((t[k] - 2f64.powi(k as i32 - 1)).abs() < 1e-9);
    }
}

#[test]
fn spec_chebyshev_coefficients_are_unit_vector() {
    let t5 = PolynomialSpec::chebyshev(5);
    let cheb = t5.chebyshev_coefficients();
    for (j, &c) in cheb.iter().enumerate() {
        let expected = if j == 5 { 1.0 } else { 0.0 };
        assert!((c - expected).abs() < 1e-12, "coefficient {j} = {c}");
    }
}

proptest! {
    #[test]
    fn round_trip_is_identity(coeffs in proptest::collection::vec(-1.0f64..1.0, 1..9)) {
        let back = from_chebyshev(&to_chebyshev(&coeffs));
        for (a, b) in coeffs.iter().zip(back.iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }
}

// ---------------------------------------------------------------------------
// Interval fits
// ---------------------------------------------------------------------------

#[test]
fn empty_interval_rejected() {
    assert!(matches!(
        ChebyshevFit::new(|x: f64| x, 1.0, 0.2, 4),
        Err(PolyError::EmptyInterval { .. })
    ));
}

#[test]
fn sqrt_fit_tracks_the_function() {
    // Degree-6 fit of √x on [0.2, 1], as in the powers-and-roots demo.
    let fit = ChebyshevFit::new(f64::sqrt, 0.2, 1.0, 6).unwrap();
    let mut worst: f64 = 0.0;
    for i in 0..=200 {
        let t = 0.2 + 0.8 * i as f64 / 200.0;
        worst = worst.max((fit.value(t) - t.sqrt()).abs());
    }
    assert!(worst < 1e-4, "worst fit error {worst}");
}

#[test]
fn fit_reproduces_polynomials_exactly() {
    // A degree-3 fit of a cubic is interpolation-exact.
    let fit = ChebyshevFit::new(|x| 0.5 * x * x * x - 0.25 * x, -1.0, 1.0, 3).unwrap();
    for i in 0..=50 {
        let t = -1.0 + 2.0 * i as f64 / 50.0;
        let exact = 0.5 * t * t * t - 0.25 * t;
        assert!((fit.value(t) - exact).abs() < 1e-12);
    }
}

#[test]
fn clenshaw_handles_empty_and_constant() {
    assert_eq!(chebyshev_value(&[], 0.3), 0.0);
    assert_eq!(chebyshev_value(&[0.75], -0.9), 0.75);
}
