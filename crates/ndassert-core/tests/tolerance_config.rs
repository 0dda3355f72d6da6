use ndassert_core::Tolerance;
use proptest::prelude::*;

#[test]
fn defaults_match_documented_bounds() {
    let tolerance = Tolerance::default();
    assert_eq!(tolerance.rtol, 1e-5);
    assert_eq!(tolerance.atol, 1e-3);
}

#[test]
fn partial_json_fills_defaults() {
    let tolerance: Tolerance = serde_json::from_str(r#"{"atol": 0.1}"#).expect("deserialize");
    assert_eq!(tolerance, Tolerance::default().with_atol(0.1));

    let tolerance: Tolerance = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(tolerance, Tolerance::default());
}

#[test]
fn relative_term_scales_by_actual_only() {
    let tolerance = Tolerance::new(0.1, 0.0);
    // |10 - 9.05| = 0.95 exceeds 0.1 * 9.05 but not 0.1 * 10
    assert!(!tolerance.allows(10.0, 9.05));
    assert!(tolerance.allows(9.05, 10.0));
}

#[test]
fn nan_is_not_reported_as_a_violation() {
    let tolerance = Tolerance::exact();
    assert!(tolerance.allows(f64::NAN, 1.0));
    assert!(tolerance.allows(1.0, f64::NAN));
    assert!(!tolerance.allows(1.0, 1.5));
}

proptest! {
    #[test]
    fn boundary_difference_is_allowed(steps in -4_000i32..4_000, atol_steps in 0i32..64) {
        // quarter and eighth steps keep every sum exactly representable
        let actual = f64::from(steps) * 0.25;
        let atol = f64::from(atol_steps) * 0.125;
        let tolerance = Tolerance::exact().with_atol(atol);
        prop_assert!(tolerance.allows(actual + atol, actual));
        prop_assert!(!tolerance.allows(actual + atol + 0.125, actual));
    }

    #[test]
    fn every_value_is_close_to_itself(
        value in any::<f64>(),
        rtol in 0.0f64..1.0,
        atol in 0.0f64..1.0,
    ) {
        prop_assert!(Tolerance::new(rtol, atol).allows(value, value));
    }
}
