use ndassert::{
    assert_almost_equals, assert_almost_equals_with, assert_almost_equals_with_message,
    assert_lists_almost_equal, assert_lists_almost_equal_with,
    assert_lists_almost_equal_with_message, ArrayList, FailureReason, NdArray, Tolerance,
};
use proptest::prelude::*;

#[test]
fn default_tolerance_accepts_small_drift() {
    let expected = NdArray::vector(vec![1.0]);
    assert!(assert_almost_equals(&expected, &NdArray::vector(vec![1.0009])).is_ok());

    let err = assert_almost_equals(&expected, &NdArray::vector(vec![1.002]))
        .expect_err("0.002 exceeds 0.001 + 1e-5 * 1.002");
    assert_eq!(err.message(), "expect = 1.0, actual =1.002");
    assert_eq!(err.reason(), FailureReason::ToleranceExceeded);
    assert_eq!(err.context_value("index"), Some("0"));
}

#[test]
fn first_violation_stops_the_scan() {
    let expected = NdArray::vector(vec![0.0, 1.0, 2.0, 3.0]);
    let actual = NdArray::vector(vec![0.0, 1.5, 2.5, 3.0]);
    let err = assert_almost_equals(&expected, &actual).expect_err("index 1 differs");
    assert_eq!(err.message(), "expect = 1.0, actual =1.5");
    assert_eq!(err.context_value("index"), Some("1"));
}

#[test]
fn element_count_is_checked_first() {
    let expected = NdArray::vector(vec![1.0, 2.0]);
    let actual = NdArray::vector(vec![1.0, 2.0, 3.0]);
    let err = assert_almost_equals(&expected, &actual).expect_err("lengths differ");
    assert_eq!(err.message(), "The length of two NDArray are different!");
    assert_eq!(err.reason(), FailureReason::LengthMismatch);
}

#[test]
fn shapes_are_ignored_when_counts_match() {
    let row = NdArray::from_vec([1, 3], vec![1.0, 2.0, 3.0]).expect("valid");
    let column = NdArray::from_vec([3, 1], vec![1.0, 2.0, 3.0]).expect("valid");
    assert!(assert_almost_equals(&row, &column).is_ok());
}

#[test]
fn integer_and_boolean_arrays_are_widened() {
    let ints = NdArray::vector(vec![1, 0, 1]);
    let flags = NdArray::vector(vec![true, false, true]);
    assert!(assert_almost_equals(&ints, &flags).is_ok());
}

#[test]
fn relative_tolerance_scales_by_actual() {
    let tolerance = Tolerance::new(0.1, 0.0);
    let big = NdArray::vector(vec![10.0]);
    let small = NdArray::vector(vec![9.05]);
    assert!(assert_almost_equals_with(&small, &big, &tolerance).is_ok());
    assert!(assert_almost_equals_with(&big, &small, &tolerance).is_err());
}

#[test]
fn nan_never_triggers_a_violation() {
    let expected = NdArray::vector(vec![f64::NAN, 1.0]);
    let actual = NdArray::vector(vec![5.0, f64::NAN]);
    assert!(assert_almost_equals(&expected, &actual).is_ok());
}

#[test]
fn custom_message_heads_the_detail() {
    let err = assert_almost_equals_with_message(
        &NdArray::vector(vec![1.0]),
        &NdArray::vector(vec![2.0]),
        &Tolerance::default(),
        "softmax output",
    )
    .expect_err("1.0 vs 2.0");
    assert_eq!(err.message(), "softmax output\nexpect = 1.0, actual =2.0");
}

#[test]
fn lists_check_size_then_elements_in_order() {
    let expected: ArrayList = vec![NdArray::vector(vec![1.0]), NdArray::vector(vec![2.0])].into();
    let close: ArrayList = vec![NdArray::vector(vec![1.0005]), NdArray::vector(vec![2.0])].into();
    assert!(assert_lists_almost_equal(&expected, &close).is_ok());

    let short: ArrayList = vec![NdArray::vector(vec![1.0])].into();
    let err = assert_lists_almost_equal(&expected, &short).expect_err("lengths differ");
    assert_eq!(err.message(), "The NDLists have different sizes");

    let far: ArrayList = vec![NdArray::vector(vec![1.0]), NdArray::vector(vec![3.0])].into();
    let err = assert_lists_almost_equal(&expected, &far).expect_err("element 1 differs");
    assert_eq!(err.message(), "expect = 2.0, actual =3.0");
    assert_eq!(err.context_value("element"), Some("1"));
}

#[test]
fn list_forms_accept_tolerance_and_message() {
    let expected: ArrayList = vec![NdArray::vector(vec![100.0])].into();
    let actual: ArrayList = vec![NdArray::vector(vec![101.0])].into();
    let loose = Tolerance::default().with_rtol(0.05);
    assert!(assert_lists_almost_equal_with(&expected, &actual, &loose).is_ok());

    let err =
        assert_lists_almost_equal_with_message(&expected, &actual, &Tolerance::default(), "logits")
            .expect_err("1.0 exceeds default tolerance");
    assert_eq!(err.message(), "logits\nexpect = 100.0, actual =101.0");
}

proptest! {
    #[test]
    fn holds_iff_every_pair_is_within_bound(
        pairs in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 1..16),
        rtol in 0.0f64..0.1,
        atol in 0.0f64..1.0,
    ) {
        let tolerance = Tolerance::new(rtol, atol);
        let expected = NdArray::vector(pairs.iter().map(|pair| pair.0).collect::<Vec<_>>());
        let actual = NdArray::vector(pairs.iter().map(|pair| pair.1).collect::<Vec<_>>());
        let within = pairs.iter().all(|(a, b)| (a - b).abs() <= atol + rtol * b.abs());
        prop_assert_eq!(assert_almost_equals_with(&expected, &actual, &tolerance).is_ok(), within);
    }

    #[test]
    fn arrays_are_close_to_themselves(values in prop::collection::vec(-1e9f64..1e9, 0..32)) {
        let array = NdArray::vector(values);
        prop_assert!(assert_almost_equals(&array, &array).is_ok());
    }
}
