//! Tolerance-based comparison of arrays and lists of arrays.

use ndassert_core::{ArrayList, FailedAssertion, FailureReason, NumericArray, Tolerance};

use crate::equality::{check_list_sizes, LIST_SIZES_DIFFER};
use crate::{raise, AssertResult};

const LENGTHS_DIFFER: &str = "The length of two NDArray are different!";

/// Tolerance check with the default `rtol = 1e-5`, `atol = 1e-3`.
pub fn assert_almost_equals<A: NumericArray>(expected: &A, actual: &A) -> AssertResult {
    assert_almost_equals_with(expected, actual, &Tolerance::default())
}

/// Fails unless every flattened pair satisfies
/// `|expected_i - actual_i| <= atol + rtol * |actual_i|`.
///
/// The relative term scales by the actual value only. The first offending
/// position is reported and the rest are not inspected.
pub fn assert_almost_equals_with<A: NumericArray>(
    expected: &A,
    actual: &A,
    tolerance: &Tolerance,
) -> AssertResult {
    check_close(expected, actual, tolerance, None).or_else(raise)
}

/// Same as [`assert_almost_equals_with`]; `message` is placed on the line
/// above the detail describing the offending pair.
pub fn assert_almost_equals_with_message<A: NumericArray>(
    expected: &A,
    actual: &A,
    tolerance: &Tolerance,
    message: &str,
) -> AssertResult {
    check_close(expected, actual, tolerance, Some(message)).or_else(raise)
}

fn check_close<A: NumericArray>(
    expected: &A,
    actual: &A,
    tolerance: &Tolerance,
    message: Option<&str>,
) -> Result<(), FailedAssertion> {
    let expected_values = expected.to_f64_vec();
    let actual_values = actual.to_f64_vec();
    if expected_values.len() != actual_values.len() {
        return Err(FailedAssertion::new(
            FailureReason::LengthMismatch,
            headline(message, LENGTHS_DIFFER),
        )
        .with_context("expected_len", expected_values.len())
        .with_context("actual_len", actual_values.len()));
    }
    for (index, (a, b)) in expected_values.iter().zip(&actual_values).enumerate() {
        if !tolerance.allows(*a, *b) {
            let detail = format!("expect = {a:?}, actual ={b:?}");
            return Err(
                FailedAssertion::new(FailureReason::ToleranceExceeded, headline(message, &detail))
                    .with_context("index", index)
                    .with_context("expected", format!("{a:?}"))
                    .with_context("actual", format!("{b:?}"))
                    .with_context("rtol", tolerance.rtol)
                    .with_context("atol", tolerance.atol),
            );
        }
    }
    tracing::trace!(
        elements = expected_values.len(),
        rtol = tolerance.rtol,
        atol = tolerance.atol,
        "arrays within tolerance"
    );
    Ok(())
}

fn headline(message: Option<&str>, detail: &str) -> String {
    match message {
        Some(message) => format!("{message}\n{detail}"),
        None => detail.to_owned(),
    }
}

/// List form of [`assert_almost_equals`] with default tolerances.
pub fn assert_lists_almost_equal<A: NumericArray>(
    expected: &ArrayList<A>,
    actual: &ArrayList<A>,
) -> AssertResult {
    assert_lists_almost_equal_with(expected, actual, &Tolerance::default())
}

/// Fails when the lists differ in length, or at the first index whose arrays
/// are not within `tolerance`. The failing index is recorded in the context
/// under `element`.
pub fn assert_lists_almost_equal_with<A: NumericArray>(
    expected: &ArrayList<A>,
    actual: &ArrayList<A>,
    tolerance: &Tolerance,
) -> AssertResult {
    compare_lists_close(expected, actual, tolerance, None)
}

/// Same as [`assert_lists_almost_equal_with`] with a caller supplied message.
pub fn assert_lists_almost_equal_with_message<A: NumericArray>(
    expected: &ArrayList<A>,
    actual: &ArrayList<A>,
    tolerance: &Tolerance,
    message: &str,
) -> AssertResult {
    compare_lists_close(expected, actual, tolerance, Some(message))
}

fn compare_lists_close<A: NumericArray>(
    expected: &ArrayList<A>,
    actual: &ArrayList<A>,
    tolerance: &Tolerance,
    message: Option<&str>,
) -> AssertResult {
    check_list_sizes(expected, actual, message.unwrap_or(LIST_SIZES_DIFFER))?;
    for (index, (lhs, rhs)) in expected.iter().zip(actual.iter()).enumerate() {
        if let Err(failure) = check_close(lhs, rhs, tolerance, message) {
            return raise(failure.with_context("element", index));
        }
    }
    Ok(())
}
