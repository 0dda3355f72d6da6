//! Non-zero counts and in-place identity.

use ndassert_core::{FailedAssertion, FailureReason, NumericArray};

use crate::{raise, AssertResult, DEFAULT_MESSAGE};

/// Fails unless `array` holds exactly `expected_count` non-zero elements.
pub fn assert_non_zero_number<A: NumericArray>(array: &A, expected_count: usize) -> AssertResult {
    assert_non_zero_number_with_message(array, expected_count, DEFAULT_MESSAGE)
}

/// Same as [`assert_non_zero_number`] with a caller supplied message.
pub fn assert_non_zero_number_with_message<A: NumericArray>(
    array: &A,
    expected_count: usize,
    message: &str,
) -> AssertResult {
    let count = array.non_zero_count();
    if count != expected_count {
        return raise(
            FailedAssertion::new(FailureReason::NonZeroCount, message)
                .with_context("expected", expected_count)
                .with_context("actual", count),
        );
    }
    Ok(())
}

/// Fails unless `expected` and `actual` are the same object.
///
/// This checks identity, not content: an equal-valued copy fails. Use it to
/// confirm that an operation mutated its input instead of returning a new
/// array.
pub fn assert_in_place<A: NumericArray>(expected: &A, actual: &A) -> AssertResult {
    assert_in_place_with_message(expected, actual, DEFAULT_MESSAGE)
}

/// Same as [`assert_in_place`] with a caller supplied message.
pub fn assert_in_place_with_message<A: NumericArray>(
    expected: &A,
    actual: &A,
    message: &str,
) -> AssertResult {
    if !expected.same_identity(actual) {
        return raise(FailedAssertion::new(FailureReason::NotInPlace, message));
    }
    Ok(())
}
