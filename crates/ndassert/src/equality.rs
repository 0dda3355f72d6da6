//! Exact equality for scalars, arrays, lists, and parameters.

use std::fmt::Display;

use ndassert_core::{ArrayList, FailedAssertion, FailureReason, NumericArray};

use crate::{raise, AssertResult};

const ARRAYS_DIFFER: &str = "Two NDArrays are different!";
pub(crate) const LIST_SIZES_DIFFER: &str = "The NDLists have different sizes";
const PARAMETERS_DIFFER: &str = "Two Parameters are different!";

/// Fails unless `expected == actual`. No tolerance is applied.
pub fn assert_scalars_equal<T>(expected: T, actual: T) -> AssertResult
where
    T: PartialEq + Display,
{
    if expected == actual {
        return Ok(());
    }
    let message = format!("Two values are different!\nExpected: {expected}\n Actual: {actual}");
    check_scalars(FailureReason::ValueMismatch, &expected, &actual, &message)
}

/// Fails with `message` unless `expected == actual`.
pub fn assert_scalars_equal_with_message<T>(expected: T, actual: T, message: &str) -> AssertResult
where
    T: PartialEq + Display,
{
    check_scalars(FailureReason::ValueMismatch, &expected, &actual, message)
}

fn check_scalars<T>(reason: FailureReason, expected: &T, actual: &T, message: &str) -> AssertResult
where
    T: PartialEq + Display,
{
    if expected != actual {
        return raise(scalar_failure(reason, message, expected, actual));
    }
    Ok(())
}

fn scalar_failure<T: Display>(
    reason: FailureReason,
    message: &str,
    expected: &T,
    actual: &T,
) -> FailedAssertion {
    FailedAssertion::new(reason, message)
        .with_context("expected", expected)
        .with_context("actual", actual)
}

/// Fails unless both arrays have the same shape and bit-for-bit equal
/// elements. The message embeds both operands.
pub fn assert_arrays_equal<A: NumericArray>(expected: &A, actual: &A) -> AssertResult {
    assert_arrays_equal_with_message(expected, actual, ARRAYS_DIFFER)
}

/// Same as [`assert_arrays_equal`] with `message` as the headline.
pub fn assert_arrays_equal_with_message<A: NumericArray>(
    expected: &A,
    actual: &A,
    message: &str,
) -> AssertResult {
    check_arrays(FailureReason::ArrayMismatch, expected, actual, message).or_else(raise)
}

fn check_arrays<A: NumericArray>(
    reason: FailureReason,
    expected: &A,
    actual: &A,
    message: &str,
) -> Result<(), FailedAssertion> {
    if !expected.content_equals(actual) {
        return Err(FailedAssertion::new(
            reason,
            format!("{message}\nExpected: {expected}\n Actual: {actual}"),
        ));
    }
    Ok(())
}

/// Fails when the lists differ in length, or at the first index whose arrays
/// are not structurally equal. Later indices are not inspected.
pub fn assert_lists_equal<A: NumericArray>(
    expected: &ArrayList<A>,
    actual: &ArrayList<A>,
) -> AssertResult {
    compare_lists(expected, actual, None)
}

/// Same as [`assert_lists_equal`]; `message` replaces the size mismatch text
/// and prefixes the element mismatch text.
pub fn assert_lists_equal_with_message<A: NumericArray>(
    expected: &ArrayList<A>,
    actual: &ArrayList<A>,
    message: &str,
) -> AssertResult {
    compare_lists(expected, actual, Some(message))
}

fn compare_lists<A: NumericArray>(
    expected: &ArrayList<A>,
    actual: &ArrayList<A>,
    message: Option<&str>,
) -> AssertResult {
    check_list_sizes(expected, actual, message.unwrap_or(LIST_SIZES_DIFFER))?;
    for (index, (lhs, rhs)) in expected.iter().zip(actual.iter()).enumerate() {
        let headline = match message {
            Some(prefix) => format!("{prefix}: The NDLists differ on element {index}"),
            None => format!("The NDLists differ on element {index}"),
        };
        if let Err(failure) = check_arrays(FailureReason::ListElementMismatch, lhs, rhs, &headline)
        {
            return raise(failure.with_context("index", index));
        }
    }
    Ok(())
}

pub(crate) fn check_list_sizes<A>(
    expected: &ArrayList<A>,
    actual: &ArrayList<A>,
    message: &str,
) -> AssertResult {
    check_scalars(
        FailureReason::SizeMismatch,
        &expected.len(),
        &actual.len(),
        message,
    )
}

/// Fails unless the parameters' own equality reports them equal.
pub fn assert_parameters_equal<P>(expected: &P, actual: &P) -> AssertResult
where
    P: PartialEq + ?Sized,
{
    assert_parameters_equal_with_message(expected, actual, PARAMETERS_DIFFER)
}

/// Same as [`assert_parameters_equal`] with a caller supplied message.
pub fn assert_parameters_equal_with_message<P>(
    expected: &P,
    actual: &P,
    message: &str,
) -> AssertResult
where
    P: PartialEq + ?Sized,
{
    if expected != actual {
        return raise(FailedAssertion::new(
            FailureReason::ParameterMismatch,
            message,
        ));
    }
    Ok(())
}
