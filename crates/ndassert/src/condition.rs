//! Boolean conditions.

use ndassert_core::{FailedAssertion, FailureReason};

use crate::{raise, AssertResult};

/// Fails unless `statement` is true.
pub fn assert_true(statement: bool) -> AssertResult {
    assert_true_with_message(statement, "Statement is not True!")
}

/// Fails with `message` unless `statement` is true.
pub fn assert_true_with_message(statement: bool, message: &str) -> AssertResult {
    if !statement {
        return raise(FailedAssertion::new(FailureReason::Condition, message));
    }
    Ok(())
}

/// Fails unless `statement` is false.
pub fn assert_false(statement: bool) -> AssertResult {
    assert_false_with_message(statement, "Statement is not False!")
}

/// Fails with `message` unless `statement` is false.
pub fn assert_false_with_message(statement: bool, message: &str) -> AssertResult {
    if statement {
        return raise(FailedAssertion::new(FailureReason::Condition, message));
    }
    Ok(())
}
