//! Expected-failure checks over fallible closures and panics.

use std::panic::{self, AssertUnwindSafe};

use ndassert_core::{FailedAssertion, FailureKind, FailureReason};

use crate::{raise, AssertResult, DEFAULT_MESSAGE};

/// Runs `action` and expects it to fail with an error of kind `expected`.
///
/// - `Ok(_)` fails with "... - did not throw an exception".
/// - An error for which [`FailureKind::is_kind`] holds passes.
/// - Any other error fails with "... - wrong exception type thrown"; the
///   original error is not propagated.
pub fn assert_throws<T, E, F>(action: F, expected: E::Kind) -> AssertResult
where
    F: FnOnce() -> Result<T, E>,
    E: FailureKind,
{
    assert_throws_with_message(action, expected, DEFAULT_MESSAGE)
}

/// Same as [`assert_throws`]; `message` prefixes the failure detail.
pub fn assert_throws_with_message<T, E, F>(
    action: F,
    expected: E::Kind,
    message: &str,
) -> AssertResult
where
    F: FnOnce() -> Result<T, E>,
    E: FailureKind,
{
    match action() {
        Ok(_) => raise(did_not_throw(message)),
        Err(err) if err.is_kind(&expected) => Ok(()),
        Err(err) => raise(
            FailedAssertion::new(
                FailureReason::WrongKind,
                format!("{message} - wrong exception type thrown"),
            )
            .with_context("expected_kind", format!("{expected:?}"))
            .with_context("actual_kind", format!("{:?}", err.kind())),
        ),
    }
}

/// Runs `action` and expects it to panic.
pub fn assert_panics<F, R>(action: F) -> AssertResult
where
    F: FnOnce() -> R,
{
    assert_panics_with_message(action, DEFAULT_MESSAGE)
}

/// Same as [`assert_panics`] with a caller supplied message.
pub fn assert_panics_with_message<F, R>(action: F, message: &str) -> AssertResult
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(action)) {
        Ok(_) => raise(did_not_throw(message)),
        Err(_) => Ok(()),
    }
}

fn did_not_throw(message: &str) -> FailedAssertion {
    FailedAssertion::new(
        FailureReason::DidNotThrow,
        format!("{message} - did not throw an exception"),
    )
}
