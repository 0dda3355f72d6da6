#![deny(missing_docs)]
#![doc = "Assertion engine for numeric arrays and lists of arrays. Every check returns \
`Ok(())` or a `FailedAssertion` carrying a diagnostic message and a `FailureReason`. \
Operands are only read, never mutated, and each check has a `*_with_message` form that \
replaces the default message."]

mod closeness;
mod condition;
mod equality;
mod structure;
mod throws;

pub use closeness::{
    assert_almost_equals, assert_almost_equals_with, assert_almost_equals_with_message,
    assert_lists_almost_equal, assert_lists_almost_equal_with,
    assert_lists_almost_equal_with_message,
};
pub use condition::{
    assert_false, assert_false_with_message, assert_true, assert_true_with_message,
};
pub use equality::{
    assert_arrays_equal, assert_arrays_equal_with_message, assert_lists_equal,
    assert_lists_equal_with_message, assert_parameters_equal, assert_parameters_equal_with_message,
    assert_scalars_equal, assert_scalars_equal_with_message,
};
pub use structure::{
    assert_in_place, assert_in_place_with_message, assert_non_zero_number,
    assert_non_zero_number_with_message,
};
pub use throws::{
    assert_panics, assert_panics_with_message, assert_throws, assert_throws_with_message,
};

/// Re-export of the data model so callers only need one dependency.
pub use ndassert_core::{
    ArrayError, ArrayErrorKind, ArrayList, FailedAssertion, FailureKind, FailureReason, NdArray,
    NumericArray, Parameter, Scalar, Shape, Tolerance,
};

/// Outcome of a single assertion.
pub type AssertResult = Result<(), FailedAssertion>;

/// Message used by checks whose failure needs no further explanation.
pub(crate) const DEFAULT_MESSAGE: &str = "Assertion failed!";

/// Surfaces a failure to the caller, logging it on the way out.
pub(crate) fn raise(failure: FailedAssertion) -> AssertResult {
    tracing::debug!(
        reason = %failure.reason,
        message = %failure.message,
        "assertion failed"
    );
    Err(failure)
}
