//! Failure types shared across ndassert crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::FailureKind;

/// Stable machine readable reason attached to every [`FailedAssertion`].
///
/// The reason never changes the message text; it exists so that callers can
/// tell failure families apart without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    /// A boolean condition had the wrong value.
    Condition,
    /// Two scalar values differ.
    ValueMismatch,
    /// Two arrays are not structurally equal.
    ArrayMismatch,
    /// Two array lists have different lengths.
    SizeMismatch,
    /// Two array lists differ at a specific index.
    ListElementMismatch,
    /// Two parameters are not equal.
    ParameterMismatch,
    /// Two arrays hold a different number of elements.
    LengthMismatch,
    /// A pair of elements lies outside the configured tolerance.
    ToleranceExceeded,
    /// The non-zero element count is not the expected one.
    NonZeroCount,
    /// The operands are equal in value but are different objects.
    NotInPlace,
    /// The checked action completed without failing.
    DidNotThrow,
    /// The checked action failed with an unexpected kind.
    WrongKind,
}

impl FailureReason {
    /// Returns the kebab-case code used in serialized payloads.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::Condition => "condition",
            FailureReason::ValueMismatch => "value-mismatch",
            FailureReason::ArrayMismatch => "array-mismatch",
            FailureReason::SizeMismatch => "size-mismatch",
            FailureReason::ListElementMismatch => "list-element-mismatch",
            FailureReason::ParameterMismatch => "parameter-mismatch",
            FailureReason::LengthMismatch => "length-mismatch",
            FailureReason::ToleranceExceeded => "tolerance-exceeded",
            FailureReason::NonZeroCount => "non-zero-count",
            FailureReason::NotInPlace => "not-in-place",
            FailureReason::DidNotThrow => "did-not-throw",
            FailureReason::WrongKind => "wrong-kind",
        }
    }
}

impl Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The single failure signal raised by every assertion.
///
/// `Display` renders the diagnostic message only, so `err.to_string()` is
/// exactly what a test author sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct FailedAssertion {
    /// Family of the failure.
    pub reason: FailureReason,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (indices, offending values, etc.).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,
}

impl FailedAssertion {
    /// Creates a new failure with the provided reason and message.
    pub fn new(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Adds a context entry to the failure.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the structured reason.
    pub fn reason(&self) -> FailureReason {
        self.reason
    }

    /// Looks up a context entry by key.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }
}

impl FailureKind for FailedAssertion {
    type Kind = FailureReason;

    fn kind(&self) -> FailureReason {
        self.reason
    }
}

/// Errors raised while building arrays, kept apart from assertion outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// The number of supplied elements does not match the shape.
    #[error("shape {shape} requires {expected} elements, got {actual}")]
    ShapeMismatch {
        /// Rendered shape that was requested.
        shape: String,
        /// Element count implied by the shape.
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },
    /// The element count implied by the shape does not fit in `usize`.
    #[error("shape {shape} has more elements than fit in usize")]
    SizeOverflow {
        /// Rendered shape that was requested.
        shape: String,
    },
    /// A flat index falls outside the array.
    #[error("index {index} out of bounds for array of size {size}")]
    IndexOutOfBounds {
        /// Offending flat index.
        index: usize,
        /// Total element count of the array.
        size: usize,
    },
}

/// Kind tags for [`ArrayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayErrorKind {
    /// See [`ArrayError::ShapeMismatch`].
    ShapeMismatch,
    /// See [`ArrayError::SizeOverflow`].
    SizeOverflow,
    /// See [`ArrayError::IndexOutOfBounds`].
    IndexOutOfBounds,
}

impl FailureKind for ArrayError {
    type Kind = ArrayErrorKind;

    fn kind(&self) -> ArrayErrorKind {
        match self {
            ArrayError::ShapeMismatch { .. } => ArrayErrorKind::ShapeMismatch,
            ArrayError::SizeOverflow { .. } => ArrayErrorKind::SizeOverflow,
            ArrayError::IndexOutOfBounds { .. } => ArrayErrorKind::IndexOutOfBounds,
        }
    }
}
