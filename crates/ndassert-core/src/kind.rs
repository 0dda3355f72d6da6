//! Kind tags used to match expected failures.

use std::fmt::Debug;

/// Exposes a comparable kind tag on an error so that callers can check which
/// failure an operation produced.
///
/// The default [`FailureKind::is_kind`] compares tags for equality. Error
/// types with nested families override it so that a broad kind matches every
/// narrower kind beneath it.
pub trait FailureKind {
    /// Discriminant type describing the failure family.
    type Kind: PartialEq + Debug;

    /// Returns the kind tag of this failure.
    fn kind(&self) -> Self::Kind;

    /// Returns true when this failure belongs to `expected`.
    fn is_kind(&self, expected: &Self::Kind) -> bool {
        self.kind() == *expected
    }
}
