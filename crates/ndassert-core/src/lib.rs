#![deny(missing_docs)]
#![doc = "Data model and failure types for the ndassert assertion engine."]

pub mod array;
pub mod errors;
pub mod kind;
pub mod list;
pub mod parameter;
pub mod tolerance;
mod types;

pub use array::{NdArray, NumericArray};
pub use errors::{ArrayError, ArrayErrorKind, FailedAssertion, FailureReason};
pub use kind::FailureKind;
pub use list::ArrayList;
pub use parameter::Parameter;
pub use tolerance::Tolerance;
pub use types::{Scalar, Shape};
