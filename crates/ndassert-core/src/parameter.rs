//! Named weights compared through their own equality.

use crate::array::{NdArray, NumericArray};

/// Named learnable weight backed by an [`NdArray`].
///
/// Two parameters are equal when their names match and their arrays are
/// structurally equal.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    array: NdArray,
}

impl Parameter {
    /// Creates a parameter named `name` over `array`.
    pub fn new(name: impl Into<String>, array: NdArray) -> Self {
        Self {
            name: name.into(),
            array,
        }
    }

    /// Returns the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the backing array.
    pub fn array(&self) -> &NdArray {
        &self.array
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.array.content_equals(&other.array)
    }
}
