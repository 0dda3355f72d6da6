//! Array contract read by the assertion engine and its dense implementation.

use std::fmt::{self, Display};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::ArrayError;
use crate::types::{Scalar, Shape};

/// Describes what the assertion engine needs to know about an array.
///
/// Implementors must flatten elements in a stable order so that positions in
/// [`NumericArray::to_f64_vec`] line up between two arrays of the same shape.
pub trait NumericArray: Display {
    /// Total number of elements.
    fn size(&self) -> usize;

    /// Elements widened to `f64`, in flattened order.
    fn to_f64_vec(&self) -> Vec<f64>;

    /// Number of elements that are not zero. NaN counts as non-zero.
    fn non_zero_count(&self) -> usize {
        self.to_f64_vec().iter().filter(|value| **value != 0.0).count()
    }

    /// Structural equality: same shape and bit-for-bit equal elements.
    fn content_equals(&self, other: &Self) -> bool;

    /// Identity equality: both operands are the same underlying object.
    ///
    /// Plain values compare addresses. Handle types that share storage must
    /// override this to compare the storage instead.
    fn same_identity(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// Dense row-major array handle.
///
/// Cloning copies the handle, not the data: a clone shares storage with the
/// original and is the same object for [`NumericArray::same_identity`]. Use
/// [`NdArray::duplicate`] for an independent copy.
#[derive(Debug, Clone)]
pub struct NdArray {
    shape: Shape,
    storage: Arc<RwLock<Vec<Scalar>>>,
}

impl NdArray {
    /// Builds an array from a shape and row-major elements.
    pub fn from_vec<T: Into<Scalar>>(
        shape: impl Into<Shape>,
        values: Vec<T>,
    ) -> Result<Self, ArrayError> {
        let shape = shape.into();
        let expected = checked_size(&shape)?;
        if expected != values.len() {
            return Err(ArrayError::ShapeMismatch {
                shape: shape.to_string(),
                expected,
                actual: values.len(),
            });
        }
        Ok(Self::from_parts(
            shape,
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// Builds a one-dimensional array.
    pub fn vector<T: Into<Scalar>>(values: Vec<T>) -> Self {
        let shape = Shape::new(vec![values.len()]);
        Self::from_parts(shape, values.into_iter().map(Into::into).collect())
    }

    /// Builds a float array of zeros.
    pub fn zeros(shape: impl Into<Shape>) -> Result<Self, ArrayError> {
        let shape = shape.into();
        let data = vec![Scalar::Float(0.0); checked_size(&shape)?];
        Ok(Self::from_parts(shape, data))
    }

    fn from_parts(shape: Shape, data: Vec<Scalar>) -> Self {
        Self {
            shape,
            storage: Arc::new(RwLock::new(data)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Scalar>> {
        self.storage.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Scalar>> {
        self.storage.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the shape of the array.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns a snapshot of the elements in row-major order.
    pub fn to_scalars(&self) -> Vec<Scalar> {
        self.read().clone()
    }

    /// Reads the element at a flat index.
    pub fn get(&self, index: usize) -> Result<Scalar, ArrayError> {
        let data = self.read();
        data.get(index)
            .copied()
            .ok_or(ArrayError::IndexOutOfBounds {
                index,
                size: data.len(),
            })
    }

    /// Overwrites the element at a flat index in place.
    pub fn set(&self, index: usize, value: impl Into<Scalar>) -> Result<&Self, ArrayError> {
        let mut data = self.write();
        let size = data.len();
        let slot = data
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, size })?;
        *slot = value.into();
        drop(data);
        Ok(self)
    }

    /// Overwrites every element in place.
    pub fn fill(&self, value: impl Into<Scalar>) -> &Self {
        let value = value.into();
        self.write().iter_mut().for_each(|slot| *slot = value);
        self
    }

    /// Applies `f` to every element in place and returns the same handle.
    pub fn map_in_place<F>(&self, f: F) -> &Self
    where
        F: Fn(Scalar) -> Scalar,
    {
        self.write().iter_mut().for_each(|slot| *slot = f(*slot));
        self
    }

    /// Applies `f` to every element and returns a new array.
    pub fn map<F>(&self, f: F) -> NdArray
    where
        F: Fn(Scalar) -> Scalar,
    {
        let data = self.read().iter().map(|value| f(*value)).collect();
        Self::from_parts(self.shape.clone(), data)
    }

    /// Deep copy with its own storage.
    pub fn duplicate(&self) -> NdArray {
        Self::from_parts(self.shape.clone(), self.to_scalars())
    }
}

fn checked_size(shape: &Shape) -> Result<usize, ArrayError> {
    shape.checked_size().ok_or_else(|| ArrayError::SizeOverflow {
        shape: shape.to_string(),
    })
}

impl NumericArray for NdArray {
    fn size(&self) -> usize {
        self.shape.size()
    }

    fn to_f64_vec(&self) -> Vec<f64> {
        self.read().iter().map(Scalar::as_f64).collect()
    }

    fn non_zero_count(&self) -> usize {
        self.read().iter().filter(|value| !value.is_zero()).count()
    }

    fn content_equals(&self, other: &Self) -> bool {
        if self.shape != other.shape {
            return false;
        }
        if Arc::ptr_eq(&self.storage, &other.storage) {
            return true;
        }
        let lhs = self.read();
        let rhs = other.read();
        lhs.len() == rhs.len() && lhs.iter().zip(rhs.iter()).all(|(a, b)| a.bit_eq(b))
    }

    fn same_identity(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }
}

impl Display for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ND: {} [", self.shape)?;
        for (idx, value) in self.read().iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
