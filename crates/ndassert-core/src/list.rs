//! Ordered containers of arrays.

use std::ops::Index;

use crate::array::NdArray;

/// Ordered list of arrays. Insertion order is significant.
#[derive(Debug, Clone)]
pub struct ArrayList<A = NdArray> {
    items: Vec<A>,
}

impl<A> ArrayList<A> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of arrays in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the list holds no arrays.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the array at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&A> {
        self.items.get(index)
    }

    /// Appends an array.
    pub fn push(&mut self, array: A) {
        self.items.push(array);
    }

    /// Iterates over the arrays in order.
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.items.iter()
    }
}

impl<A> Default for ArrayList<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Index<usize> for ArrayList<A> {
    type Output = A;

    fn index(&self, index: usize) -> &A {
        &self.items[index]
    }
}

impl<A> From<Vec<A>> for ArrayList<A> {
    fn from(items: Vec<A>) -> Self {
        Self { items }
    }
}

impl<A> FromIterator<A> for ArrayList<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, A> IntoIterator for &'a ArrayList<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
