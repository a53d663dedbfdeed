//! Insertion-ordered element storage.

use std::fmt;

use crate::error::NotFoundError;

/// A sequence of elements kept in the order they were appended.
///
/// Duplicates are allowed. The store is the single source of truth behind a
/// [`Container`](super::Container); traversals never read it directly, only
/// through [`snapshot`](Self::snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderedStore<T> {
    elements: Vec<T>,
}

impl<T> OrderedStore<T> {
    /// Creates an empty store.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Appends `value` after every existing element.
    #[inline]
    pub fn append(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Returns the number of stored elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the store holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns a borrowing iterator in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: PartialEq> OrderedStore<T> {
    /// Returns `true` if some element equals `value`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// Removes every element equal to `value`, keeping the rest in order.
    ///
    /// Returns the number of removed elements, which is always at least one.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no element equals `value`. The store is
    /// not modified.
    pub fn remove_all_equal(&mut self, value: &T) -> Result<usize, NotFoundError> {
        let before = self.elements.len();
        self.elements.retain(|element| element != value);
        match before - self.elements.len() {
            0 => Err(NotFoundError),
            removed => Ok(removed),
        }
    }
}

impl<T: Clone> OrderedStore<T> {
    /// Returns an owned copy of the current elements in insertion order.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T> Default for OrderedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for OrderedStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedStore<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for OrderedStore<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedStore<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}
