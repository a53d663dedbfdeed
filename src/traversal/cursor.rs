//! Forward-only cursor over a materialized view.
//!
//! A [`Cursor`] owns its [`View`] and a position in `0..=view.len()`. The
//! position equal to the view length is the end sentinel: it cannot be
//! dereferenced and cannot be advanced past.
//!
//! # State Machine
//!
//! ```text
//!        advance          advance                advance
//!     0 ─────────► 1 ─────────► ... ─────────► length (end)
//!     get: Ok      get: Ok                      get: OutOfBounds
//!                                               advance: OutOfBounds
//! ```
//!
//! # Equality
//!
//! Two cursors are equal when their positions are equal and their views hold
//! equal elements in the same order. Cursors built by separate calls over equal
//! contents therefore compare equal, which is what lets a `begin` cursor be
//! walked until it equals the matching `end` cursor.
//!
//! # Examples
//!
//! ```rust
//! use multiorder::traversal::{Cursor, View};
//!
//! let mut cursor = Cursor::begin(View::from_vec(vec![1, 2]));
//! let end = Cursor::end(View::from_vec(vec![1, 2]));
//!
//! let mut seen = Vec::new();
//! while cursor != end {
//!     seen.push(*cursor.get().unwrap());
//!     cursor.advance().unwrap();
//! }
//! assert_eq!(seen, vec![1, 2]);
//! assert!(cursor.get().is_err());
//! ```

use std::iter::FusedIterator;

use super::View;
use crate::error::{CursorOperation, OutOfBoundsError};

/// A position within an owned, immutable [`View`].
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    view: View<T>,
    position: usize,
}

impl<T> Cursor<T> {
    /// Creates a cursor at the first element of `view`.
    #[inline]
    #[must_use]
    pub const fn begin(view: View<T>) -> Self {
        Self { view, position: 0 }
    }

    /// Creates a cursor at the end sentinel of `view`.
    #[inline]
    #[must_use]
    pub fn end(view: View<T>) -> Self {
        let position = view.len();
        Self { view, position }
    }

    /// Returns the current position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the length of the underlying view, independent of position.
    #[inline]
    #[must_use]
    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Returns `true` if the cursor sits on the end sentinel.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position == self.view.len()
    }

    /// Returns the underlying view.
    #[inline]
    #[must_use]
    pub const fn view(&self) -> &View<T> {
        &self.view
    }

    /// Returns the elements from the current position to the end.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &[T] {
        &self.view[self.position..]
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if the cursor is at the end sentinel.
    pub fn get(&self) -> Result<&T, OutOfBoundsError> {
        self.view
            .get(self.position)
            .ok_or_else(|| self.out_of_bounds(CursorOperation::Dereference))
    }

    /// Moves the cursor forward by one and returns it, for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if the cursor is already at the end
    /// sentinel. The position is left unchanged.
    pub fn advance(&mut self) -> Result<&mut Self, OutOfBoundsError> {
        if self.is_end() {
            return Err(self.out_of_bounds(CursorOperation::Advance));
        }
        self.position += 1;
        Ok(self)
    }

    fn out_of_bounds(&self, operation: CursorOperation) -> OutOfBoundsError {
        let error = OutOfBoundsError {
            operation,
            position: self.position,
            length: self.view.len(),
        };
        tracing::debug!(%error, "cursor out of bounds");
        error
    }
}

impl<T: Clone> Cursor<T> {
    /// Moves the cursor forward by one and returns its state from before the move.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if the cursor is already at the end
    /// sentinel. The position is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::traversal::{Cursor, View};
    ///
    /// let mut cursor = Cursor::begin(View::from_vec(vec!['a', 'b']));
    /// let previous = cursor.post_advance().unwrap();
    /// assert_eq!(previous.get(), Ok(&'a'));
    /// assert_eq!(cursor.get(), Ok(&'b'));
    /// ```
    pub fn post_advance(&mut self) -> Result<Self, OutOfBoundsError> {
        let previous = self.clone();
        self.advance()?;
        Ok(previous)
    }
}

impl<T: PartialEq> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.view == other.view
    }
}

impl<T: Eq> Eq for Cursor<T> {}

/// Yields a copy of each element from the current position to the end.
///
/// Iteration moves the cursor just like repeated `get` and `advance`, but
/// stops with `None` at the end sentinel instead of failing.
impl<T: Clone> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.view.get(self.position).cloned()?;
        self.position += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Cursor<T> {}

impl<T: Clone> FusedIterator for Cursor<T> {}
