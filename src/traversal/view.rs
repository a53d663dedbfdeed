//! Materialized views and the builders that produce them.
//!
//! A [`View`] is an owned, reordered copy of a container snapshot. Each of the
//! six traversal orders has a builder: a pure function from the snapshot, in
//! insertion order, to the reordered sequence.
//!
//! | Builder        | Needs `Ord` | Empty input          | Complexity  |
//! |----------------|-------------|----------------------|-------------|
//! | [`insertion`]  | no          | empty view           | O(1)        |
//! | [`ascending`]  | yes         | empty view           | O(n log n)  |
//! | [`descending`] | yes         | empty view           | O(n log n)  |
//! | [`reverse`]    | no          | [`EmptyInputError`]  | O(n)        |
//! | [`side_cross`] | yes         | empty view           | O(n log n)  |
//! | [`middle_out`] | no          | empty view           | O(n)        |
//!
//! The sorting builders have `*_by` variants that take a comparator, so element
//! types without an [`Ord`] impl (such as `f64`) can still be traversed.
//!
//! # Examples
//!
//! ```rust
//! use multiorder::traversal::view;
//!
//! assert_eq!(view::side_cross(vec![7, 15, 6, 1, 2]), vec![1, 15, 2, 7, 6]);
//! assert_eq!(view::middle_out(vec![7, 15, 6, 1, 2]), vec![6, 15, 1, 7, 2]);
//! assert!(view::reverse(Vec::<i32>::new()).is_err());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ops::Deref;

use super::Order;
use crate::error::EmptyInputError;

/// An owned, reordered copy of a container's contents.
///
/// A view is fixed once built: later mutations of the container never reach
/// it. Equality is element-for-element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct View<T> {
    elements: Vec<T>,
}

impl<T> View<T> {
    /// Wraps an already-ordered sequence.
    #[inline]
    #[must_use]
    pub const fn from_vec(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Returns the view as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the view, returning the ordered elements.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Builds the view for `order`, comparing elements with `compare`.
    ///
    /// `compare` is only consulted by the sorting orders.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when `order` is [`Order::Reverse`] and the
    /// snapshot is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::traversal::{Order, View};
    ///
    /// let view = View::build_by(Order::Descending, vec![8.8, 1.1, 4.4], f64::total_cmp).unwrap();
    /// assert_eq!(view.as_slice(), &[8.8, 4.4, 1.1]);
    /// ```
    pub fn build_by<F>(order: Order, snapshot: Vec<T>, compare: F) -> Result<Self, EmptyInputError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let elements = match order {
            Order::Insertion => insertion(snapshot),
            Order::Ascending => ascending_by(snapshot, compare),
            Order::Descending => descending_by(snapshot, compare),
            Order::Reverse => reverse(snapshot)?,
            Order::SideCross => side_cross_by(snapshot, compare),
            Order::MiddleOut => middle_out(snapshot),
        };
        tracing::trace!(%order, length = elements.len(), "materialized view");
        Ok(Self::from_vec(elements))
    }
}

impl<T: Ord> View<T> {
    /// Builds the view for `order` using the natural ordering of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when `order` is [`Order::Reverse`] and the
    /// snapshot is empty.
    pub fn build(order: Order, snapshot: Vec<T>) -> Result<Self, EmptyInputError> {
        Self::build_by(order, snapshot, Ord::cmp)
    }
}

impl<T> Deref for View<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> AsRef<[T]> for View<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> IntoIterator for View<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a View<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Builders
// =============================================================================

/// Insertion order: the snapshot, unchanged.
#[inline]
#[must_use]
pub fn insertion<T>(snapshot: Vec<T>) -> Vec<T> {
    snapshot
}

/// Ascending order by the natural ordering of `T`.
#[must_use]
pub fn ascending<T: Ord>(snapshot: Vec<T>) -> Vec<T> {
    ascending_by(snapshot, Ord::cmp)
}

/// Ascending order by `compare`. The sort is stable.
#[must_use]
pub fn ascending_by<T, F>(mut snapshot: Vec<T>, compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    snapshot.sort_by(compare);
    snapshot
}

/// Descending order by the natural ordering of `T`.
#[must_use]
pub fn descending<T: Ord>(snapshot: Vec<T>) -> Vec<T> {
    descending_by(snapshot, Ord::cmp)
}

/// Descending order by `compare`. The sort is stable.
#[must_use]
pub fn descending_by<T, F>(mut snapshot: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    snapshot.sort_by(|left, right| compare(right, left));
    snapshot
}

/// Reverse insertion order.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `snapshot` is empty.
pub fn reverse<T>(mut snapshot: Vec<T>) -> Result<Vec<T>, EmptyInputError> {
    if snapshot.is_empty() {
        return Err(EmptyInputError);
    }
    snapshot.reverse();
    Ok(snapshot)
}

/// Side-cross order by the natural ordering of `T`.
#[must_use]
pub fn side_cross<T: Ord>(snapshot: Vec<T>) -> Vec<T> {
    side_cross_by(snapshot, Ord::cmp)
}

/// Side-cross order by `compare`: smallest, largest, second smallest, second
/// largest, and so on, ending on the median for odd lengths.
#[must_use]
pub fn side_cross_by<T, F>(snapshot: Vec<T>, compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut remaining: VecDeque<T> = ascending_by(snapshot, compare).into();
    let mut crossed = Vec::with_capacity(remaining.len());
    while let Some(smallest) = remaining.pop_front() {
        crossed.push(smallest);
        if let Some(largest) = remaining.pop_back() {
            crossed.push(largest);
        }
    }
    crossed
}

/// Middle-out order over the insertion sequence.
///
/// Starts at index `n / 2`, then alternates one step left and one step right
/// until both ends are reached. A side that runs out stops contributing.
#[must_use]
pub fn middle_out<T>(snapshot: Vec<T>) -> Vec<T> {
    let indices = middle_out_indices(snapshot.len());
    let mut slots: Vec<Option<T>> = snapshot.into_iter().map(Some).collect();
    indices
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect()
}

/// The index walk behind [`middle_out`] for a sequence of `length` elements.
///
/// ```rust
/// use multiorder::traversal::view::middle_out_indices;
///
/// assert_eq!(middle_out_indices(5), vec![2, 1, 3, 0, 4]);
/// assert_eq!(middle_out_indices(4), vec![2, 1, 3, 0]);
/// ```
#[must_use]
pub fn middle_out_indices(length: usize) -> Vec<usize> {
    if length == 0 {
        return Vec::new();
    }
    let middle = length / 2;
    let mut indices = Vec::with_capacity(length);
    indices.push(middle);
    let (mut left, mut right) = (middle, middle);
    while indices.len() < length {
        if left > 0 {
            left -= 1;
            indices.push(left);
        }
        if right < length - 1 {
            right += 1;
            indices.push(right);
        }
    }
    indices
}
