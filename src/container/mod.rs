//! The multi-order container.
//!
//! [`Container`] keeps its elements in insertion order and hands out cursors
//! over six different orderings of them. Each cursor owns a snapshot taken
//! when it was created. Mutating the container afterwards never changes an
//! existing cursor.
//!
//! | Method pair                                         | Order             | Needs `Ord` |
//! |-----------------------------------------------------|-------------------|-------------|
//! | `begin_order` / `end_order`                         | insertion         | no          |
//! | `begin_ascending_order` / `end_ascending_order`     | ascending         | yes         |
//! | `begin_descending_order` / `end_descending_order`   | descending        | yes         |
//! | `begin_reverse_order` / `end_reverse_order`         | reverse insertion | no          |
//! | `begin_side_cross_order` / `end_side_cross_order`   | side-cross        | yes         |
//! | `begin_middle_out_order` / `end_middle_out_order`   | middle-out        | no          |
//!
//! `begin` and `end` each build their own view. Do not mutate the container
//! between taking a `begin` cursor and comparing it against an `end` cursor,
//! or the two views will differ and the cursors will never compare equal.
//!
//! # Examples
//!
//! ```rust
//! use multiorder::container::Container;
//!
//! let mut container: Container = [7, 15, 6, 1, 2].into_iter().collect();
//!
//! let mut cursor = container.begin_side_cross_order().unwrap();
//! let end = container.end_side_cross_order().unwrap();
//! let mut seen = Vec::new();
//! while cursor != end {
//!     seen.push(*cursor.get().unwrap());
//!     cursor.advance().unwrap();
//! }
//! assert_eq!(seen, vec![1, 15, 2, 7, 6]);
//!
//! container.remove(&6).unwrap();
//! assert_eq!(container.to_string(), "[7, 15, 1, 2]");
//! assert!(container.remove(&42).is_err());
//! ```

mod store;

pub use store::OrderedStore;

use std::cmp::Ordering;
use std::fmt;

use crate::error::{ContainerError, NotFoundError};
use crate::traversal::{Cursor, Order, View};

/// Generates a named `begin_*` / `end_*` cursor pair that delegates to the
/// given generic constructors.
macro_rules! cursor_pair {
    ($name:ident, $label:literal, $order:expr, $begin:ident, $end:ident) => {
        paste::paste! {
            #[doc = "Returns a cursor at the first element of the " $label " view."]
            ///
            /// # Errors
            ///
            /// See [`Container::begin`].
            pub fn [<begin_ $name>](&self) -> Result<Cursor<T>, ContainerError> {
                self.$begin($order)
            }

            #[doc = "Returns a cursor at the end sentinel of the " $label " view."]
            ///
            /// # Errors
            ///
            /// See [`Container::end`].
            pub fn [<end_ $name>](&self) -> Result<Cursor<T>, ContainerError> {
                self.$end($order)
            }
        }
    };
}

/// An insertion-ordered collection with six traversal orders.
///
/// # Type Parameters
///
/// * `T` - The element type, `i32` by default. Removal needs `PartialEq`,
///   traversal needs `Clone`, and the sorting orders need `Ord` (or a
///   comparator through [`begin_by`](Self::begin_by)).
///
/// # Thread Safety
///
/// The container has no internal synchronization. Share it across threads
/// only behind external locking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Container<T = i32> {
    store: OrderedStore<T>,
}

impl<T> Container<T> {
    /// Creates an empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::container::Container;
    ///
    /// let container: Container = Container::new();
    /// assert_eq!(container.size(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: OrderedStore::new(),
        }
    }

    /// Appends `value`. Duplicates are kept.
    pub fn add(&mut self, value: T) {
        self.store.append(value);
        tracing::debug!(length = self.store.len(), "added element");
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Alias for [`len`](Self::len).
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Returns a borrowing iterator in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.store.iter()
    }
}

impl<T: PartialEq> Container<T> {
    /// Returns `true` if some element equals `value`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.store.contains(value)
    }

    /// Removes every element equal to `value` and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no element equals `value`. The container
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::container::Container;
    ///
    /// let mut container: Container = [4, 2, 4].into_iter().collect();
    /// assert_eq!(container.remove(&4), Ok(2));
    /// assert_eq!(container.as_slice(), &[2]);
    /// assert!(container.remove(&4).is_err());
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<usize, NotFoundError> {
        match self.store.remove_all_equal(value) {
            Ok(removed) => {
                tracing::debug!(removed, length = self.store.len(), "removed element");
                Ok(removed)
            }
            Err(error) => {
                tracing::debug!(length = self.store.len(), "{error}");
                Err(error)
            }
        }
    }
}

impl<T: Clone> Container<T> {
    /// Returns an owned copy of the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.store.snapshot()
    }

    /// Builds the view for `order` from a fresh snapshot, comparing with `compare`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyInput`] for [`Order::Reverse`] on an
    /// empty container.
    pub fn view_by<F>(&self, order: Order, compare: F) -> Result<View<T>, ContainerError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        View::build_by(order, self.snapshot(), compare).map_err(|error| {
            tracing::debug!(%order, "{error}");
            ContainerError::from(error)
        })
    }

    /// Returns a cursor at the first element of the `order` view, sorting with `compare`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyInput`] for [`Order::Reverse`] on an
    /// empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::container::Container;
    /// use multiorder::traversal::Order;
    ///
    /// let container: Container<f64> = [8.8, 1.1, 4.4].into_iter().collect();
    /// let cursor = container.begin_by(Order::Ascending, f64::total_cmp).unwrap();
    /// assert_eq!(cursor.collect::<Vec<_>>(), vec![1.1, 4.4, 8.8]);
    /// ```
    pub fn begin_by<F>(&self, order: Order, compare: F) -> Result<Cursor<T>, ContainerError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.view_by(order, compare).map(Cursor::begin)
    }

    /// Returns a cursor at the end sentinel of the `order` view, sorting with `compare`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyInput`] for [`Order::Reverse`] on an
    /// empty container.
    pub fn end_by<F>(&self, order: Order, compare: F) -> Result<Cursor<T>, ContainerError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.view_by(order, compare).map(Cursor::end)
    }

    fn begin_unsorted(&self, order: Order) -> Result<Cursor<T>, ContainerError> {
        debug_assert!(!order.is_sorting());
        self.begin_by(order, |_, _| Ordering::Equal)
    }

    fn end_unsorted(&self, order: Order) -> Result<Cursor<T>, ContainerError> {
        debug_assert!(!order.is_sorting());
        self.end_by(order, |_, _| Ordering::Equal)
    }

    cursor_pair!(order, "insertion-order", Order::Insertion, begin_unsorted, end_unsorted);
    cursor_pair!(reverse_order, "reverse-order", Order::Reverse, begin_unsorted, end_unsorted);
    cursor_pair!(middle_out_order, "middle-out", Order::MiddleOut, begin_unsorted, end_unsorted);
}

impl<T: Clone + Ord> Container<T> {
    /// Returns a cursor at the first element of the `order` view.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyInput`] for [`Order::Reverse`] on an
    /// empty container. Every other order always succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::container::Container;
    /// use multiorder::traversal::Order;
    ///
    /// let container: Container = [7, 15, 6, 1, 2].into_iter().collect();
    /// let cursor = container.begin(Order::Descending).unwrap();
    /// assert_eq!(cursor.get(), Ok(&15));
    ///
    /// let empty: Container = Container::new();
    /// assert!(empty.begin(Order::Reverse).is_err());
    /// ```
    pub fn begin(&self, order: Order) -> Result<Cursor<T>, ContainerError> {
        self.begin_by(order, Ord::cmp)
    }

    /// Returns a cursor at the end sentinel of the `order` view.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyInput`] for [`Order::Reverse`] on an
    /// empty container. Every other order always succeeds.
    pub fn end(&self, order: Order) -> Result<Cursor<T>, ContainerError> {
        self.end_by(order, Ord::cmp)
    }

    /// Returns the whole `order` view as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyInput`] for [`Order::Reverse`] on an
    /// empty container.
    pub fn traverse(&self, order: Order) -> Result<Vec<T>, ContainerError> {
        self.view_by(order, Ord::cmp).map(View::into_vec)
    }

    cursor_pair!(ascending_order, "ascending", Order::Ascending, begin, end);
    cursor_pair!(descending_order, "descending", Order::Descending, begin, end);
    cursor_pair!(side_cross_order, "side-cross", Order::SideCross, begin, end);
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            store: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.store.extend(iter);
    }
}

impl<T> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.store)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Container<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ContainerVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ContainerVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ContainerVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Container<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Container<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ContainerVisitor::new())
    }
}

static_assertions::assert_impl_all!(Container<String>: Send, Sync, Clone, Default);

// =============================================================================
// Tests
// =============================================================================
