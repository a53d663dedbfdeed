//! Traversal orders, views and cursors.
//!
//! A traversal takes three steps:
//!
//! 1. the container hands out a snapshot of its elements in insertion order,
//! 2. a builder from [`view`] reorders the snapshot into an owned [`View`],
//! 3. the view is wrapped in a [`Cursor`] at its first element or its end.
//!
//! Every order shares the same [`Cursor`] type. Only the builder differs.
//!
//! # Examples
//!
//! ```rust
//! use multiorder::traversal::{Cursor, Order, View};
//!
//! let snapshot = vec![7, 15, 6, 1, 2];
//! let cursor = Cursor::begin(View::build(Order::SideCross, snapshot).unwrap());
//! assert_eq!(cursor.collect::<Vec<_>>(), vec![1, 15, 2, 7, 6]);
//! ```

mod cursor;
mod order;
pub mod view;

pub use cursor::Cursor;
pub use order::Order;
pub use order::UnknownOrderError;
pub use view::View;

static_assertions::assert_impl_all!(View<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Cursor<String>: Send, Sync, Clone, Iterator);
