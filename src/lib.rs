//! # multiorder
//!
//! An insertion-ordered container with six read-only traversal orders.
//!
//! ## Overview
//!
//! [`Container`](container::Container) stores values in the order they were
//! added, duplicates included. It hands out forward-only cursors over any of
//! six orderings of its current contents:
//!
//! - **Insertion**: the order in which values were added
//! - **Ascending** / **Descending**: sorted by the element ordering
//! - **Reverse**: last added first (rejects an empty container)
//! - **Side-cross**: smallest, largest, second smallest, second largest, ...
//! - **Middle-out**: middle insertion index first, then alternating outward
//!
//! Every cursor owns a materialized copy of its view, so later mutations of the
//! container never affect it.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Container` as a plain sequence
//!
//! ## Example
//!
//! ```rust
//! use multiorder::prelude::*;
//!
//! let mut container: Container = Container::new();
//! for value in [7, 15, 6, 1, 2] {
//!     container.add(value);
//! }
//!
//! let middle_out: Vec<i32> = container.begin_middle_out_order().unwrap().collect();
//! assert_eq!(middle_out, vec![6, 15, 1, 7, 2]);
//! assert_eq!(container.to_string(), "[7, 15, 6, 1, 2]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, the traversal types and the error types.
///
/// # Usage
///
/// ```rust
/// use multiorder::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::error::*;
    pub use crate::traversal::{Cursor, Order, View};
}

pub mod container;
pub mod error;
pub mod traversal;
