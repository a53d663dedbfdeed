//! Error types for container mutation and traversal.
//!
//! Every failure in this crate is synchronous and reported to the immediate
//! caller. Mutations are atomic: an operation that returns an error leaves the
//! container exactly as it was.
//!
//! - [`NotFoundError`]: `remove` was asked for a value the container does not hold
//! - [`EmptyInputError`]: a reverse-order view was requested over an empty container
//! - [`OutOfBoundsError`]: a cursor was dereferenced or advanced at its end position
//!
//! [`ContainerError`] unifies all three so that callers can use `?` across
//! operations.

use std::fmt;

/// Returned by `remove` when no element equals the requested value.
///
/// # Examples
///
/// ```rust
/// use multiorder::error::NotFoundError;
///
/// assert_eq!(format!("{}", NotFoundError), "Element not found in container.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotFoundError;

impl fmt::Display for NotFoundError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Element not found in container.")
    }
}

impl std::error::Error for NotFoundError {}

/// Returned when a reverse-order view is built from an empty snapshot.
///
/// Reverse order is the only traversal that rejects an empty container; the
/// other five orders produce an empty view instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Cannot create ReverseOrder with empty elements")
    }
}

impl std::error::Error for EmptyInputError {}

/// The cursor operation that ran past the end of its view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorOperation {
    /// Reading the element under the cursor.
    Dereference,
    /// Moving the cursor forward by one.
    Advance,
}

/// Returned when a cursor at its end position is dereferenced or advanced.
///
/// # Examples
///
/// ```rust
/// use multiorder::error::{CursorOperation, OutOfBoundsError};
///
/// let error = OutOfBoundsError {
///     operation: CursorOperation::Advance,
///     position: 3,
///     length: 3,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Iterator increment past end (position 3, length 3)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBoundsError {
    /// The operation that failed.
    pub operation: CursorOperation,
    /// The cursor position at the time of failure.
    pub position: usize,
    /// The length of the cursor's view.
    pub length: usize,
}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self.operation {
            CursorOperation::Dereference => "Iterator out of range",
            CursorOperation::Advance => "Iterator increment past end",
        };
        write!(
            formatter,
            "{message} (position {}, length {})",
            self.position, self.length
        )
    }
}

impl std::error::Error for OutOfBoundsError {}

/// Unified error type for every container and cursor operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerError {
    /// See [`NotFoundError`].
    NotFound(NotFoundError),
    /// See [`EmptyInputError`].
    EmptyInput(EmptyInputError),
    /// See [`OutOfBoundsError`].
    OutOfBounds(OutOfBoundsError),
}

impl fmt::Display for ContainerError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(error) => write!(formatter, "{error}"),
            Self::EmptyInput(error) => write!(formatter, "{error}"),
            Self::OutOfBounds(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ContainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(error) => Some(error),
            Self::EmptyInput(error) => Some(error),
            Self::OutOfBounds(error) => Some(error),
        }
    }
}

impl From<NotFoundError> for ContainerError {
    fn from(error: NotFoundError) -> Self {
        Self::NotFound(error)
    }
}

impl From<EmptyInputError> for ContainerError {
    fn from(error: EmptyInputError) -> Self {
        Self::EmptyInput(error)
    }
}

impl From<OutOfBoundsError> for ContainerError {
    fn from(error: OutOfBoundsError) -> Self {
        Self::OutOfBounds(error)
    }
}
