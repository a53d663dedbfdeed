//! The six traversal orders.

use std::fmt;
use std::str::FromStr;

/// A traversal order over the contents of a [`Container`](crate::container::Container).
///
/// # Examples
///
/// ```rust
/// use multiorder::traversal::Order;
///
/// assert_eq!(Order::SideCross.to_string(), "side-cross");
/// assert_eq!("middle-out".parse::<Order>(), Ok(Order::MiddleOut));
/// assert_eq!(Order::ALL.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Order {
    /// The order in which elements were added.
    Insertion,
    /// Smallest to largest.
    Ascending,
    /// Largest to smallest.
    Descending,
    /// Last added to first added. Rejects an empty container.
    Reverse,
    /// Smallest, largest, second smallest, second largest, and so on.
    SideCross,
    /// Middle insertion index first, then alternating left and right outward.
    MiddleOut,
}

impl Order {
    /// Every order, in canonical sequence.
    pub const ALL: [Self; 6] = [
        Self::Insertion,
        Self::Ascending,
        Self::Descending,
        Self::Reverse,
        Self::SideCross,
        Self::MiddleOut,
    ];

    /// Returns the kebab-case name used by `Display` and `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Reverse => "reverse",
            Self::SideCross => "side-cross",
            Self::MiddleOut => "middle-out",
        }
    }

    /// Returns `true` if building this order's view requires comparing elements.
    #[must_use]
    pub const fn is_sorting(self) -> bool {
        matches!(self, Self::Ascending | Self::Descending | Self::SideCross)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Returned when a string names none of the six orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrderError(pub String);

impl fmt::Display for UnknownOrderError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown traversal order: {}", self.0)
    }
}

impl std::error::Error for UnknownOrderError {}

impl FromStr for Order {
    type Err = UnknownOrderError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.name() == input)
            .ok_or_else(|| UnknownOrderError(input.to_string()))
    }
}
