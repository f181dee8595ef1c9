//! Error types returned (or panicked with) by the collections and statistics of this crate.

use std::error;
use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The requested capacity can't be represented by a valid memory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl fmt::Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl error::Error for CapacityOverflow {}

/// A window was requested with a range that isn't contained within the reachable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOutOfBounds {
    pub start: usize,
    pub end: usize,
    pub cap: usize,
}

impl fmt::Display for WindowOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.start > self.end {
            write!(f, "Window starts at {} but ends at {}!", self.start, self.end)
        } else {
            write!(
                f,
                "Window {}..{} out of bounds for capacity {}!",
                self.start, self.end, self.cap
            )
        }
    }
}

impl error::Error for WindowOutOfBounds {}

/// A statistic was requested over a sequence with no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyInput;

impl fmt::Display for EmptyInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Can't get the median of an empty sequence!")
    }
}

impl error::Error for EmptyInput {}

/// A value which isn't a number was found where an ordered value was required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotANumber {
    pub index: usize,
}

impl fmt::Display for NotANumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value at index {} is NaN and can't be ordered!", self.index)
    }
}

impl error::Error for NotANumber {}

/// The ways that a median can fail to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum MedianError {
    EmptyInput(EmptyInput),
    NotANumber(NotANumber),
}
