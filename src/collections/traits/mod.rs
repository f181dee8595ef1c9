//! Traits shared between collections.

mod contiguous;

pub use contiguous::*;
