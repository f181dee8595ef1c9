//! Statistics over sequences of floating point values.

mod median;

pub use median::*;
