//! A module containing [`DynamicArray`] and associated types.
//!
//! [`Window`] is a borrowed view with its own length and capacity, created from a DynamicArray. The
//! owned iterator is a re-export of [`array::IntoIter`](super::array::IntoIter).
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`DynamicArray`] and [`Window`] are also re-exported under the parent module.

mod dynamic_array;
mod iter;
mod tests;
mod window;

pub use dynamic_array::{DynamicArray, GROWTH_FACTOR, GROWTH_OFFSET, growth_target};
pub use iter::*;
pub use window::Window;
