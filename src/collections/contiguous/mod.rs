//! Contiguous collection types. Namely [`Array`] for fixed-size storage, [`DynamicArray`] for
//! storage that grows as values are appended and [`Window`] for views into a DynamicArray.
#![warn(missing_docs)]

pub mod array;
pub mod dynamic;

mod concat;

#[doc(inline)]
pub use array::Array;
pub use concat::concat;
#[doc(inline)]
pub use dynamic::{DynamicArray, GROWTH_FACTOR, GROWTH_OFFSET, Window, growth_target};
