//! A small collections library built around a growable array with an explicit, fixed growth rule.
//!
//! # Purpose
//! Most growable arrays hide their growth strategy. [`DynamicArray`](collections::contiguous::DynamicArray)
//! makes it part of its contract instead: whenever an append finds the storage full, the storage is
//! reallocated to exactly `2 * len + 1` slots. Length and capacity can be observed at every step,
//! and [`Window`](collections::contiguous::Window)s show how views share the storage of the array
//! they were taken from.
//!
//! # Method
//! The collections here manage their own memory through [`std::alloc`] rather than wrapping [`Vec`].
//! In fact, the library doesn't use [`Vec`] at all.
//!
//! # Error Handling
//! It is more ergonomic for collection methods to panic in some cases, because users don't want to
//! handle the possibility of a capacity overflow every time they append a value. Where panicking
//! methods exist, they panic with the message of a strongly typed error, and `try_` variants return
//! that error instead.
//!
//! When this crate employs errors via [`Result`]s, it does so with concrete types: structs that
//! implement [`Error`](std::error::Error), grouped into enums for static dispatch. They can be found
//! in [`error`].
//!
//! # Logging
//! Reallocations and window creation are reported through the [`log`] facade, at `trace` and
//! `debug` level respectively. No logger is installed by the library.
//!
//! # Features
//! - `contiguous`: [`collections`], including [`Array`](collections::contiguous::Array),
//!   [`DynamicArray`](collections::contiguous::DynamicArray) and
//!   [`concat`](collections::contiguous::concat).
//! - `stats`: [`stats::median`] and [`stats::median_of`].
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "contiguous")]
pub mod collections;
#[cfg(feature = "stats")]
pub mod stats;

pub(crate) mod util;

pub use util::error;
