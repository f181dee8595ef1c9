//! Collection types that manage their own storage.
//!
//! # Purpose
//! These types exist to make the bookkeeping of contiguous storage visible: how many elements are
//! live, how many slots are allocated, when a block is reallocated and which views share it.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref), which saves writing
//! much of the more repetitive read-only functionality.

pub mod contiguous;
pub mod report;
pub mod traits;
