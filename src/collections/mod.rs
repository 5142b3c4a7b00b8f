//! Collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also about
//! ownership, drop order and iterators.

#[cfg(feature = "linked")]
pub mod linked;
