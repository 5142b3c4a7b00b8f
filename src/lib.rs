//! This crate is a small exercise in ownership: a singly linked list, built without a single line
//! of unsafe code.
//!
//! # Purpose
//! Linked lists are the classic example of a data structure which is awkward to write in Rust.
//! Writing one that owns its nodes properly helps me to understand what ownership actually buys,
//! especially compared to a version that links raw pointers together and frees them by hand.
//!
//! # Method
//! [`ForwardList`](collections::linked::ForwardList) owns its first node, and every node owns the
//! next one. Nothing is shared, nothing points backwards and the borrow checker guarantees that
//! there are no dangling links. The one thing ownership doesn't solve is dropping: the compiler's
//! drop glue for a chain of boxes recurses once per node, so the list unlinks and drops nodes in a
//! loop instead.
//!
//! # Error Handling
//! Reading or removing the front of an empty list is a bug in the caller, so those methods panic
//! loudly rather than returning a default. Each of them has a `try_` counterpart which returns a
//! [`Result`] instead, with a strongly typed, zero-sized error that implements
//! [`Error`](std::error::Error).
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types and on `log` for trace output when
//! lists are torn down or transferred. No logger is installed by the library itself.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![forbid(unsafe_code)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "linked")]
pub(crate) mod util;
