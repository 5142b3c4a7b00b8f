//! Linked collection types. Currently this is just [`ForwardList`], a singly linked list which
//! only supports access at its front.

pub mod forward;

#[doc(inline)]
pub use forward::ForwardList;
