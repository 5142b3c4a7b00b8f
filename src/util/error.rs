use derive_more::{Display, Error};

/// The error produced when an operation that reads or removes the front of a collection is
/// invoked on an empty one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Operation requires a non-empty list!")]
pub struct EmptyList;

/// The error produced when a collection's length would exceed [`usize::MAX`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
