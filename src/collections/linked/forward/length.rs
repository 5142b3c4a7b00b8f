use std::num::NonZero;

/// The number of nodes in a non-empty list. An empty list carries no Length at all.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn checked_add(self, other: usize) -> Option<Length> {
        match self.0.checked_add(other) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    /// Returns None if the result would be zero (or negative), which is the signal for a list to
    /// become empty.
    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(res) => Length::new(res),
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn new(value: usize) -> Option<Length> {
        match NonZero::new(value) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
