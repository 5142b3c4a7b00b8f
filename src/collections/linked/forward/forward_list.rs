use std::fmt::{self, Debug, Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::mem;

use derive_more::IsVariant;
use log::trace;

use super::{Iter, IterMut, Length, Node, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyList};
use crate::util::result::ResultExtension;

/// A list with links in one direction, from the front towards the back. Elements can only be
/// added, inspected and removed at the front, which makes ForwardList behave like a stack.
///
/// # Ownership
/// The list owns its first node and every node owns the one after it, there is no sharing and no
/// link points backwards. ForwardList doesn't implement [`Clone`]: it can be moved, but never
/// duplicated. [`take`](ForwardList::take) moves the contents out of a list that can't itself be
/// moved (e.g. behind a `&mut`), leaving it empty.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `take` | `O(1)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct ForwardList<T> {
    pub(crate) state: ListState<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: Box<Node<T>>,
}

impl<T> ForwardList<T> {
    /// Creates a new ForwardList with no elements.
    pub const fn new() -> ForwardList<T> {
        ForwardList {
            state: Empty,
        }
    }

    /// Returns the length of the ForwardList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// An alias for [`len`](ForwardList::len).
    pub const fn size(&self) -> usize {
        self.len()
    }

    /// Returns true if the ForwardList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, panicking if there isn't one.
    ///
    /// # Panics
    /// Panics if the ForwardList is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the first element in the list, returning an [`Err`] if the list is
    /// empty rather than panicking.
    pub fn try_front(&self) -> Result<&T, EmptyList> {
        match &self.state {
            Empty => Err(EmptyList),
            Full(ListContents { head, .. }) => Ok(&head.value),
        }
    }

    /// Returns a mutable reference to the first element in the list, panicking if there isn't one.
    ///
    /// # Panics
    /// Panics if the ForwardList is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    /// Returns a mutable reference to the first element in the list, returning an [`Err`] if the
    /// list is empty rather than panicking.
    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyList> {
        match &mut self.state {
            Empty => Err(EmptyList),
            Full(ListContents { head, .. }) => Ok(&mut head.value),
        }
    }

    /// Add the provided element to the front of the ForwardList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    #[track_caller]
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Removes the first element from the list and drops it. The removed value isn't returned, so
    /// anything needed from it should be read with [`front`](ForwardList::front) first.
    ///
    /// # Panics
    /// Panics if the ForwardList is empty.
    #[track_caller]
    pub fn pop_front(&mut self) {
        self.try_pop_front().throw()
    }

    /// Removes the first element from the list and drops it, returning an [`Err`] if the list is
    /// empty rather than panicking.
    pub fn try_pop_front(&mut self) -> Result<(), EmptyList> {
        // The node is unlinked before it is dropped, so dropping it never reaches the rest of the
        // chain.
        self.unlink_front().map(drop).ok_or(EmptyList)
    }

    /// Moves the contents of this list into a new ForwardList, leaving this one empty.
    pub fn take(&mut self) -> ForwardList<T> {
        if let Full(ListContents { len, .. }) = &self.state {
            trace!("transferring ownership of {} nodes", len.get());
        }
        mem::take(self)
    }

    /// Drops every element in the list, one node at a time.
    pub fn clear(&mut self) {
        if let Full(ListContents { len, head }) = mem::take(&mut self.state) {
            trace!("releasing {} nodes", len.get());

            let mut curr = Some(head);
            while let Some(mut node) = curr {
                curr = node.next.take();
            }
        }
    }

    /// Reverses the order of the list in place by relinking its nodes. No elements are moved or
    /// reallocated.
    pub fn reverse(&mut self) {
        if let Full(ListContents { head, .. }) = &mut self.state {
            // Head on its own is the reversed prefix, every remaining node is moved in front of it.
            let mut rest = head.next.take();
            while let Some(mut node) = rest {
                rest = node.next.take();
                let prev_head = mem::replace(head, node);
                head.next = Some(prev_head);
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Removes the head node from the chain and returns it with its next link cleared.
    pub(crate) fn unlink_front(&mut self) -> Option<Box<Node<T>>> {
        match mem::take(&mut self.state) {
            Empty => None,
            Full(ListContents { len, mut head }) => {
                // A length of one leaves the list empty, anything more has a successor to promote.
                if let (Some(next), Some(new_len)) = (head.next.take(), len.checked_sub(1)) {
                    self.state = Full(ListContents {
                        len: new_len,
                        head: next,
                    });
                }
                Some(head)
            },
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub(crate) fn take_front(&mut self) -> Option<T> {
        self.unlink_front().map(|node| node.value)
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head }) => {
                let mut count = 1;
                let mut curr = &head.next;
                while let Some(node) = curr {
                    count += 1;
                    curr = &node.next;
                }
                assert_eq!(count, len.get(), "Stored length should match the number of nodes.");
            },
        }
    }
}

impl<T: PartialEq> ForwardList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> ListContents<T> {
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let prev_head = mem::replace(&mut self.head, Node::boxed(value, None));
        self.head.next = Some(prev_head);
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        ListContents {
            len: ONE,
            head: Node::boxed(value, None),
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    /// Collects the items into a list which yields them in their original order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        list.extend(iter);
        list.reverse();
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Pushes each item onto the front of the list in turn, so the last item becomes the head.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_front(item);
        }
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for ForwardList<T> {
    /// Formats the list as `[a, b, c]`. Width, fill and alignment apply to the whole list rather
    /// than to each element.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut out = String::from("[");
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                out.push_str(", ");
            }
            write!(out, "{item}")?;
        }
        out.push(']');
        f.pad(&out)
    }
}
