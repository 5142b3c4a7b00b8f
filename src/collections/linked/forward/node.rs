pub(crate) type Link<T> = Option<Box<Node<T>>>;

// NOTE: Node deliberately has no Drop impl. Dropping a node drops its successor, which drops its
// successor and so on, so a chain must never be dropped through its head. ForwardList unlinks
// nodes one at a time instead.

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node {
            value,
            next,
        })
    }
}
