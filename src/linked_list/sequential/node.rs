use alloc::boxed::Box;

/// An owning edge of the chain. `None` marks the end.
pub type Link<T> = Option<Box<Node<T>>>;

/// A node in a sequential list.
///
/// Nodes are only ever created and unlinked by the list that owns them.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Boxes a new node in front of `next`.
    pub(crate) fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node following this one, if any.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}
