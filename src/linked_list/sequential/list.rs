use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, trace};

use super::error::ListError;
use super::node::{Link, Node};

/// A singly linked list addressed by zero-based position.
///
/// The list owns its head node and keeps a node count that every mutation
/// updates. There is no tail pointer, so appending and positional access walk
/// the chain from the head.
pub struct SequentialList<T> {
    head: Link<T>,
    count: usize,
}

impl<T> SequentialList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SequentialList {
            head: None,
            count: 0,
        }
    }

    /// Get the head of the list
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Get the number of nodes in the list
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Links `value` in as the new head.
    pub fn prepend(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
        self.count += 1;
        trace!(count = self.count, "prepended node");
    }

    /// Links `value` in after the last node.
    pub fn add(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Node::boxed(value, None));
        self.count += 1;
        trace!(count = self.count, "appended node");
    }

    /// Inserts `value` at `index`, shifting the node there and every node after
    /// it one position towards the end.
    ///
    /// An `index` equal to [`count`](Self::count) leaves the list untouched
    /// rather than appending. Use [`add`](Self::add) to extend the list.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if `index > count`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let count = self.count;
        if index > count {
            debug!(index, count, "insert rejected");
            return Err(ListError::OutOfRange { index, count });
        }
        if index == count {
            // FIXME: an index equal to the count should append instead of
            // dropping the value.
            debug!(index, count, "insert at end position ignored");
            return Ok(());
        }

        let link = self
            .link_at_mut(index)
            .ok_or(ListError::OutOfRange { index, count })?;
        let next = link.take();
        *link = Some(Node::boxed(value, next));
        self.count += 1;
        trace!(index, count = self.count, "inserted node");
        Ok(())
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if `index >= count`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.node_at(index).map(Node::value).ok_or_else(|| {
            debug!(index, count = self.count, "get rejected");
            ListError::OutOfRange {
                index,
                count: self.count,
            }
        })
    }

    /// Returns the value of the last node.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] if the list has no nodes.
    pub fn last(&self) -> Result<&T, ListError> {
        let mut node = self.head().ok_or_else(|| {
            debug!("last requested on empty list");
            ListError::Empty
        })?;
        while let Some(next) = node.next() {
            node = next;
        }
        Ok(node.value())
    }

    /// Unlinks the first node whose value equals `value`.
    ///
    /// Returns `false`, leaving the list unchanged, when no node matches.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(index) = self.position(value) else {
            return false;
        };
        self.unlink(index).is_some()
    }

    /// Unlinks the node at `index` and returns its value. Later nodes shift one
    /// position towards the head.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if `index >= count`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let count = self.count;
        self.unlink(index).ok_or_else(|| {
            debug!(index, count, "remove_at rejected");
            ListError::OutOfRange { index, count }
        })
    }

    /// Copies the values into a new vector, head first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.count);
        let mut current = self.head();
        while let Some(node) = current {
            values.push(node.value().clone());
            current = node.next();
        }
        values
    }

    /// Moves the values into a new vector, head first.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.count);
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
            values.push(node.value);
        }
        self.count = 0;
        values
    }

    /// Unlinks and drops every node.
    pub fn clear(&mut self) {
        // One node at a time, so long chains do not recurse in `Box::drop`.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        trace!(dropped = self.count, "cleared list");
        self.count = 0;
    }

    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut node = self.head();
        for _ in 0..index {
            node = node?.next();
        }
        node
    }

    /// The link that owns the node at `index`, or the trailing `None` when
    /// `index == count`.
    fn link_at_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => return None,
            }
        }
        Some(link)
    }

    fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut index = 0;
        let mut current = self.head();
        while let Some(node) = current {
            if node.value() == value {
                return Some(index);
            }
            index += 1;
            current = node.next();
        }
        None
    }

    fn unlink(&mut self, index: usize) -> Option<T> {
        if index >= self.count {
            return None;
        }
        let link = self.link_at_mut(index)?;
        let mut node = link.take()?;
        *link = node.next.take();
        self.count -= 1;
        trace!(index, count = self.count, "unlinked node");
        Some(node.value)
    }
}

impl<T> Default for SequentialList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SequentialList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for SequentialList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut link = &mut list.head;
        let mut count = 0;
        for value in iter {
            let node = link.insert(Node::boxed(value, None));
            link = &mut node.next;
            count += 1;
        }
        list.count = count;
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SequentialList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for SequentialList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for SequentialList<T> {
    fn clone(&self) -> Self {
        self.to_vec().into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for SequentialList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.count != other.count {
            return false;
        }
        let (mut a, mut b) = (self.head(), other.head());
        while let (Some(x), Some(y)) = (a, b) {
            if x.value() != y.value() {
                return false;
            }
            a = x.next();
            b = y.next();
        }
        true
    }
}

impl<T: Eq> Eq for SequentialList<T> {}

impl<T: fmt::Debug> fmt::Debug for SequentialList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        let mut current = self.head();
        while let Some(node) = current {
            entries.entry(node.value());
            current = node.next();
        }
        entries.finish()
    }
}
