//! An owning singly linked list.
//!
//! Every node owns the node after it, and the list owns the head. Values are
//! moved into freshly allocated nodes on insertion and handed back (or dropped)
//! when their node is unlinked. Positions are zero-based and resolved by
//! walking the chain from the head.
//!
//! # Examples
//!
//! ```
//! use sequential_list::linked_list::sequential::{ListError, SequentialList};
//!
//! let mut list = SequentialList::from([1, 2, 3]);
//! list.prepend(4);
//!
//! assert_eq!(list.to_vec(), vec![4, 1, 2, 3]);
//! assert_eq!(list.count(), 4);
//! assert_eq!(list.last(), Ok(&3));
//!
//! assert!(list.remove(&1));
//! assert_eq!(list.remove_at(0), Ok(4));
//! assert_eq!(
//!     list.get(5),
//!     Err(ListError::OutOfRange { index: 5, count: 2 })
//! );
//! ```
pub mod sequential;
