//! # Sequential List
//!
//! A singly linked list addressed by position.
//!
//! ## Core Components
//!
//! - [`list::SequentialList`]: the container and all of its operations.
//! - [`node::Node`]: one link in the chain, owning its successor.
//! - [`error::ListError`]: failures reported by positional operations.
//!
//! ## Ownership
//!
//! The chain is a plain `Option<Box<Node<T>>>` sequence, so there is no
//! `unsafe` code here and no node is reachable through more than one path.
//! Mutation needs `&mut SequentialList`; wrap the list in a lock of your choice
//! to share it between threads.

pub mod error;
pub mod list;
pub mod node;

pub use error::ListError;
pub use list::SequentialList;

#[cfg(test)]
mod tests;
