use thiserror::Error;

/// Errors returned by [`SequentialList`](super::SequentialList) operations.
///
/// Every check runs before the chain is touched, so an `Err` always leaves the
/// list exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The index lies outside the range accepted by the operation.
    #[error("index {index} is out of range for list of length {count}")]
    OutOfRange { index: usize, count: usize },

    /// The operation needs at least one element.
    #[error("operation is invalid on an empty list")]
    Empty,
}
