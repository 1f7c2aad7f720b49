use thiserror::Error;

/// Result type for fallible [`List`] operations.
///
/// [`List`]: crate::List
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by fallible [`List`] operations.
///
/// Validity checks run before any mutation, so a call that returns an error
/// is a no-op on the list.
///
/// # Examples
///
/// ```
/// use forward_list::{Error, List};
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
///
/// assert_eq!(list.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));
/// assert!(matches!(list.nth_from_end(0), Err(Error::InvalidArgument(_))));
///
/// list.clear();
/// assert_eq!(list.pop_back(), Err(Error::Empty));
/// ```
///
/// [`List`]: crate::List
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index argument was outside the valid range for the requested
    /// operation.
    #[error("index {index} is out of range for a list of length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// An argument was structurally invalid, independently of the list
    /// state.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The operation requires at least one element, but the list is empty.
    #[error("the list is empty")]
    Empty,
}
