//! Error types for the `hash-array` crate

/// Errors raised by positional operations on a [`HashArray`](crate::HashArray).
///
/// Looking up a hash or value that is not stored is never an error, those
/// operations return `Option` or the insertion point instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A position outside `0..len` was used for read, write or removal.
    ///
    /// The check happens before any element is shifted, so the array is
    /// left untouched.
    #[error("index {index} is out of range for hash array of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A positional write tried to store a value whose hash code differs
    /// from the hash code already stored at that position.
    ///
    /// Accepting it would break the sort order, so the write is rejected.
    #[error("hash code mismatch at index {index}: stored {stored}, replacement {replacement}")]
    HashMismatch {
        index: usize,
        stored: i32,
        replacement: i32,
    },

    /// A bulk copy-out target cannot hold all live elements at the requested offset.
    #[error("destination of length {available} cannot hold {required} elements at offset {offset}")]
    DestinationTooSmall {
        offset: usize,
        required: usize,
        available: usize,
    },
}
