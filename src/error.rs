//! Errors raised while applying operations.

use thiserror::Error;

/// A malformed operation list. Positions are in the original sequence and
/// `index` is the offending operation's place in the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    /// The operation deletes past the end of the sequence
    #[error("operation {index} covers {position}..{position}+{delete_count}, past the sequence end {len}")]
    OutOfBounds {
        index: usize,
        position: usize,
        delete_count: usize,
        len: usize,
    },

    /// The operation starts before the previous one ends
    #[error("operation {index} starts at {position}, before the previous operation ends at {previous_end}")]
    Overlap {
        index: usize,
        position: usize,
        previous_end: usize,
    },
}

/// Result type alias for patch application.
pub type PatchResult<T> = Result<T, PatchError>;

impl PatchError {
    /// Index of the offending operation.
    pub fn index(&self) -> usize {
        match self {
            PatchError::OutOfBounds { index, .. } | PatchError::Overlap { index, .. } => *index,
        }
    }
}
