#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Alias for a vector of Operation
/// Result of every diff function, sorted ascending by `position`
pub type Operations<T> = Vec<Operation<T>>;

/// Replace `delete_count` elements at `position` with `additions`.
///
/// `position` always refers to the original, unpatched sequence. It does not
/// account for any other operation in the same list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Operation<T> {
    pub position: usize,
    pub delete_count: usize,
    pub additions: Vec<T>,
}

impl<T> Operation<T> {
    pub fn new(position: usize, delete_count: usize, additions: Vec<T>) -> Self {
        Operation {
            position,
            delete_count,
            additions,
        }
    }

    /// First index in the original sequence past the deleted range.
    /// Saturates instead of overflowing on hand-built operations.
    pub fn end(&self) -> usize {
        self.position.saturating_add(self.delete_count)
    }

    pub fn is_noop(&self) -> bool {
        self.delete_count == 0 && self.additions.is_empty()
    }
}
