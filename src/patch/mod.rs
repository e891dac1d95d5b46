//! Replays operations against the sequence they were computed from.
//!
//! Every operation's `position` is a coordinate in the *original* sequence.
//! Applying them left to right on a buffer that is being edited would shift
//! every later coordinate, so the general path always works from the last
//! operation to the first.

use crate::error::{PatchError, PatchResult};
use crate::matcher::Operation;
use tracing::debug;

/// Checks that `ops` fit a sequence of length `len`: every range in bounds,
/// ranges disjoint and ascending.
pub fn validate<T>(len: usize, ops: &[Operation<T>]) -> PatchResult<()> {
    let mut previous_end = 0;
    for (index, op) in ops.iter().enumerate() {
        if op.position < previous_end {
            return Err(PatchError::Overlap {
                index,
                position: op.position,
                previous_end,
            });
        }
        match op.position.checked_add(op.delete_count) {
            Some(end) if end <= len => previous_end = end,
            _ => {
                return Err(PatchError::OutOfBounds {
                    index,
                    position: op.position,
                    delete_count: op.delete_count,
                    len,
                })
            }
        }
    }
    Ok(())
}

/// Applies `ops` to `old` and returns the patched sequence.
///
/// Malformed operation lists are rejected before anything is built.
///
/// # Examples
///
/// ```
/// use seqdelta::{apply_patch, diff};
///
/// let old = vec!["a", "b", "c"];
/// let new = vec!["a", "c", "d"];
/// let ops = diff(&old, &new);
/// assert_eq!(apply_patch(&old, &ops), Ok(new));
/// ```
pub fn apply_patch<T: Clone>(old: &[T], ops: &[Operation<T>]) -> PatchResult<Vec<T>> {
    if let Err(err) = validate(old.len(), ops) {
        debug!(%err, len = old.len(), operations = ops.len(), "rejected patch");
        return Err(err);
    }

    match ops {
        [] => Ok(old.to_vec()),
        [op] => {
            let mut result = Vec::with_capacity(old.len() - op.delete_count + op.additions.len());
            result.extend_from_slice(&old[..op.position]);
            result.extend_from_slice(&op.additions);
            result.extend_from_slice(&old[op.end()..]);
            Ok(result)
        }
        _ => {
            let mut result = old.to_vec();
            for op in ops.iter().rev() {
                result.splice(op.position..op.end(), op.additions.iter().cloned());
            }
            Ok(result)
        }
    }
}

/// Applies `ops` to `target` in place, moving the additions in.
///
/// `target` is left untouched when the operations are rejected.
pub fn apply_in_place<T>(target: &mut Vec<T>, ops: Vec<Operation<T>>) -> PatchResult<()> {
    if let Err(err) = validate(target.len(), &ops) {
        debug!(%err, len = target.len(), operations = ops.len(), "rejected patch");
        return Err(err);
    }

    for op in ops.into_iter().rev() {
        let range = op.position..op.end();
        target.splice(range, op.additions);
    }
    Ok(())
}
