//! Positional deltas between flat sequences.
//!
//! [`diff`] turns two sequences into a list of [`Operation`]s, each one
//! "delete `delete_count` elements at `position`, then insert `additions`".
//! [`apply_patch`] replays them on the original sequence.
//!
//! All positions in an operation list refer to the original sequence, and
//! the ranges they cover are disjoint and ascending.
//!
//! ```
//! use seqdelta::{apply_patch, diff};
//!
//! let old = vec!["a", "b", "c"];
//! let new = vec!["a", "c"];
//! let ops = diff(&old, &new);
//! assert_eq!(apply_patch(&old, &ops), Ok(new));
//! ```
//!
//! The default matcher bounds its search for sync points, trading an
//! occasional larger delta for linear behaviour on long inputs. Use
//! [`Strategy::Exact`] through [`diff_with`] for a shortest edit script.

pub mod equality;
pub mod error;
pub mod matcher;
pub mod myers;
pub mod options;
pub mod patch;
pub mod tokenize;

pub use equality::{ByKey, ByPredicate, ByValue, Equality};
pub use error::{PatchError, PatchResult};
pub use matcher::{diff, diff_by, diff_by_key, diff_lines, diff_with, Operation, Operations};
pub use options::{DiffOptions, Strategy};
pub use patch::{apply_in_place, apply_patch, validate};

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Operation<String>: Send, Sync, Clone);
    assert_impl_all!(DiffOptions: Send, Sync, Clone, Default);
    assert_impl_all!(PatchError: Send, Sync, std::error::Error);
}
