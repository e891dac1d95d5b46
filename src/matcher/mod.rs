mod index;
mod sync;
pub mod types;
pub use types::*;

use crate::equality::{ByKey, ByPredicate, ByValue, Equality};
use crate::myers::{self, Edit};
use crate::options::{DiffOptions, Strategy};
use index::CandidateIndex;
use std::hash::Hash;
use tracing::{debug, trace};

/// Computes the operations turning `old` into `new` with the default options.
///
/// # Examples
///
/// ```
/// use seqdelta::{diff, Operation};
///
/// let old = vec!["a", "b", "c", "d"];
/// let new = vec!["a", "x", "c", "d"];
/// assert_eq!(diff(&old, &new), vec![Operation::new(1, 1, vec!["x"])]);
/// ```
pub fn diff<T: Eq + Hash + Clone>(old: &[T], new: &[T]) -> Operations<T> {
    diff_with(old, new, &ByValue, &DiffOptions::default())
}

/// Like [`diff`], comparing elements with an arbitrary predicate.
pub fn diff_by<T: Clone, F: Fn(&T, &T) -> bool>(old: &[T], new: &[T], predicate: F) -> Operations<T> {
    diff_with(old, new, &ByPredicate::new(predicate), &DiffOptions::default())
}

/// Like [`diff`], comparing elements by a derived key.
pub fn diff_by_key<T: Clone, K: Eq + Hash, F: Fn(&T) -> K>(old: &[T], new: &[T], key: F) -> Operations<T> {
    diff_with(old, new, &ByKey::new(key), &DiffOptions::default())
}

/// Splits both strings on `'\n'` and diffs the lines.
///
/// Joining the patched lines with `'\n'` gives back `new` exactly.
pub fn diff_lines(old: &str, new: &str) -> Operations<String> {
    let old_lines: Vec<String> = old.split('\n').map(ToString::to_string).collect();
    let new_lines: Vec<String> = new.split('\n').map(ToString::to_string).collect();
    diff(&old_lines, &new_lines)
}

/// Computes the operations turning `old` into `new`.
///
/// Never fails. Every returned operation is non-empty, positions refer to
/// `old`, and ranges are disjoint and ascending.
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The target sequence
/// * `eq` - Decides which elements are the same
/// * `options` - Strategy and search bounds
pub fn diff_with<T: Clone, E: Equality<T> + ?Sized>(
    old: &[T],
    new: &[T],
    eq: &E,
    options: &DiffOptions,
) -> Operations<T> {
    let (prefix, suffix) = if options.trim_affixes || options.strategy == Strategy::Affix {
        affix_lengths(old, new, eq)
    } else {
        (0, 0)
    };
    let old_mid = &old[prefix..old.len() - suffix];
    let new_mid = &new[prefix..new.len() - suffix];

    let lookahead = options.lookahead;
    let min_run = options.sync_run();
    let mut ops = match options.strategy {
        Strategy::Indexed => {
            let index = CandidateIndex::build(new_mid, eq);
            greedy_scan(old_mid, new_mid, eq, |o, n| {
                sync::find_indexed(old_mid, new_mid, o, n, &index, eq, lookahead, min_run)
            })
        }
        Strategy::Scan => greedy_scan(old_mid, new_mid, eq, |o, n| {
            sync::find_scan(old_mid, new_mid, o, n, eq, lookahead, min_run)
        }),
        Strategy::Affix => replace_middle(old_mid, new_mid),
        Strategy::Exact => coalesce(myers::diff_by(old_mid, new_mid, |a, b| eq.eq(a, b))),
    };

    if prefix > 0 {
        for op in &mut ops {
            op.position += prefix;
        }
    }

    debug!(
        old_len = old.len(),
        new_len = new.len(),
        prefix,
        suffix,
        strategy = ?options.strategy,
        operations = ops.len(),
        "computed sequence diff"
    );
    ops
}

/// Common prefix length, then common suffix length of what remains.
fn affix_lengths<T, E: Equality<T> + ?Sized>(old: &[T], new: &[T], eq: &E) -> (usize, usize) {
    let prefix = old
        .iter()
        .zip(new)
        .take_while(|(a, b)| eq.eq(a, b))
        .count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| eq.eq(a, b))
        .count();
    (prefix, suffix)
}

fn greedy_scan<T, E, F>(old: &[T], new: &[T], eq: &E, mut find_sync: F) -> Operations<T>
where
    T: Clone,
    E: Equality<T> + ?Sized,
    F: FnMut(usize, usize) -> Option<(usize, usize)>,
{
    let mut ops = Vec::new();
    let mut old_pos = 0;
    let mut new_pos = 0;

    loop {
        while old_pos < old.len() && new_pos < new.len() && eq.eq(&old[old_pos], &new[new_pos]) {
            old_pos += 1;
            new_pos += 1;
        }
        if old_pos >= old.len() && new_pos >= new.len() {
            break;
        }

        // no sync point in the window: the rest of both sides is one change
        let (sync_old, sync_new) = find_sync(old_pos, new_pos).unwrap_or((old.len(), new.len()));

        let op = Operation::new(old_pos, sync_old - old_pos, new[new_pos..sync_new].to_vec());
        if !op.is_noop() {
            trace!(
                position = op.position,
                delete_count = op.delete_count,
                additions = op.additions.len(),
                "divergence"
            );
            ops.push(op);
        }

        old_pos = sync_old;
        new_pos = sync_new;
    }

    ops
}

fn replace_middle<T: Clone>(old: &[T], new: &[T]) -> Operations<T> {
    if old.is_empty() && new.is_empty() {
        return vec![];
    }
    vec![Operation::new(0, old.len(), new.to_vec())]
}

/// Folds each run of inserts and deletes between two equal elements into one
/// operation.
fn coalesce<T>(edits: Vec<Edit<T>>) -> Operations<T> {
    let mut ops = Vec::new();
    let mut current: Option<Operation<T>> = None;
    let mut old_pos = 0;

    for edit in edits {
        match edit {
            Edit::Equal(_) => {
                if let Some(op) = current.take() {
                    ops.push(op);
                }
                old_pos += 1;
            }
            Edit::Delete(_) => {
                current
                    .get_or_insert_with(|| Operation::new(old_pos, 0, vec![]))
                    .delete_count += 1;
                old_pos += 1;
            }
            Edit::Insert(el) => {
                current
                    .get_or_insert_with(|| Operation::new(old_pos, 0, vec![]))
                    .additions
                    .push(el);
            }
        }
    }
    if let Some(op) = current {
        ops.push(op);
    }

    ops
}
