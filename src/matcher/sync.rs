//! Sync point search.
//!
//! A sync point is a pair `(o, n)` with `old[o] == new[n]` where the two
//! sequences are judged to line up again after a divergence. Both searches
//! below look at the same window, every pair whose distance
//! `(o - old_pos) + (n - new_pos)` lies in `1..=lookahead`, and pick the same
//! winner: smallest distance first, then smallest old offset.

use super::index::CandidateIndex;
use crate::equality::Equality;

/// At least `min_run` equal elements start at `(o, n)`, or the equal run
/// reaches the end of both sequences.
pub(crate) fn is_good_sync_point<T, E: Equality<T> + ?Sized>(
    old: &[T],
    new: &[T],
    o: usize,
    n: usize,
    min_run: usize,
    eq: &E,
) -> bool {
    if o >= old.len() || n >= new.len() {
        return o >= old.len() && n >= new.len();
    }

    let limit = min_run.min(old.len() - o).min(new.len() - n);
    let matches = (0..limit)
        .take_while(|&i| eq.eq(&old[o + i], &new[n + i]))
        .count();

    matches >= min_run || (o + matches >= old.len() && n + matches >= new.len())
}

/// Walks old offsets in order and asks the index for matching new positions.
#[allow(clippy::too_many_arguments)]
pub(crate) fn find_indexed<T, E: Equality<T> + ?Sized>(
    old: &[T],
    new: &[T],
    old_pos: usize,
    new_pos: usize,
    index: &CandidateIndex,
    eq: &E,
    lookahead: usize,
    min_run: usize,
) -> Option<(usize, usize)> {
    let mut best = None;
    // exclusive bound on the distance of the next accepted candidate
    let mut bound = lookahead.saturating_add(1);

    for (old_offset, el) in old[old_pos.min(old.len())..].iter().enumerate() {
        if old_offset >= bound {
            break;
        }
        let o = old_pos + old_offset;
        for &n in index.candidates(el, eq, new_pos) {
            let distance = old_offset + (n - new_pos);
            if distance >= bound {
                break;
            }
            if distance == 0 {
                continue;
            }
            if eq.eq(el, &new[n]) && is_good_sync_point(old, new, o, n, min_run, eq) {
                best = Some((o, n));
                bound = distance;
                break;
            }
        }
    }

    best
}

/// Brute-force enumeration of the same window, by increasing distance.
pub(crate) fn find_scan<T, E: Equality<T> + ?Sized>(
    old: &[T],
    new: &[T],
    old_pos: usize,
    new_pos: usize,
    eq: &E,
    lookahead: usize,
    min_run: usize,
) -> Option<(usize, usize)> {
    if old_pos >= old.len() || new_pos >= new.len() {
        return None;
    }

    let furthest = (old.len() - 1 - old_pos) + (new.len() - 1 - new_pos);
    for distance in 1..=lookahead.min(furthest) {
        for old_offset in 0..=distance {
            let o = old_pos + old_offset;
            if o >= old.len() {
                break;
            }
            let n = new_pos + (distance - old_offset);
            if n >= new.len() {
                continue;
            }
            if eq.eq(&old[o], &new[n]) && is_good_sync_point(old, new, o, n, min_run, eq) {
                return Some((o, n));
            }
        }
    }

    None
}
