//! Myers O(ND) shortest edit script.
//!
//! Backs [`Strategy::Exact`](crate::Strategy::Exact). Memory grows with
//! `(n + m) * D`, so the bounded matcher stays the default.

pub mod types;
pub use types::*;

use std::cmp::max;

/// Furthest reaching x per diagonal k, with k in `-size..=size`.
#[derive(Clone)]
struct Frontier {
    data: Vec<usize>,
    offset: isize,
}

impl Frontier {
    fn new(size: usize) -> Self {
        Frontier {
            data: vec![0; 2 * size + 1],
            offset: size as isize,
        }
    }

    fn get(&self, k: isize) -> usize {
        self.data[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, val: usize) {
        self.data[(k + self.offset) as usize] = val;
    }
}

/// Computes the shortest edit script between two sequences.
///
/// # Examples
///
/// ```
/// use seqdelta::myers::{diff, Edit};
///
/// let old = vec![1, 2, 3];
/// let new = vec![1, 3, 4];
/// let result = diff(&old, &new);
/// assert_eq!(result, vec![
///     Edit::Equal(1),
///     Edit::Delete(2),
///     Edit::Equal(3),
///     Edit::Insert(4),
/// ]);
/// ```
pub fn diff<T: Eq + Clone>(old: &[T], new: &[T]) -> Diff<T> {
    diff_by(old, new, |a, b| a == b)
}

/// Same as [`diff`] with a caller supplied equality.
pub fn diff_by<T: Clone, F: Fn(&T, &T) -> bool>(old: &[T], new: &[T], eq: F) -> Diff<T> {
    if old.is_empty() {
        return new.iter().map(|e| Edit::Insert(e.clone())).collect();
    }
    if new.is_empty() {
        return old.iter().map(|e| Edit::Delete(e.clone())).collect();
    }

    let n = old.len();
    let m = new.len();
    let max_d = n + m;
    let mut v = Frontier::new(max_d);
    // trace[d] holds the frontier after round d; round d only writes
    // diagonals of d's parity, so the neighbours still hold round d - 1
    let mut trace: Vec<Frontier> = Vec::new();
    let mut end = (n, m);

    'rounds: for d in 0..=max_d as isize {
        for k in (-d..=d).step_by(2) {
            let mut x = if k == -d {
                v.get(k + 1)
            } else if k == d {
                v.get(k - 1) + 1
            } else {
                max(v.get(k + 1), v.get(k - 1) + 1)
            };
            let mut y = (x as isize - k) as usize;
            while x < n && y < m && eq(&old[x], &new[y]) {
                x += 1;
                y += 1;
            }
            v.set(k, x);
            if x >= n && y >= m {
                end = (x, y);
                trace.push(v.clone());
                break 'rounds;
            }
        }
        trace.push(v.clone());
    }

    backtrack(old, new, &trace, end, &eq)
}

fn backtrack<T: Clone, F: Fn(&T, &T) -> bool>(
    old: &[T],
    new: &[T],
    trace: &[Frontier],
    (mut x, mut y): (usize, usize),
    eq: &F,
) -> Diff<T> {
    let mut edits: Diff<T> = Vec::new();
    for (d, frontier) in trace.iter().enumerate().rev() {
        let d = d as isize;
        let k = x as isize - y as isize;
        let prev_k = if k == -d {
            k + 1
        } else if k == d || frontier.get(k - 1) + 1 >= frontier.get(k + 1) {
            k - 1
        } else {
            k + 1
        };
        let prev_x = frontier.get(prev_k);
        let prev_y = prev_x as isize - prev_k;
        while x > prev_x && y as isize > prev_y && eq(&old[x - 1], &new[y - 1]) {
            edits.push(Edit::Equal(old[x - 1].clone()));
            x -= 1;
            y -= 1;
        }
        if d > 0 {
            if prev_k == k - 1 {
                edits.push(Edit::Delete(old[x - 1].clone()));
            } else {
                edits.push(Edit::Insert(new[y - 1].clone()));
            }
        }
        x = prev_x;
        y = prev_y.max(0) as usize;
    }
    while x > 0 && y > 0 {
        edits.push(Edit::Equal(old[x - 1].clone()));
        x -= 1;
        y -= 1;
    }

    edits.reverse();
    edits
}
