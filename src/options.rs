#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default distance scanned for the next sync point.
pub const DEFAULT_LOOKAHEAD: usize = 100;

/// Default number of consecutive equal elements a sync point needs.
pub const DEFAULT_MIN_SYNC_RUN: usize = 2;

/// How the matcher looks for sync points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Bounded greedy search driven by a value -> positions index.
    #[default]
    Indexed,
    /// Same window as `Indexed`, enumerated by brute force without an index.
    Scan,
    /// Common prefix and suffix only; at most one replace operation.
    Affix,
    /// Myers shortest edit script. Quadratic in the worst case.
    Exact,
}

/// Options for [`diff_with`](crate::diff_with).
///
/// ```
/// use seqdelta::{DiffOptions, Strategy};
///
/// let options = DiffOptions::default()
///     .with_strategy(Strategy::Scan)
///     .with_lookahead(50);
/// assert_eq!(options.lookahead, 50);
/// assert!(options.trim_affixes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiffOptions {
    pub strategy: Strategy,
    /// Largest `(old offset + new offset)` considered for a sync point.
    pub lookahead: usize,
    /// Consecutive equal elements required for a sync point that is not at
    /// the end of both sequences. Values below 1 count as 1.
    pub min_sync_run: usize,
    /// Strip the common prefix and suffix before searching.
    pub trim_affixes: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            strategy: Strategy::default(),
            lookahead: DEFAULT_LOOKAHEAD,
            min_sync_run: DEFAULT_MIN_SYNC_RUN,
            trim_affixes: true,
        }
    }
}

impl DiffOptions {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn with_min_sync_run(mut self, min_sync_run: usize) -> Self {
        self.min_sync_run = min_sync_run;
        self
    }

    pub fn with_trim_affixes(mut self, trim_affixes: bool) -> Self {
        self.trim_affixes = trim_affixes;
        self
    }

    pub(crate) fn sync_run(&self) -> usize {
        self.min_sync_run.max(1)
    }
}
