//! Element equality used by every diff entry point.
//!
//! The matcher only ever asks two questions about elements: are these two
//! equal, and which bucket does this one hash into. Both answers come from an
//! [`Equality`] implementation, so the candidate index and the comparisons
//! can never disagree.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Decides whether two elements are the "same element".
///
/// Implementations must keep `hash` consistent with `eq`: two elements that
/// compare equal must produce the same hash. Returning a constant hash is
/// always allowed and only costs lookup speed.
pub trait Equality<T: ?Sized> {
    fn eq(&self, a: &T, b: &T) -> bool;
    fn hash(&self, value: &T) -> u64;
}

/// Plain value equality through `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByValue;

impl<T: Eq + Hash + ?Sized> Equality<T> for ByValue {
    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash(&self, value: &T) -> u64 {
        fx_hash(value)
    }
}

/// Compares elements by a derived key.
///
/// ```
/// use seqdelta::{diff_with, ByKey, DiffOptions};
///
/// let old = vec!["Apple", "pear"];
/// let new = vec!["apple", "Pear", "fig"];
/// let eq = ByKey::new(|s: &&str| s.to_lowercase());
/// let ops = diff_with(&old, &new, &eq, &DiffOptions::default());
/// assert_eq!(ops.len(), 1);
/// assert_eq!(ops[0].additions, vec!["fig"]);
/// ```
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new(key: F) -> Self {
        ByKey {
            key,
            _key: PhantomData,
        }
    }
}

impl<T: ?Sized, K: Eq + Hash, F: Fn(&T) -> K> Equality<T> for ByKey<F, K> {
    fn eq(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }

    fn hash(&self, value: &T) -> u64 {
        fx_hash(&(self.key)(value))
    }
}

/// An arbitrary equality predicate.
///
/// There is no hash to go with it, so every element lands in one bucket and
/// the candidate search degrades to walking the lookahead window.
#[derive(Debug, Clone, Copy)]
pub struct ByPredicate<F>(F);

impl<F> ByPredicate<F> {
    pub fn new(predicate: F) -> Self {
        ByPredicate(predicate)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Equality<T> for ByPredicate<F> {
    fn eq(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }

    fn hash(&self, _: &T) -> u64 {
        0
    }
}

impl<T: ?Sized, E: Equality<T> + ?Sized> Equality<T> for &E {
    fn eq(&self, a: &T, b: &T) -> bool {
        (**self).eq(a, b)
    }

    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }
}

fn fx_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}
