use crate::equality::Equality;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Element hash -> ascending positions in the indexed sequence.
pub(crate) struct CandidateIndex {
    positions: FxHashMap<u64, SmallVec<[usize; 4]>>,
}

impl CandidateIndex {
    pub(crate) fn build<T, E: Equality<T> + ?Sized>(seq: &[T], eq: &E) -> Self {
        let mut positions: FxHashMap<u64, SmallVec<[usize; 4]>> = FxHashMap::default();
        for (i, el) in seq.iter().enumerate() {
            positions.entry(eq.hash(el)).or_default().push(i);
        }
        CandidateIndex { positions }
    }

    /// Positions sharing `value`'s hash, starting at `from`.
    /// Hash collisions are possible; callers still compare with `eq`.
    pub(crate) fn candidates<T, E: Equality<T> + ?Sized>(
        &self,
        value: &T,
        eq: &E,
        from: usize,
    ) -> &[usize] {
        match self.positions.get(&eq.hash(value)) {
            Some(found) => {
                let start = found.partition_point(|&i| i < from);
                &found[start..]
            }
            None => &[],
        }
    }

    #[cfg(test)]
    fn buckets(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::{ByPredicate, ByValue};

    #[test]
    fn test_positions_ascending() {
        let seq = vec!["a", "b", "a", "c", "a"];
        let index = CandidateIndex::build(&seq, &ByValue);
        assert_eq!(index.candidates(&"a", &ByValue, 0), &[0, 2, 4]);
        assert_eq!(index.candidates(&"a", &ByValue, 1), &[2, 4]);
        assert_eq!(index.candidates(&"a", &ByValue, 5), &[] as &[usize]);
        assert_eq!(index.buckets(), 3);
    }

    #[test]
    fn test_missing_value() {
        let seq = vec![1, 2, 3];
        let index = CandidateIndex::build(&seq, &ByValue);
        assert!(index.candidates(&9, &ByValue, 0).is_empty());
    }

    #[test]
    fn test_predicate_shares_one_bucket() {
        let eq = ByPredicate::new(|a: &i32, b: &i32| a == b);
        let seq = vec![5, 6, 7];
        let index = CandidateIndex::build(&seq, &eq);
        assert_eq!(index.buckets(), 1);
        assert_eq!(index.candidates(&42, &eq, 1), &[1, 2]);
    }
}
