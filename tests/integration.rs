use proptest::prelude::*;
use seqdelta::{
    apply_in_place, apply_patch, diff, diff_by, diff_by_key, diff_lines, diff_with, ByValue,
    DiffOptions, Operation,
};
use std::thread;

fn lowercase(v: &[String]) -> Vec<String> {
    v.iter().map(|s| s.to_lowercase()).collect()
}

fn strategies() -> impl Strategy<Value = seqdelta::Strategy> {
    prop_oneof![
        Just(seqdelta::Strategy::Indexed),
        Just(seqdelta::Strategy::Scan),
        Just(seqdelta::Strategy::Affix),
        Just(seqdelta::Strategy::Exact),
    ]
}

proptest! {
    #[test]
    fn test_round_trip_default(
        old in prop::collection::vec(any::<i32>(), 0..60),
        new in prop::collection::vec(any::<i32>(), 0..60),
    ) {
        let ops = diff(&old, &new);
        prop_assert_eq!(apply_patch(&old, &ops), Ok(new));
    }

    #[test]
    fn test_round_trip_every_option(
        old in prop::collection::vec(0u8..6, 0..80),
        new in prop::collection::vec(0u8..6, 0..80),
        strategy in strategies(),
        lookahead in 0usize..40,
        min_sync_run in 0usize..4,
        trim in any::<bool>(),
    ) {
        let options = DiffOptions::default()
            .with_strategy(strategy)
            .with_lookahead(lookahead)
            .with_min_sync_run(min_sync_run)
            .with_trim_affixes(trim);
        let ops = diff_with(&old, &new, &ByValue, &options);
        prop_assert!(ops.windows(2).all(|w| w[0].end() <= w[1].position));
        prop_assert_eq!(apply_patch(&old, &ops), Ok(new));
    }

    #[test]
    fn test_round_trip_edited_copy(
        old in prop::collection::vec("[a-e]{1,3}", 0..120),
        edits in prop::collection::vec((any::<prop::sample::Index>(), 0usize..4, "[a-z]{1,3}"), 0..8),
    ) {
        // mostly-similar inputs exercise the sync point search
        let mut new = old.clone();
        for (at, removed, word) in edits {
            let position = if new.is_empty() { 0 } else { at.index(new.len()) };
            let end = (position + removed).min(new.len());
            new.splice(position..end, [word]);
        }
        let ops = diff(&old, &new);
        prop_assert_eq!(apply_patch(&old, &ops), Ok(new));
    }

    #[test]
    fn test_round_trip_by_key(
        old in prop::collection::vec("[a-cA-C]", 0..40),
        new in prop::collection::vec("[a-cA-C]", 0..40),
    ) {
        // elements equal under the key can differ in case, so compare keys
        let ops = diff_by_key(&old, &new, |s| s.to_lowercase());
        let patched = apply_patch(&old, &ops).unwrap();
        prop_assert_eq!(lowercase(&patched), lowercase(&new));
    }

    #[test]
    fn test_diff_lines_rebuilds_text(old in "[ab\n]{0,40}", new in "[ab\n]{0,40}") {
        let old_lines: Vec<String> = old.split('\n').map(ToString::to_string).collect();
        let ops = diff_lines(&old, &new);
        let patched = apply_patch(&old_lines, &ops).unwrap();
        prop_assert_eq!(patched.join("\n"), new);
    }
}

#[test]
fn test_concrete_scenarios() {
    let old = vec!["a", "b", "c", "d"];
    let new = vec!["a", "x", "c", "d"];
    let ops = diff(&old, &new);
    assert_eq!(ops, vec![Operation::new(1, 1, vec!["x"])]);
    assert_eq!(apply_patch(&old, &ops), Ok(new));

    assert_eq!(
        diff(&["a", "c"], &["a", "b", "c"]),
        vec![Operation::new(1, 0, vec!["b"])]
    );
    assert_eq!(
        diff(&["a", "b", "c"], &["a", "c"]),
        vec![Operation::new(1, 1, vec![])]
    );
}

#[test]
fn test_empty_edges() {
    let some = vec![1, 2, 3];
    let none: Vec<i32> = vec![];
    assert_eq!(diff(&none, &some), vec![Operation::new(0, 0, some.clone())]);
    assert_eq!(diff(&some, &none), vec![Operation::new(0, 3, vec![])]);
    assert_eq!(diff(&none, &none), vec![]);
    assert_eq!(apply_patch(&some, &[]), Ok(some.clone()));
}

#[test]
fn test_large_shift_stress() {
    // a rotation by far more than the lookahead: nothing realigns nearby
    let old: Vec<u32> = (0..5_000).collect();
    let mut new = old.clone();
    new.rotate_left(2_500);
    let ops = diff(&old, &new);
    assert!(!ops.is_empty());
    assert_eq!(apply_patch(&old, &ops), Ok(new));
}

#[test]
fn test_scattered_shuffle_stress() {
    // deterministic LCG shuffle
    let old: Vec<u32> = (0..3_000).collect();
    let mut new = old.clone();
    let mut state = 0x2545_f491_u64;
    for i in (1..new.len()).rev() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let j = (state >> 33) as usize % (i + 1);
        new.swap(i, j);
    }
    for strategy in [seqdelta::Strategy::Indexed, seqdelta::Strategy::Scan] {
        let options = DiffOptions::default().with_strategy(strategy);
        let ops = diff_with(&old, &new, &ByValue, &options);
        assert_eq!(apply_patch(&old, &ops), Ok(new.clone()));
    }
}

#[test]
fn test_sparse_edits_stay_local() {
    let old: Vec<u32> = (0..1_000).collect();
    let mut new = old.clone();
    new[100] = 9_999;
    new.remove(500);
    new.insert(900, 7_777);
    let ops = diff(&old, &new);
    assert_eq!(
        ops,
        vec![
            Operation::new(100, 1, vec![9_999]),
            Operation::new(500, 1, vec![]),
            Operation::new(901, 0, vec![7_777]),
        ]
    );
    assert_eq!(apply_patch(&old, &ops), Ok(new));
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..4u32)
        .map(|seed| {
            thread::spawn(move || {
                let old: Vec<u32> = (0..500).map(|i| (i * 7 + seed) % 50).collect();
                let new: Vec<u32> = (0..500).map(|i| (i * 11 + seed) % 50).collect();
                let ops = diff(&old, &new);
                apply_patch(&old, &ops) == Ok(new)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_custom_predicate() {
    let old = vec![" alpha", "beta ", "gamma"];
    let new = vec!["alpha", "beta", "delta", "gamma"];
    let ops = diff_by(&old, &new, |a, b| a.trim() == b.trim());
    assert_eq!(ops, vec![Operation::new(2, 0, vec!["delta"])]);
}

#[test]
fn test_in_place() {
    let old = vec!['h', 'e', 'l', 'l', 'o'];
    let new = vec!['j', 'e', 'l', 'l', 'y'];
    let mut target = old.clone();
    apply_in_place(&mut target, diff(&old, &new)).unwrap();
    assert_eq!(target, new);
}

#[test]
fn test_rejected_patch_names_operation() {
    let old = vec![1, 2, 3];
    let ops = vec![Operation::new(1, 1, vec![]), Operation::new(0, 0, vec![9])];
    let err = apply_patch(&old, &ops).unwrap_err();
    assert_eq!(err.index(), 1);
    assert!(err.to_string().starts_with("operation 1"));
}

#[cfg(feature = "serde")]
#[test]
fn test_operations_serde() {
    let ops = diff(&["a", "b"], &["a", "c"]);
    let json = serde_json::to_string(&ops).unwrap();
    assert_eq!(json, r#"[{"position":1,"delete_count":1,"additions":["c"]}]"#);
    let back: Vec<Operation<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(apply_patch(&["a".to_string(), "b".to_string()], &back), Ok(vec!["a".to_string(), "c".to_string()]));
}
