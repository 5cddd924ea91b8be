//! Unit tests for `SetOps` on `HashSet`, `BTreeSet` and `IndexSet`.

use fnops::prelude::*;
use rstest::rstest;
use std::collections::{BTreeSet, HashSet};

// =============================================================================
// filter
// =============================================================================

#[rstest]
#[case(&[1, 2, 3, 4, 5], &[2, 4])]
#[case(&[1, 3], &[])]
#[case(&[], &[])]
fn test_btree_filter_even(#[case] input: &[i32], #[case] expected: &[i32]) {
    let set: BTreeSet<i32> = input.iter().copied().collect();
    let expected: BTreeSet<i32> = expected.iter().copied().collect();
    assert_eq!(set.filter(|n| n % 2 == 0), expected);
}

#[rstest]
fn test_hash_set_filter_is_a_set() {
    let set: HashSet<String> = ["ant", "bee", "cat"].into_iter().map(String::from).collect();
    let filtered = set.filter(|word| word.contains('a'));
    assert_eq!(filtered.len(), 2);
    assert!(filtered.contains("ant"));
    assert!(filtered.contains("cat"));
    assert_eq!(set.len(), 3);
}

#[rstest]
fn test_filter_is_subset() {
    let set: HashSet<u8> = (0..50).collect();
    let filtered = set.filter(|n| n % 7 == 3);
    assert!(filtered.is_subset(&set));
}

// =============================================================================
// first
// =============================================================================

#[rstest]
fn test_hash_set_first_matches_predicate() {
    let set = HashSet::from([10, 20, 30]);
    let found = set.first(|n| *n > 15);
    assert!(matches!(found, Some(n) if *n > 15));
}

#[rstest]
fn test_btree_first_is_smallest_match() {
    let set = BTreeSet::from([40, 10, 30, 20]);
    assert_eq!(SetOps::first(&set, |n| *n >= 20), Some(&20));
}

#[rstest]
fn test_hash_set_first_on_empty() {
    let set: HashSet<i32> = HashSet::new();
    assert_eq!(set.first(|_| true), None);
}

// =============================================================================
// map / flat_map
// =============================================================================

#[rstest]
fn test_map_produces_sequence_with_duplicates() {
    let set = BTreeSet::from([-2, -1, 1, 2]);
    let squares = set.map(|n| Some(n * n));
    assert_eq!(
        squares,
        vec![Slot::Value(4), Slot::Value(1), Slot::Value(1), Slot::Value(4)]
    );
}

#[rstest]
fn test_map_placeholder_count() {
    let set: HashSet<i32> = (1..=10).collect();
    let mapped = set.map(|n| (n % 3 == 0).then_some(*n));
    assert_eq!(mapped.len(), 10);
    assert_eq!(mapped.iter().filter(|slot| slot.is_placeholder()).count(), 7);
}

#[rstest]
fn test_flat_map_splicing_hash_set() {
    let set = BTreeSet::from([1, 2]);
    let mut spliced: Vec<i32> = set.flat_map(|n| Flatten::Splice(HashSet::from([*n, n * 100])));
    spliced.sort_unstable();
    assert_eq!(spliced, vec![1, 2, 100, 200]);
}

#[rstest]
fn test_flat_map_single_and_nothing() {
    let set = BTreeSet::from(['a', 'b', 'c']);
    let kept: Vec<char> = set.flat_map(|letter| {
        if *letter == 'b' {
            Flatten::Nothing
        } else {
            Flatten::<char>::Single(letter.to_ascii_uppercase())
        }
    });
    assert_eq!(kept, vec!['A', 'C']);
}

// =============================================================================
// for_each / reduce / zip
// =============================================================================

#[rstest]
fn test_for_each_visits_each_element_once() {
    let set: HashSet<i32> = (0..20).collect();
    let mut visited = Vec::new();
    set.for_each(|n| visited.push(*n));
    visited.sort_unstable();
    assert_eq!(visited, (0..20).collect::<Vec<_>>());
}

#[rstest]
fn test_reduce_sum_matches_iterator_sum() {
    let set: HashSet<i64> = (1..=100).collect();
    assert_eq!(set.reduce(0, |accumulator, n| accumulator + n), 5050);
}

#[rstest]
fn test_btree_zip_in_ascending_order() {
    let set = BTreeSet::from(["pear", "apple", "fig"]);
    assert_eq!(
        set.zip(1..),
        vec![(&"apple", 1), (&"fig", 2), (&"pear", 3)]
    );
}

// =============================================================================
// IndexSet
// =============================================================================

#[cfg(feature = "indexmap")]
mod index_set {
    use super::*;
    use indexmap::IndexSet;

    fn tags() -> IndexSet<&'static str> {
        ["urgent", "backend", "bug", "ui"].into_iter().collect()
    }

    #[rstest]
    fn test_first_in_insertion_order() {
        let set = tags();
        assert_eq!(SetOps::first(&set, |tag| tag.len() <= 3), Some(&"bug"));
    }

    #[rstest]
    fn test_map_in_insertion_order() {
        let lengths = tags().map(|tag| Some(tag.len()));
        assert_eq!(
            lengths,
            vec![Slot::Value(6), Slot::Value(7), Slot::Value(3), Slot::Value(2)]
        );
    }

    #[rstest]
    fn test_filter_preserves_relative_order() {
        let filtered = tags().filter(|tag| *tag != "backend");
        assert_eq!(filtered.into_iter().collect::<Vec<_>>(), vec!["urgent", "bug", "ui"]);
    }

    #[rstest]
    fn test_flat_map_splices_index_set_in_order() {
        let set: IndexSet<i32> = [2, 1].into_iter().collect();
        let spread: Vec<i32> = set.flat_map(|n| Flatten::Splice(IndexSet::from([*n * 10, *n])));
        assert_eq!(spread, vec![20, 2, 10, 1]);
    }
}
