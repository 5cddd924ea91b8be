//! Unit tests for `MappingOps` on `HashMap`, `BTreeMap` and `IndexMap`.

use fnops::prelude::*;
use rstest::rstest;
use std::collections::{BTreeMap, BTreeSet, HashMap};

fn inventory() -> BTreeMap<&'static str, i32> {
    BTreeMap::from([("bolts", 40), ("nails", 0), ("nuts", 12), ("screws", 0)])
}

// =============================================================================
// filter
// =============================================================================

#[rstest]
fn test_filter_keeps_shape_and_pairs() {
    let stocked = inventory().filter(|_, count| *count > 0);
    assert_eq!(stocked, BTreeMap::from([("bolts", 40), ("nuts", 12)]));
}

#[rstest]
fn test_filter_by_key() {
    let short_names = inventory().filter(|name, _| name.len() == 4);
    assert_eq!(short_names.keys().copied().collect::<Vec<_>>(), vec!["nuts"]);
}

#[rstest]
fn test_filter_none_match_is_empty() {
    assert!(inventory().filter(|_, count| *count < 0).is_empty());
}

#[rstest]
fn test_filter_receiver_untouched() {
    let mapping = inventory();
    let _ = mapping.filter(|_, _| false);
    assert_eq!(mapping, inventory());
}

#[rstest]
#[should_panic(expected = "no stock for nails")]
fn test_filter_predicate_panic_reaches_caller() {
    let _ = inventory().filter(|name, count| {
        assert!(*count > 0, "no stock for {name}");
        true
    });
}

// =============================================================================
// first
// =============================================================================

#[rstest]
fn test_first_reports_key_in_key_order() {
    assert_eq!(inventory().first(|_, count| *count == 0), Some(&"nails"));
}

#[rstest]
fn test_first_missing() {
    assert_eq!(inventory().first(|name, _| name.is_empty()), None);
}

#[rstest]
fn test_first_stops_after_match() {
    let mapping = inventory();
    let mut visited = Vec::new();
    let found = mapping.first(|name, _| {
        visited.push(*name);
        *name == "nails"
    });
    assert_eq!(found, Some(&"nails"));
    assert_eq!(visited, vec!["bolts", "nails"]);
}

// =============================================================================
// map / map_values
// =============================================================================

#[rstest]
fn test_map_produces_sequence_of_mapping_length() {
    let mapping = inventory();
    let labels = mapping.map(|name, count| (*count > 0).then(|| format!("{name}={count}")));
    assert_eq!(labels.len(), mapping.len());
    assert_eq!(
        labels,
        vec![
            Slot::Value(String::from("bolts=40")),
            Slot::Placeholder,
            Slot::Value(String::from("nuts=12")),
            Slot::Placeholder,
        ]
    );
}

#[rstest]
fn test_map_values_same_keys() {
    let mapping = inventory();
    let halves = mapping.map_values(|count| (*count > 0).then(|| count / 2));
    assert_eq!(
        halves.keys().collect::<BTreeSet<_>>(),
        mapping.keys().collect::<BTreeSet<_>>()
    );
    assert_eq!(halves["bolts"], Slot::Value(20));
    assert_eq!(halves["screws"], Slot::Placeholder);
}

#[rstest]
fn test_map_values_changes_value_type() {
    let mapping = HashMap::from([(1, "one"), (2, "three")]);
    let lengths = mapping.map_values(|text| Some(text.len()));
    assert_eq!(
        lengths,
        HashMap::from([(1, Slot::Value(3)), (2, Slot::Value(5))])
    );
}

// =============================================================================
// flat_map
// =============================================================================

#[rstest]
fn test_flat_map_mixed_contributions() {
    let mapping = inventory();
    let expanded = mapping.flat_map(|name, count| match *count {
        0 => Flatten::Nothing,
        1..=20 => Flatten::Single(name.to_string()),
        _ => Flatten::Splice(vec![name.to_string(), name.to_uppercase()]),
    });
    assert_eq!(expanded, vec!["bolts", "BOLTS", "nuts"]);
}

#[rstest]
fn test_flat_map_splicing_a_mapping_contributes_values() {
    let mapping = BTreeMap::from([("a", 1), ("b", 2)]);
    let spliced = mapping.flat_map(|key, value| {
        Flatten::Splice(BTreeMap::from([(format!("{key}-low"), *value), (format!("{key}-high"), value * 10)]))
    });
    // Each spliced BTreeMap yields its values in key order: "-high" < "-low".
    assert_eq!(spliced, vec![10, 1, 20, 2]);
}

// =============================================================================
// for_each / reduce
// =============================================================================

#[rstest]
fn test_for_each_sees_every_pair() {
    let mapping = inventory();
    let mut total = 0;
    let mut names = Vec::new();
    mapping.for_each(|name, count| {
        names.push(*name);
        total += count;
    });
    assert_eq!(total, 52);
    assert_eq!(names, vec!["bolts", "nails", "nuts", "screws"]);
}

#[rstest]
fn test_reduce_counts_empty_entries() {
    let empty_entries = inventory().reduce(0, |accumulator, _, count| {
        if *count == 0 { accumulator + 1 } else { accumulator }
    });
    assert_eq!(empty_entries, 2);
}

#[rstest]
fn test_reduce_on_empty_mapping_returns_initial() {
    let mapping: HashMap<String, i32> = HashMap::new();
    assert_eq!(mapping.reduce(-1, |accumulator, _, value| accumulator + value), -1);
}

// =============================================================================
// zip
// =============================================================================

#[rstest]
fn test_zip_pairs_entries_positionally() {
    let mapping = inventory();
    let zipped = mapping.zip(1..=2);
    assert_eq!(zipped, vec![((&"bolts", &40), 1), ((&"nails", &0), 2)]);
}

#[rstest]
fn test_zip_entries_with_longer_sequence() {
    let mapping = BTreeMap::from([('k', 'v')]);
    assert_eq!(mapping.zip("abc".chars()), vec![((&'k', &'v'), 'a')]);
}

// =============================================================================
// IndexMap
// =============================================================================

#[cfg(feature = "indexmap")]
mod index_map {
    use super::*;
    use indexmap::IndexMap;

    fn queue() -> IndexMap<&'static str, u32> {
        [("zeta", 3), ("alpha", 0), ("mu", 8)].into_iter().collect()
    }

    #[rstest]
    fn test_filter_keeps_insertion_order() {
        let busy = queue().filter(|_, depth| *depth > 0);
        assert_eq!(busy.keys().copied().collect::<Vec<_>>(), vec!["zeta", "mu"]);
    }

    #[rstest]
    fn test_first_in_insertion_order() {
        let mapping = queue();
        assert_eq!(MappingOps::first(&mapping, |_, _| true), Some(&"zeta"));
    }

    #[rstest]
    fn test_map_values_keeps_insertion_order() {
        let mapped = queue().map_values(|depth| depth.checked_sub(1));
        assert_eq!(
            mapped.into_iter().collect::<Vec<_>>(),
            vec![
                ("zeta", Slot::Value(2)),
                ("alpha", Slot::Placeholder),
                ("mu", Slot::Value(7)),
            ]
        );
    }

    #[rstest]
    fn test_reduce_in_insertion_order() {
        let order = queue().reduce(String::new(), |accumulator, name, _| accumulator + *name);
        assert_eq!(order, "zetaalphamu");
    }

    #[rstest]
    fn test_flat_map_splices_index_map_values() {
        let mapping = queue();
        let spliced: Vec<u32> = mapping.flat_map(|_, depth| {
            Flatten::Splice(IndexMap::from([("second", *depth + 1), ("first", *depth)]))
        });
        assert_eq!(spliced, vec![4, 3, 1, 0, 9, 8]);
    }
}
