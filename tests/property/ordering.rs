//! Property-based tests for entry ordering guarantees

use blogpack::scan::{exercise_number, sort_entries, Entry, EntryKind};
use proptest::prelude::*;
use std::path::PathBuf;

fn entry(label: String) -> Entry {
    Entry {
        path: PathBuf::from(&label),
        label,
        kind: EntryKind::File,
    }
}

/// Sorted entries with parsable labels are ascending by extracted number.
#[test]
fn test_sorted_numbers_ascend_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(0u64..10_000, 0..50), |numbers| {
            let mut entries: Vec<Entry> = numbers
                .iter()
                .map(|n| entry(format!("Ex{}", n)))
                .collect();

            sort_entries(&mut entries);

            let keys: Vec<u64> = entries
                .iter()
                .map(|e| exercise_number(&e.label).unwrap())
                .collect();
            assert!(keys.windows(2).all(|w| w[0] <= w[1]));

            Ok(())
        })
        .unwrap();
}

/// Unparsable labels always land after every parsable one, regardless of
/// where they start out.
#[test]
fn test_unparsable_labels_sort_last_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                prop::collection::vec(0u64..1_000, 1..20),
                prop::collection::vec("Ex[A-Za-z]{1,8}", 1..10),
            ),
            |(numbers, words)| {
                let mut entries: Vec<Entry> = words
                    .iter()
                    .cloned()
                    .map(entry)
                    .chain(numbers.iter().map(|n| entry(format!("Ex{}", n))))
                    .collect();

                sort_entries(&mut entries);

                let first_unparsable = entries
                    .iter()
                    .position(|e| exercise_number(&e.label).is_none())
                    .unwrap();
                assert!(entries[first_unparsable..]
                    .iter()
                    .all(|e| exercise_number(&e.label).is_none()));
                assert!(entries[..first_unparsable]
                    .iter()
                    .all(|e| exercise_number(&e.label).is_some()));

                Ok(())
            },
        )
        .unwrap();
}
