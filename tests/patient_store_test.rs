/*!
 * Patient Store Tests
 * Hashing, probing, tombstones and capacity behavior
 */

use clinic_records::patients::{PatientRecord, PatientStore};
use clinic_records::RecordError;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeSet;

#[test]
fn test_single_patient_lifecycle() {
    let mut store = PatientStore::new(100);
    let alice = PatientRecord::new(5, "Alice", 30, "Flu", "none");

    assert_eq!(store.home_index(5), Some(5));
    assert_eq!(store.insert(alice.clone()).unwrap(), 5);
    assert_eq!(store.list(), vec![&alice]);

    assert_eq!(store.remove(5).unwrap(), alice);
    assert_eq!(store.remove(5), Err(RecordError::NotFound(5)));
    assert!(store.list().is_empty());
}

#[test]
fn test_colliding_ids() {
    let mut store = PatientStore::new(100);
    store
        .insert(PatientRecord::new(5, "Alice", 30, "Flu", "none"))
        .unwrap();
    assert_eq!(
        store
            .insert(PatientRecord::new(105, "Bob", 52, "Gout", "2023"))
            .unwrap(),
        6
    );

    let ids: Vec<_> = store.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![5, 105]);

    store.remove(105).unwrap();
    assert_eq!(store.get(5).map(|p| p.name.as_str()), Some("Alice"));
    assert_eq!(store.slot_of(5), Some(5));
}

#[test]
fn test_remove_bridge_then_reinsert() {
    let mut store = PatientStore::new(8);
    for id in [0, 8, 16] {
        store
            .insert(PatientRecord::new(id, "p", 1, "d", "v"))
            .unwrap();
    }

    store.remove(8).unwrap();
    assert!(store.contains(16));

    // The tombstone at slot 1 is reused, 16 stays reachable beyond it
    assert_eq!(
        store
            .insert(PatientRecord::new(24, "q", 2, "d", "v"))
            .unwrap(),
        1
    );
    assert_eq!(store.slot_of(16), Some(2));
    assert_eq!(store.slot_of(24), Some(1));
}

#[test]
fn test_store_full_leaves_store_unchanged() {
    let mut store = PatientStore::new(4);
    for id in 10..14 {
        store
            .insert(PatientRecord::new(id, "p", 1, "d", "v"))
            .unwrap();
    }
    let before: Vec<_> = store.iter().cloned().collect();

    assert_eq!(
        store.insert(PatientRecord::new(99, "x", 1, "d", "v")),
        Err(RecordError::StoreFull { capacity: 4 })
    );
    let after: Vec<_> = store.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_oversized_fields_are_truncated() {
    let mut store = PatientStore::new(10);
    let long = "x".repeat(500);
    store
        .insert(PatientRecord::new(1, &long, 1, &long, &long))
        .unwrap();

    let record = store.get(1).unwrap();
    assert_eq!(record.name.len(), 49);
    assert_eq!(record.disease.len(), 49);
    assert_eq!(record.visit_history.len(), 99);
}

fn record_strategy() -> impl Strategy<Value = PatientRecord> {
    (
        any::<u32>(),
        "[A-Za-z ]{1,20}",
        0i32..120,
        "[A-Za-z]{1,12}",
        "[a-z0-9 ]{0,30}",
    )
        .prop_map(|(id, name, age, disease, history)| {
            PatientRecord::new(id, name, age, disease, history)
        })
}

proptest! {
    #[test]
    fn prop_distinct_inserts_are_listed(
        capacity in 1usize..64,
        records in prop::collection::vec(record_strategy(), 0..64),
    ) {
        let mut seen = BTreeSet::new();
        let records: Vec<_> = records
            .into_iter()
            .filter(|r| seen.insert(r.id))
            .take(capacity)
            .collect();

        let mut store = PatientStore::new(capacity);
        for record in &records {
            store.insert(record.clone()).unwrap();
        }

        let mut listed: Vec<_> = store.iter().cloned().collect();
        let mut expected = records.clone();
        listed.sort_by_key(|r| r.id);
        expected.sort_by_key(|r| r.id);
        prop_assert_eq!(listed, expected);

        for record in &records {
            prop_assert_eq!(store.get(record.id), Some(record));
        }
    }

    #[test]
    fn prop_remove_then_reinsert_is_reachable(
        capacity in 1usize..32,
        ids in prop::collection::btree_set(any::<u32>(), 1..32),
        pick in any::<prop::sample::Index>(),
    ) {
        let ids: Vec<_> = ids.into_iter().take(capacity).collect();
        let mut store = PatientStore::new(capacity);
        for &id in &ids {
            store.insert(PatientRecord::new(id, "p", 1, "d", "v")).unwrap();
        }

        let victim = ids[pick.index(ids.len())];
        store.remove(victim).unwrap();
        for &id in ids.iter().filter(|&&id| id != victim) {
            prop_assert!(store.contains(id));
        }

        let slot = store.insert(PatientRecord::new(victim, "again", 2, "d", "v")).unwrap();
        prop_assert_eq!(store.slot_of(victim), Some(slot));
        prop_assert_eq!(store.len(), ids.len());
    }

    #[test]
    fn prop_len_matches_list(
        ops in prop::collection::vec((any::<bool>(), 0u32..40), 0..200),
    ) {
        let mut store = PatientStore::new(16);
        for (insert, id) in ops {
            if insert {
                let _ = store.insert(PatientRecord::new(id, "p", 1, "d", "v"));
            } else {
                let _ = store.remove(id);
            }
            prop_assert_eq!(store.len(), store.list().len());
            prop_assert!(store.len() <= store.capacity());
        }
    }
}
