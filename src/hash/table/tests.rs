#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::record::{Person, Record};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

/// A person that counts how many times people are dropped.
#[derive(Debug)]
struct Tracked {
    record: Record,
    _drop: CountedDrop,
}

impl Tracked {
    fn new(counter: &Rc<Cell<usize>>, first_name: &str, last_name: &str, id: i32) -> Tracked {
        Tracked {
            record: Record::new(first_name, last_name, id),
            _drop: CountedDrop::new(counter),
        }
    }
}

impl Person for Tracked {
    fn first_name(&self) -> &str {
        self.record.first_name()
    }

    fn last_name(&self) -> &str {
        self.record.last_name()
    }

    fn id(&self) -> i32 {
        self.record.id()
    }
}

fn ids<'a>(matches: impl Iterator<Item = &'a Record>) -> Vec<i32> {
    matches.map(Record::id).collect()
}

fn scenario_table() -> ChainedHashTable {
    let mut table = ChainedHashTable::new();
    table.insert(Record::new("john", "smith", 11111));
    table.insert(Record::new("jane", "smith", 22222));
    table.insert(Record::new("john", "doe", 33333));
    table
}

#[test]
fn test_scenario() {
    let mut table = scenario_table();
    assert_eq!(table.cap(), 7);
    assert_eq!(table.len(), 3);

    assert_eq!(
        ids(table.lookup("john", "smith")),
        [11111],
        "Lookup should only match people with both names equal."
    );

    assert!(!table.remove("john", "doe", 99999), "Removing with the wrong id should fail.");
    assert_eq!(table.len(), 3);

    assert!(table.remove("john", "doe", 33333), "Removing with the right id should succeed.");
    assert_eq!(table.lookup("john", "doe").count(), 0);
    assert_eq!(table.len(), 2);

    assert_eq!(
        table.dump().identities().count(),
        2,
        "The dump should agree with the table's length."
    );
    table.verify_invariants();
}

#[test]
fn test_bucket_placement() {
    let table = scenario_table();

    assert_eq!(table.bucket_index("john", "smith"), 2);
    assert_eq!(table.bucket_index("jane", "smith"), 6);
    assert_eq!(table.bucket_index("john", "doe"), 1);
    assert_eq!(table.bucket_index("JOHN", "Doe"), 1, "Bucket placement should ignore case.");

    assert_eq!(table.bucket(2).map(|chain| chain.len()), Some(1));
    assert_eq!(table.bucket(0).map(|chain| chain.len()), Some(0));
    assert!(table.bucket(7).is_none(), "There are only 7 buckets.");
}

#[test]
fn test_len_counts_inserts() {
    let mut table = ChainedHashTable::new();

    for i in 0..50 {
        table.insert(Record::new(format!("name{}", i % 7), "same", i));
        assert_eq!(table.len(), i as usize + 1, "Every insert should add an entry.");
    }

    assert!(!table.is_empty());
    assert_eq!(table.iter().count(), 50);
    table.verify_invariants();
}

#[test]
fn test_lookup_ignores_case() {
    let mut table = ChainedHashTable::new();
    table.insert(Record::new("Ada", "Lovelace", 1815));

    assert_eq!(ids(table.lookup("ada", "lovelace")), [1815]);
    assert_eq!(ids(table.lookup("ADA", "LoveLace")), [1815]);
    assert!(table.contains("aDa", "LOVELACE"));
    assert!(!table.contains("ada", "byron"));

    let found = table.lookup("ada", "lovelace").next().map(Record::first_name);
    assert_eq!(found, Some("Ada"), "The stored casing shouldn't be changed by a lookup.");
}

#[test]
fn test_lookup_finds_every_duplicate() {
    let mut table = ChainedHashTable::with_cap(1);
    table.insert(Record::new("alan", "turing", 3));
    table.insert(Record::new("alan", "kay", 4));
    table.insert(Record::new("Alan", "Turing", 1));
    table.insert(Record::new("zoe", "turing", 5));
    table.insert(Record::new("alan", "turing", 2));
    table.insert(Record::new("abe", "turing", 6));

    assert_eq!(
        ids(table.lookup("alan", "turing")),
        [3, 1, 2],
        "Lookup should return every match, in chain order."
    );
    assert_eq!(ids(table.lookup("zoe", "turing")), [5]);
    assert_eq!(ids(table.lookup("abe", "turing")), [6]);
    assert_eq!(table.lookup("bob", "turing").count(), 0);
}

#[test]
fn test_chain_order() {
    let mut table = ChainedHashTable::with_cap(1);
    for (first_name, id) in [("mallory", 1), ("Bob", 2), ("alice", 3), ("trent", 4), ("bob", 5)] {
        table.insert(Record::new(first_name, "x", id));
    }

    let chain = table.bucket(0).expect("a table with capacity 1 has bucket 0");
    assert_eq!(
        chain.iter().map(Record::id).collect::<Vec<_>>(),
        [3, 2, 5, 1, 4],
        "The chain should be sorted by first name ignoring case, with ties in insertion order."
    );
    table.verify_invariants();
}

#[test]
fn test_remove_head_middle_tail() {
    let mut table = ChainedHashTable::with_cap(1);
    for (first_name, id) in [("amy", 1), ("ben", 2), ("cat", 3), ("dan", 4)] {
        table.insert(Record::new(first_name, "lee", id));
    }

    assert!(table.remove("amy", "lee", 1), "Should remove the head.");
    assert!(table.remove("cat", "lee", 3), "Should remove a middle node.");
    assert!(table.remove("dan", "lee", 4), "Should remove the tail.");
    assert_eq!(table.iter().map(Record::id).collect::<Vec<_>>(), [2]);

    assert!(table.remove("BEN", "Lee", 2), "Removal should ignore the case of names.");
    assert!(table.is_empty());
    assert!(!table.remove("ben", "lee", 2), "Removing from an empty bucket should fail.");
    table.verify_invariants();
}

fn snapshot(table: &ChainedHashTable) -> Vec<(usize, String, String, i32)> {
    table
        .dump()
        .identities()
        .map(|(index, first, last, id)| (index, first.to_owned(), last.to_owned(), id))
        .collect()
}

#[test]
fn test_remove_wrong_id_is_unchanged() {
    let mut table = ChainedHashTable::with_cap(1);
    table.insert(Record::new("sam", "hill", 10));
    table.insert(Record::new("sam", "hill", 20));
    table.insert(Record::new("ann", "hill", 30));

    let before = snapshot(&table);
    assert!(!table.remove("sam", "hill", 30), "The id belongs to someone else.");
    assert!(!table.remove("sam", "hull", 10), "The last name doesn't match.");
    assert!(!table.remove("sal", "hill", 10), "The first name doesn't match.");

    assert_eq!(
        snapshot(&table),
        before,
        "A failed removal shouldn't change the chain."
    );
    assert_eq!(table.len(), 3);
}

#[test]
fn test_remove_keeps_other_duplicates() {
    let mut table = ChainedHashTable::new();
    for id in [1, 2, 3] {
        table.insert(Record::new("pat", "kim", id));
    }

    assert!(table.remove("pat", "kim", 2));
    assert_eq!(table.len(), 2);
    assert_eq!(
        ids(table.lookup("pat", "kim")),
        [1, 3],
        "Only the person with the matching id should be removed."
    );
}

#[test]
fn test_remove_searches_whole_name_run() {
    let mut table = ChainedHashTable::with_cap(1);
    table.insert(Record::new("ann", "x", 1));
    table.insert(Record::new("john", "doe", 2));
    table.insert(Record::new("john", "roe", 3));
    table.insert(Record::new("john", "smith", 4));
    table.insert(Record::new("kim", "x", 5));

    assert!(
        table.remove("john", "smith", 4),
        "Everyone sharing the first name should be considered, not just the first of them."
    );
    assert_eq!(table.iter().map(Record::id).collect::<Vec<_>>(), [1, 2, 3, 5]);
    assert!(!table.remove("john", "smith", 4));
}

#[test]
fn test_identical_identities() {
    let mut table = ChainedHashTable::new();
    table.insert(Record::new("lee", "park", 7));
    table.insert(Record::new("Lee", "Park", 7));

    assert_eq!(table.lookup("lee", "park").count(), 2, "Duplicates should both be kept.");

    let taken = table.take("lee", "park", 7).expect("someone should be removed");
    assert_eq!(taken.first_name(), "lee", "The first entry in the chain should go first.");
    assert_eq!(ids(table.lookup("lee", "park")), [7]);
}

#[test]
fn test_interleaved_operations() {
    const FIRST_NAMES: [&str; 8] = ["alice", "Bob", "carol", "DAVE", "eve", "Frank", "grace", "bob"];
    const LAST_NAMES: [&str; 3] = ["smith", "Jones", "doe"];

    let mut table = ChainedHashTable::with_cap(5);
    let mut present = Vec::new();
    let mut state = 0x2545_f491_u64;

    for id in 0..600 {
        // A small LCG keeps the sequence deterministic.
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        let roll = (state >> 33) as usize;

        if roll % 3 == 0 && !present.is_empty() {
            let (first_name, last_name, id): (&str, &str, i32) = present.swap_remove(roll % present.len());
            assert!(
                table.remove(&first_name.to_uppercase(), last_name, id),
                "Removing a present entry should succeed."
            );
        } else {
            let first_name = FIRST_NAMES[roll % FIRST_NAMES.len()];
            let last_name = LAST_NAMES[(roll / 8) % LAST_NAMES.len()];
            table.insert(Record::new(first_name, last_name, id));
            present.push((first_name, last_name, id));
        }

        assert_eq!(table.len(), present.len());
        table.verify_invariants();
    }

    for (first_name, last_name, id) in &present {
        assert!(
            table.lookup(first_name, last_name).any(|r| r.id() == *id),
            "Every remaining entry should be found by lookup."
        );
    }
}

#[test]
fn test_destroy_drops_each_once() {
    let counter = Rc::new(Cell::new(0));

    let mut table = ChainedHashTable::with_cap(3);
    for i in 0..20 {
        table.insert(Tracked::new(&counter, "same", &format!("family{}", i % 4), i));
    }
    assert!(table.remove("same", "family1", 1));
    assert_eq!(counter.get(), 1, "A removed entry should be dropped.");

    assert_eq!(table.destroy(), 19, "Destroying should visit every remaining entry.");
    assert_eq!(counter.get(), 20, "Every entry should be dropped exactly once.");
}

#[test]
fn test_drop_and_take() {
    let counter = Rc::new(Cell::new(0));

    let mut table = ChainedHashTable::new();
    table.insert(Tracked::new(&counter, "ann", "lee", 1));
    table.insert(Tracked::new(&counter, "bo", "lee", 2));

    let taken = table.take("ann", "lee", 1).expect("ann should be present");
    assert_eq!(counter.get(), 0, "A taken entry should be handed out, not dropped.");
    drop(taken);
    assert_eq!(counter.get(), 1);

    drop(table);
    assert_eq!(counter.get(), 2, "Dropping the table should drop the remaining entries.");
}

#[test]
fn test_zero_capacity() {
    assert_eq!(ChainedHashTable::<Record>::try_with_cap(0).err(), Some(ZeroCapacity));
    assert_eq!(ChainedHashTable::<Record>::try_with_cap(3).map(|t| t.cap()).ok(), Some(3));
    assert_panics!(ChainedHashTable::<Record>::with_cap(0), "A capacity of 0 should panic.");
}

#[test]
fn test_dump_display() {
    let mut table = ChainedHashTable::with_cap(3);
    table.insert(Record::new("john", "smith", 11111));
    table.insert(Record::new("jane", "smith", 22222));
    table.insert(Record::new("john", "doe", 33333));

    assert_eq!(
        table.dump().to_string(),
        "[0] jane smith (22222)\n[1] -\n[2] john smith (11111) -> john doe (33333)\n"
    );
    assert_eq!(table.to_string(), table.dump().to_string());

    let buckets = table.dump().into_iter().map(|(i, chain)| (i, chain.len())).collect::<Vec<_>>();
    assert_eq!(buckets, [(0, 1), (1, 0), (2, 2)], "Buckets should be listed in index order.");
}

#[test]
fn test_iterators() {
    let table: ChainedHashTable = [
        Record::new("b", "b", 2),
        Record::new("a", "a", 1),
        Record::new("c", "c", 3),
    ].into_iter().collect();

    assert_eq!(table.iter().len(), 3);

    let mut by_ref = table.iter().map(Record::id).collect::<Vec<_>>();
    let mut owned = table.into_iter().map(|r| r.id()).collect::<Vec<_>>();
    by_ref.sort_unstable();
    owned.sort_unstable();

    assert_eq!(by_ref, [1, 2, 3]);
    assert_eq!(owned, by_ref, "Owned and borrowed iteration should see the same entries.");
}
