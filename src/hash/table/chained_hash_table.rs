use std::alloc;
use std::fmt::{self, Debug, Display, Formatter};
use std::num::NonZero;

use log::{debug, trace};

use super::{Dump, Iter, Matches};
use crate::config::DEFAULT_CAP;
use crate::hash::digest::{self, compare_names, names_eq};
use crate::linked::Chain;
use crate::record::{Person, Record};
use crate::util::error::{AllocFailed, ZeroCapacity};

/// A hash table of [`Person`]s which resolves collisions by separate chaining.
///
/// Each bucket holds a [`Chain`] that is kept sorted by first name, ignoring ASCII case. People
/// are identified by their (case-insensitive) first and last name, which is all that is hashed.
/// Names don't need to be unique: people who share a name are told apart by their id, which is
/// also why inserting never replaces an existing entry.
///
/// The number of buckets is fixed when the table is created. The table never grows, so chains
/// get longer as more people are inserted.
///
/// It is a logic error for a person's names to change while they are held by the table. [`Record`]
/// prevents this by not exposing its names mutably and the table never hands out mutable access
/// to its entries.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of people in the table.
/// - `c`: The length of the chain that a name hashes to, `n / cap` on average.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)` |
/// | `lookup` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `destroy` | `O(n + cap)` |
pub struct ChainedHashTable<P: Person = Record> {
    pub(crate) buckets: Box<[Chain<P>]>,
    pub(crate) cap: NonZero<usize>,
    pub(crate) len: usize,
}

impl<P: Person> ChainedHashTable<P> {
    /// Creates a new, empty table with the default capacity of
    /// [`DEFAULT_CAP`](crate::config::DEFAULT_CAP) buckets.
    pub fn new() -> ChainedHashTable<P> {
        ChainedHashTable::with_nonzero_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty table with `cap` buckets.
    ///
    /// # Panics
    /// Panics if `cap` is 0, because no bucket could be selected for any name.
    pub fn with_cap(cap: usize) -> ChainedHashTable<P> {
        match ChainedHashTable::try_with_cap(cap) {
            Ok(table) => table,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a new, empty table with `cap` buckets, or returns an error if `cap` is 0.
    pub fn try_with_cap(cap: usize) -> Result<ChainedHashTable<P>, ZeroCapacity> {
        NonZero::new(cap)
            .map(ChainedHashTable::with_nonzero_cap)
            .ok_or(ZeroCapacity)
    }

    /// Creates a new, empty table with `cap` buckets.
    pub fn with_nonzero_cap(cap: NonZero<usize>) -> ChainedHashTable<P> {
        ChainedHashTable {
            buckets: (0..cap.get()).map(|_| Chain::new()).collect(),
            cap,
            len: 0,
        }
    }

    /// Returns the number of people in the table.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table contains nobody.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the (fixed) number of buckets in the table.
    pub const fn cap(&self) -> usize {
        self.cap.get()
    }

    /// Inserts `person` into the chain for their names, after anyone whose first name sorts
    /// before or equal to theirs. Duplicates are allowed, so this always adds a new entry.
    ///
    /// If the node for `person` can't be allocated, [`alloc::handle_alloc_error`] is called. See
    /// [`ChainedHashTable::try_insert`] to handle this instead.
    pub fn insert(&mut self, person: P) {
        if let Err(error) = self.try_insert(person) {
            alloc::handle_alloc_error(error.layout)
        }
    }

    /// Inserts `person` into the chain for their names, after anyone whose first name sorts
    /// before or equal to theirs.
    ///
    /// # Errors
    /// If the chain node can't be allocated, `person` is handed back inside of an
    /// [`AllocFailed`], leaving the table unchanged.
    pub fn try_insert(&mut self, person: P) -> Result<(), AllocFailed<P>> {
        let index = self.index_from_names(person.first_name(), person.last_name());

        let position = self.buckets[index].try_insert_by(person, |existing, new| {
            compare_names(existing.first_name(), new.first_name()).is_le()
        })?;
        self.len += 1;

        trace!("inserted into bucket {index} at position {position}, len is now {}", self.len);
        Ok(())
    }

    /// Returns an iterator over everyone with the provided names, ignoring ASCII case. The
    /// iterator is empty if there is nobody with those names.
    pub fn lookup<'a>(&'a self, first_name: &'a str, last_name: &'a str) -> Matches<'a, P> {
        let index = self.index_from_names(first_name, last_name);

        Matches {
            inner: self.buckets[index].iter(),
            first_name,
            last_name,
        }
    }

    /// Returns true if there is at least one person with the provided names.
    pub fn contains(&self, first_name: &str, last_name: &str) -> bool {
        self.lookup(first_name, last_name).next().is_some()
    }

    /// Removes the person identified by the provided names and `id`, returning them if they were
    /// present. Names are compared ignoring ASCII case, but the id must match exactly.
    ///
    /// When several entries share the whole identity, the first one in the chain is removed.
    pub fn take(&mut self, first_name: &str, last_name: &str, id: i32) -> Option<P> {
        let index = self.index_from_names(first_name, last_name);

        // The chain is sorted by first name, so nobody past the query's first name can match.
        let taken = self.buckets[index].take_first(
            |existing| compare_names(existing.first_name(), first_name).is_gt(),
            |existing| {
                existing.id() == id
                    && names_eq(existing.first_name(), first_name)
                    && names_eq(existing.last_name(), last_name)
            },
        );

        match taken {
            Some(_) => {
                self.len -= 1;
                trace!("removed id {id} from bucket {index}, len is now {}", self.len);
            },
            None => debug!("no entry with id {id} found in bucket {index}"),
        }

        taken
    }

    /// Removes and drops the person identified by the provided names and `id`, returning true if
    /// they were present.
    pub fn remove(&mut self, first_name: &str, last_name: &str, id: i32) -> bool {
        self.take(first_name, last_name, id).is_some()
    }

    /// Returns the chain held by the bucket at `index`, or None if `index` is out of bounds.
    pub fn bucket(&self, index: usize) -> Option<&Chain<P>> {
        self.buckets.get(index)
    }

    /// Returns the index of the bucket that the provided names hash to.
    pub fn bucket_index(&self, first_name: &str, last_name: &str) -> usize {
        self.index_from_names(first_name, last_name)
    }

    /// Returns a read-only view of every bucket, for diagnostics. Its [`Display`] implementation
    /// lists each bucket on its own line.
    pub fn dump(&self) -> Dump<'_, P> {
        Dump {
            table: self,
        }
    }

    /// Returns an iterator over everyone in the table, bucket by bucket and then in chain order.
    pub fn iter(&self) -> Iter<'_, P> {
        self.into_iter()
    }

    /// Consumes the table, dropping every person in it exactly once. Returns the number of people
    /// that were dropped.
    pub fn destroy(mut self) -> usize {
        let released: usize = self.buckets.iter_mut().map(Chain::clear).sum();
        debug_assert_eq!(released, self.len);

        debug!("destroyed table with {} buckets, released {released} entries", self.cap());
        self.len = 0;
        released
    }
}

impl<P: Person> ChainedHashTable<P> {
    /// Calculates the bucket index for the provided names. Always in bounds, because the table
    /// has exactly `cap` buckets.
    pub(crate) fn index_from_names(&self, first_name: &str, last_name: &str) -> usize {
        digest::bucket_index(first_name, last_name, self.cap)
    }

    /// Checks that every person is in the bucket that their names hash to, that every chain is
    /// sorted by first name and that the stored length is correct.
    #[cfg(test)]
    pub(crate) fn verify_invariants(&self) {
        let mut total = 0;

        for (index, chain) in self.buckets.iter().enumerate() {
            for person in chain {
                assert_eq!(
                    self.index_from_names(person.first_name(), person.last_name()),
                    index,
                    "Every entry should be in the bucket its names hash to."
                );
            }

            assert!(
                chain.iter().is_sorted_by(|a, b| compare_names(a.first_name(), b.first_name()).is_le()),
                "Bucket {index} should be sorted by first name."
            );

            total += chain.len();
        }

        assert_eq!(self.buckets.len(), self.cap(), "The number of buckets should be fixed.");
        assert_eq!(total, self.len, "The stored length should match the number of entries.");
    }
}

impl<P: Person> Default for ChainedHashTable<P> {
    fn default() -> Self {
        ChainedHashTable::new()
    }
}

impl<P: Person> Extend<P> for ChainedHashTable<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for person in iter {
            self.insert(person);
        }
    }
}

impl<P: Person> FromIterator<P> for ChainedHashTable<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut table = ChainedHashTable::new();
        table.extend(iter);
        table
    }
}

impl<P: Person + Debug> Debug for ChainedHashTable<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<P: Person> Display for ChainedHashTable<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.dump(), f)
    }
}
