use std::fmt::{self, Debug, Display, Formatter};
use std::iter::Enumerate;
use std::slice;

use super::ChainedHashTable;
use crate::linked::Chain;
use crate::record::Person;

/// A read-only, per-bucket view of a [`ChainedHashTable`], returned by
/// [`ChainedHashTable::dump`].
///
/// Iterating yields each bucket's index along with its chain, in index order. When displayed, each
/// bucket gets its own line, with its chain in order:
/// ```text
/// [0] jane smith (22222)
/// [1] -
/// [2] john smith (11111) -> john doe (33333)
/// ```
pub struct Dump<'a, P: Person> {
    pub(crate) table: &'a ChainedHashTable<P>,
}

impl<'a, P: Person> Dump<'a, P> {
    /// Returns the total number of entries across every bucket.
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> Enumerate<slice::Iter<'a, Chain<P>>> {
        self.table.buckets.iter().enumerate()
    }

    /// Returns the identity of every entry in every bucket, as `(first_name, last_name, id)`.
    pub fn identities(&self) -> impl Iterator<Item = (usize, &'a str, &'a str, i32)> + use<'a, P> {
        self.iter().flat_map(|(index, chain)| {
            chain.iter().map(move |p| (index, p.first_name(), p.last_name(), p.id()))
        })
    }
}

impl<'a, P: Person> IntoIterator for Dump<'a, P> {
    type Item = (usize, &'a Chain<P>);

    type IntoIter = Enumerate<slice::Iter<'a, Chain<P>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: Person> Display for Dump<'_, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.iter() {
            write!(f, "[{index}]")?;

            if chain.is_empty() {
                write!(f, " -")?;
            }

            for (position, person) in chain.iter().enumerate() {
                if position > 0 {
                    write!(f, " ->")?;
                }
                write!(
                    f,
                    " {} {} ({:05})",
                    person.first_name(),
                    person.last_name(),
                    person.id()
                )?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

impl<P: Person> Debug for Dump<'_, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(index, chain)| {
                (index, chain.iter().map(|p| (p.first_name(), p.last_name(), p.id())).collect::<Vec<_>>())
            }))
            .finish()
    }
}
