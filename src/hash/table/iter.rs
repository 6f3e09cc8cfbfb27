use std::cmp::Ordering;
use std::iter::{Flatten, FusedIterator};
use std::{slice, vec};

use super::ChainedHashTable;
use crate::hash::digest::{compare_names, names_eq};
use crate::linked::chain::{self, Chain};
use crate::record::Person;

impl<P: Person> IntoIterator for ChainedHashTable<P> {
    type Item = P;

    type IntoIter = IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.buckets.into_vec().into_iter().flatten(),
        }
    }
}

/// An owned iterator over everyone in a [`ChainedHashTable`], in bucket order and then chain
/// order.
pub struct IntoIter<P> {
    pub(crate) inner: Flatten<vec::IntoIter<Chain<P>>>,
    pub(crate) len: usize,
}

impl<P> Iterator for IntoIter<P> {
    type Item = P;

    fn next(&mut self) -> Option<Self::Item> {
        let person = self.inner.next()?;
        self.len -= 1;
        Some(person)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<P> ExactSizeIterator for IntoIter<P> {}

impl<P> FusedIterator for IntoIter<P> {}

impl<'a, P: Person> IntoIterator for &'a ChainedHashTable<P> {
    type Item = &'a P;

    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.buckets.iter().flatten(),
            len: self.len,
        }
    }
}

/// A borrowed iterator over everyone in a [`ChainedHashTable`], in bucket order and then chain
/// order.
pub struct Iter<'a, P> {
    pub(crate) inner: Flatten<slice::Iter<'a, Chain<P>>>,
    pub(crate) len: usize,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let person = self.inner.next()?;
        self.len -= 1;
        Some(person)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<P> ExactSizeIterator for Iter<'_, P> {}

impl<P> FusedIterator for Iter<'_, P> {}

/// An iterator over the people in a [`ChainedHashTable`] that match a pair of names, returned by
/// [`ChainedHashTable::lookup`].
///
/// Only the single chain that the names hash to is searched, and only as far as the first name
/// could still match.
pub struct Matches<'a, P> {
    pub(crate) inner: chain::Iter<'a, P>,
    pub(crate) first_name: &'a str,
    pub(crate) last_name: &'a str,
}

impl<'a, P: Person> Iterator for Matches<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(person) = self.inner.next() {
            match compare_names(person.first_name(), self.first_name) {
                Ordering::Less => {},
                Ordering::Equal => if names_eq(person.last_name(), self.last_name) {
                    return Some(person);
                },
                Ordering::Greater => {
                    // Everyone after this sorts even later, so nothing else can match.
                    self.inner = chain::Iter {
                        curr: None,
                        len: 0,
                    };
                    return None;
                },
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.len()))
    }
}

impl<P: Person> FusedIterator for Matches<'_, P> {}
