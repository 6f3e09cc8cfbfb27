use std::fmt::{self, Debug, Formatter};

use super::{Iter, Link, Node};
use crate::util::alloc::try_box;
use crate::util::error::AllocFailed;

/// A singly linked list that owns its nodes and is only ever added to at the position chosen by
/// an ordering predicate. Used as the collision chain for each bucket of a
/// [`ChainedHashTable`](crate::hash::ChainedHashTable).
///
/// The Chain itself doesn't know what ordering it holds; it trusts that the same predicate is used
/// for every insertion. Because of this, it only hands out shared references to its values.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Chain.
/// - `i`: The position that the predicate selects.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `try_insert_by` | `O(i)` |
/// | `take_first` | `O(i)` |
/// | `clear` | `O(n)` |
pub struct Chain<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> Chain<T> {
    pub const fn new() -> Chain<T> {
        Chain {
            head: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let Node { value, next } = *self.head.take()?;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Inserts `value` after every leading value for which `goes_after(existing, &value)` returns
    /// true, returning the position it was inserted at.
    ///
    /// If the chain is sorted and `goes_after` is "existing is less than or equal to value", the
    /// chain stays sorted and `value` is placed after any values equal to it.
    ///
    /// # Errors
    /// If the node can't be allocated, `value` is returned inside of an [`AllocFailed`] and the
    /// chain is left unchanged.
    pub fn try_insert_by<F>(&mut self, value: T, mut goes_after: F) -> Result<usize, AllocFailed<T>>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut link = &mut self.head;
        let mut index = 0;

        while link.as_deref().is_some_and(|node| goes_after(&node.value, &value)) {
            if let Some(node) = link {
                link = &mut node.next;
            }
            index += 1;
        }

        let mut node = try_box(Node::new(value, None)).map_err(|err| err.map(|node| node.value))?;
        node.next = link.take();
        *link = Some(node);
        self.len += 1;

        Ok(index)
    }

    /// Unlinks and returns the first value for which `matches` returns true. The search gives up
    /// at the first non-matching value for which `past` returns true, which allows a sorted chain
    /// to be searched only as far as a match could be.
    pub fn take_first<P, M>(&mut self, mut past: P, mut matches: M) -> Option<T>
    where
        P: FnMut(&T) -> bool,
        M: FnMut(&T) -> bool,
    {
        let mut link = &mut self.head;

        loop {
            let node = link.as_deref()?;
            if matches(&node.value) {
                break;
            }
            if past(&node.value) {
                return None;
            }

            if let Some(node) = link {
                link = &mut node.next;
            }
        }

        // The loop only breaks while link holds the matching node.
        let Node { value, next } = *link.take()?;
        *link = next;
        self.len -= 1;

        Some(value)
    }

    /// Drops every value in the chain, front to back, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let mut dropped = 0;
        let mut link = self.head.take();

        // Unlinking each node before it drops keeps this iterative, rather than letting Box drop
        // the whole chain recursively.
        while let Some(mut node) = link {
            link = node.next.take();
            dropped += 1;
        }

        self.len = 0;
        dropped
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Chain::new()
    }
}

impl<T: Debug> Debug for Chain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
