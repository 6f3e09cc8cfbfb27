//! Linked collection types. At the moment this is only [`Chain`], a singly linked list that keeps
//! itself sorted and is used for the buckets of a
//! [`ChainedHashTable`](crate::hash::ChainedHashTable).

pub mod chain;

#[doc(inline)]
pub use chain::Chain;
