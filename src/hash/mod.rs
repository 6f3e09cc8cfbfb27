//! Hash-based collections. At the moment this is only [`ChainedHashTable`], a separate chaining
//! table of [`Person`](crate::record::Person)s, along with the [`digest`] function it hashes names
//! with.

pub mod digest;
pub mod table;

#[doc(inline)]
pub use table::ChainedHashTable;
