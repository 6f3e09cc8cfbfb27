//! A module containing [`ChainedHashTable`] and associated types.
//!
//! Alongside the table, there are types for iterating over its entries, over the matches for a
//! lookup, and over its buckets via [`Dump`].
//!
//! [`ChainedHashTable`] is also re-exported under the parent module.

mod chained_hash_table;
mod dump;
mod iter;
mod tests;

pub use chained_hash_table::*;
pub use dump::*;
pub use iter::*;

#[doc(inline)]
pub use crate::util::error::{AllocFailed, ZeroCapacity};
