//! The payload stored by a [`ChainedHashTable`](crate::hash::ChainedHashTable).
//!
//! [`Record`] is the concrete type produced by the [`loader`](crate::loader), while [`Person`] is
//! the trait the table actually relies on.

mod person;
mod record;

pub use person::*;
pub use record::*;
