//! Reading people from a record file into a [`ChainedHashTable`](crate::hash::ChainedHashTable).
//!
//! # Format
//! A record file is a sequence of whitespace separated tokens. The first token is the number of
//! records that follow, then each record is three tokens: a first name, a last name and an integer
//! id. Names can't contain whitespace, so one person per line is conventional but not required.
//! ```text
//! 3
//! john smith 11111
//! jane smith 22222
//! john doe 33333
//! ```
//! Anything after the declared number of records is ignored.

mod error;
mod records;

pub use error::*;
pub use records::*;
