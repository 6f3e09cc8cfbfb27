//! A hash table of people, using separate chaining with sorted chains.
//!
//! # Purpose
//! This crate is built around a single data structure: [`ChainedHashTable`](hash::ChainedHashTable).
//! It stores [`Record`](record::Record)s (people with a first name, last name and id), hashing
//! each by their names into a fixed number of buckets. Collisions are resolved by keeping a
//! [`Chain`](linked::Chain) in every bucket, sorted lexicographically by first name.
//!
//! Names are case-insensitive throughout, for hashing, ordering, lookup and removal. People with
//! the same name are allowed, so removal identifies a person by both names and their id.
//!
//! # Method
//! The table never grows: its capacity is chosen up front (seven buckets by default) and the
//! chains absorb everything else. This keeps collisions common, which is the interesting part.
//!
//! The chains own their nodes through [`Box`]es, so unlinking a node from the head, middle or tail
//! of a chain can never leave a dangling link behind. Dropping a chain is iterative, so long
//! chains are fine too.
//!
//! # Error Handling
//! Not finding someone isn't an error: lookups return an empty iterator and removals return
//! `false`. The errors that do exist are strongly typed, following the same pattern as the rest of
//! the crate, with structs implementing [`Error`](std::error::Error) combined into enums for static
//! dispatch:
//! - [`ZeroCapacity`](hash::table::ZeroCapacity) when a table would have no buckets.
//! - [`AllocFailed`](hash::table::AllocFailed) when a chain node can't be allocated, returned by
//!   [`try_insert`](hash::ChainedHashTable::try_insert) along with the person that wasn't
//!   inserted.
//! - [`LoadError`](loader::LoadError) for record files that can't be read or parsed.
//!
//! # Features
//! - `loader` (default): parsing record files, see [`loader`].
//! - `cli` (default): the interactive `hash-people` binary.
// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod hash;
pub mod linked;
#[cfg(feature = "loader")]
pub mod loader;
pub mod logger;
pub mod record;

pub(crate) mod util;
