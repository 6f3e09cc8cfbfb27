//! Default settings, and the [`Config`] that the driver assembles from its command line.

use std::num::NonZero;
use std::path::PathBuf;

#[cfg(feature = "loader")]
use crate::loader::Limits;

/// The number of buckets in a table created with
/// [`ChainedHashTable::new`](crate::hash::ChainedHashTable::new). Kept small so that collisions
/// happen, and the chains actually get exercised.
pub const DEFAULT_CAP: NonZero<usize> = match NonZero::new(7) {
    Some(cap) => cap,
    None => unreachable!(),
};

/// The longest name, in bytes, accepted from a record file by default. Record files were written
/// for 100 byte, nul-terminated name buffers.
pub const MAX_NAME_LEN: usize = 99;

/// The record file loaded when none is specified.
pub const DEFAULT_DATABASE: &str = "HashPeople.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The record file to load at startup.
    pub database: PathBuf,
    /// The fixed number of buckets in the table.
    pub capacity: NonZero<usize>,
    /// The longest name accepted by the loader, or None for no limit.
    pub max_name_len: Option<usize>,
}

impl Config {
    #[cfg(feature = "loader")]
    pub const fn limits(&self) -> Limits {
        Limits {
            max_name_len: self.max_name_len,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: PathBuf::from(DEFAULT_DATABASE),
            capacity: DEFAULT_CAP,
            max_name_len: Some(MAX_NAME_LEN),
        }
    }
}
