use std::fs;
use std::path::Path;
use std::str::SplitWhitespace;

use log::{debug, info, warn};

use super::{
    InvalidCountError, InvalidIdError, LoadError, MissingCountError, NameTooLongError,
    TruncatedError,
};
use crate::config::MAX_NAME_LEN;
use crate::hash::ChainedHashTable;
use crate::record::Record;

/// Restrictions applied to each record as it is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// The longest name accepted, in bytes, or None for no limit.
    pub max_name_len: Option<usize>,
}

impl Limits {
    /// Limits that accept names of any length.
    pub const fn unbounded() -> Limits {
        Limits {
            max_name_len: None,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_name_len: Some(MAX_NAME_LEN),
        }
    }
}

/// An iterator that parses [`Record`]s from the contents of a record file.
///
/// Iteration ends after the declared number of records, or immediately after the first error.
pub struct Records<'a> {
    tokens: SplitWhitespace<'a>,
    limits: Limits,
    declared: usize,
    read: usize,
    failed: bool,
}

impl<'a> Records<'a> {
    /// Reads the record count from the start of `input`, ready to parse that many records.
    ///
    /// # Errors
    /// Returns an error if `input` is empty or doesn't start with a valid count.
    pub fn new(input: &'a str, limits: Limits) -> Result<Records<'a>, LoadError> {
        let mut tokens = input.split_whitespace();

        let token = tokens.next().ok_or(MissingCountError)?;
        let declared = token.parse().map_err(|_| InvalidCountError {
            token: token.to_owned(),
        })?;

        Ok(Records {
            tokens,
            limits,
            declared,
            read: 0,
            failed: false,
        })
    }

    /// Returns the number of records that the input declared.
    pub const fn declared(&self) -> usize {
        self.declared
    }

    /// Returns true if there is input left after the declared records.
    pub fn has_trailing(&self) -> bool {
        self.tokens.clone().next().is_some()
    }

    fn read_record(&mut self) -> Result<Record, LoadError> {
        let first_name = self.read_name()?;
        let last_name = self.read_name()?;

        let token = self.next_token()?;
        let id = token.parse().map_err(|_| InvalidIdError {
            record: self.read,
            token: token.to_owned(),
        })?;

        Ok(Record::new(first_name, last_name, id))
    }

    fn read_name(&mut self) -> Result<&'a str, LoadError> {
        let name = self.next_token()?;

        match self.limits.max_name_len {
            Some(max) if name.len() > max => Err(NameTooLongError {
                record: self.read,
                len: name.len(),
                max,
            }.into()),
            _ => Ok(name),
        }
    }

    fn next_token(&mut self) -> Result<&'a str, LoadError> {
        Ok(self.tokens.next().ok_or(TruncatedError {
            expected: self.declared,
            found: self.read,
        })?)
    }
}

impl Iterator for Records<'_> {
    type Item = Result<Record, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.read == self.declared {
            return None;
        }

        let result = self.read_record();
        match result {
            Ok(_) => self.read += 1,
            Err(_) => self.failed = true,
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, Some(self.declared - self.read))
        }
    }
}

/// Parses every record in `input`.
///
/// # Errors
/// Returns the first error encountered, in which case no records are returned.
pub fn parse_records(input: &str, limits: Limits) -> Result<Vec<Record>, LoadError> {
    let mut records = Records::new(input, limits)?;
    let parsed = records.by_ref().collect::<Result<Vec<_>, _>>()?;

    if records.has_trailing() {
        warn!("ignoring input after the {} declared records", records.declared());
    }

    Ok(parsed)
}

/// Parses every record in `input` and inserts them into `table`, returning the number inserted.
///
/// # Errors
/// If any record fails to parse, the error is returned and `table` is left unchanged.
pub fn load_into(
    table: &mut ChainedHashTable,
    input: &str,
    limits: Limits,
) -> Result<usize, LoadError> {
    let records = parse_records(input, limits)?;
    let count = records.len();

    table.extend(records);
    debug!("table holds {} entries after loading {count}", table.len());

    Ok(count)
}

/// Reads the record file at `path` and inserts its records into `table`, returning the number
/// inserted.
///
/// # Errors
/// Returns an error if the file can't be read or if any record fails to parse. In either case,
/// `table` is left unchanged.
pub fn load_file(
    path: impl AsRef<Path>,
    table: &mut ChainedHashTable,
    limits: Limits,
) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)?;

    let count = load_into(table, &input, limits)?;
    info!("loaded {count} records from {}", path.display());

    Ok(count)
}
