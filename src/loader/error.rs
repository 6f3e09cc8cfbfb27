use std::io;

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error)]
#[display("record file is empty, expected a record count")]
pub struct MissingCountError;

#[derive(Debug, Display, Error)]
#[display("record count {token:?} isn't a non-negative integer")]
pub struct InvalidCountError {
    pub token: String,
}

#[derive(Debug, Display, Error)]
#[display("record file ended after {found} of the {expected} declared records")]
pub struct TruncatedError {
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Display, Error)]
#[display("record {record} has id {token:?}, which isn't an integer")]
pub struct InvalidIdError {
    pub record: usize,
    pub token: String,
}

#[derive(Debug, Display, Error)]
#[display("record {record} has a name of {len} bytes, exceeding the limit of {max}")]
pub struct NameTooLongError {
    pub record: usize,
    pub len: usize,
    pub max: usize,
}

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum LoadError {
    Io(io::Error),
    MissingCount(MissingCountError),
    InvalidCount(InvalidCountError),
    Truncated(TruncatedError),
    InvalidId(InvalidIdError),
    NameTooLong(NameTooLongError),
}
