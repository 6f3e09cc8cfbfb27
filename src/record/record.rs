use std::fmt::{self, Display, Formatter};

use super::Person;

/// A person as read from a record file: two names and a (nominally five digit) id.
///
/// The fields are private so that the names can't be altered once a Record has been inserted into
/// a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    first_name: String,
    last_name: String,
    id: i32,
}

impl Record {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, id: i32) -> Record {
        Record {
            first_name: first_name.into(),
            last_name: last_name.into(),
            id,
        }
    }
}

impl Person for Record {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn id(&self) -> i32 {
        self.id
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({:05})", self.first_name, self.last_name, self.id)
    }
}
