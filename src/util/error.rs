use std::alloc::Layout;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error};

/// Returned when a hash-based collection is asked to index buckets while having none.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unable to calculate indices for hash-based collection with capacity 0")]
pub struct ZeroCapacity;

/// Returned when the global allocator couldn't provide memory for a new node. The value that was
/// being inserted is handed back rather than dropped.
pub struct AllocFailed<T> {
    /// The value that wasn't inserted.
    pub value: T,
    /// The layout that the allocator couldn't provide.
    pub layout: Layout,
}

impl<T> AllocFailed<T> {
    /// Converts the error to hold a different value, keeping the failed layout.
    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> AllocFailed<U> {
        AllocFailed {
            value: f(self.value),
            layout: self.layout,
        }
    }
}

impl<T> Debug for AllocFailed<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllocFailed")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<T> Display for AllocFailed<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to allocate {} bytes (align {}) for a chain node!",
            self.layout.size(),
            self.layout.align()
        )
    }
}

impl<T> Error for AllocFailed<T> {}
