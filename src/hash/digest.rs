//! The name hashing and comparison rules used by [`ChainedHashTable`](super::ChainedHashTable).
//!
//! Names are case-insensitive everywhere: both hashing and comparison work on the ASCII
//! lower-cased bytes of a name. Lower-casing happens byte by byte as the names are read, so a
//! caller's strings are never modified or copied.

use std::cmp::Ordering;
use std::num::NonZero;

/// Yields the bytes of `name` in lower case.
pub fn normalized(name: &str) -> impl Iterator<Item = u8> + Clone + '_ {
    name.bytes().map(|byte| byte.to_ascii_lowercase())
}

/// Computes the raw digest for a person's names: the sum of each lower-cased byte of
/// `first_name` followed by `last_name`, offset by the byte value of `'0'`.
///
/// Letters all sit above `'0'`, so for typical names the digest is positive, but punctuation can
/// pull it below zero.
pub fn digest(first_name: &str, last_name: &str) -> i64 {
    normalized(first_name)
        .chain(normalized(last_name))
        .map(|byte| i64::from(byte) - i64::from(b'0'))
        .sum()
}

/// Reduces the digest of the provided names to a bucket index in `0..cap`. Negative digests wrap
/// around to a non-negative index rather than following the sign of the dividend.
pub fn bucket_index(first_name: &str, last_name: &str, cap: NonZero<usize>) -> usize {
    // Widening to i128 is lossless for both operands, and the remainder is below cap.
    let index = i128::from(digest(first_name, last_name)).rem_euclid(cap.get() as i128);
    index as usize
}

/// Compares two names lexicographically, ignoring ASCII case.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    normalized(a).cmp(normalized(b))
}

/// Checks two names for equality, ignoring ASCII case.
pub fn names_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
