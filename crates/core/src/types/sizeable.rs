//! Byte accounting for cached values

use bytes::Bytes;

/// A value whose footprint can be charged against a cache's byte budget.
///
/// The length reported here is added to the key length when an entry is
/// stored, and subtracted again when it leaves the cache. It must not change
/// while the value sits in a cache.
pub trait Sizeable {
    /// Number of bytes this value accounts for
    fn byte_len(&self) -> usize;
}

impl Sizeable for Vec<u8> {
    fn byte_len(&self) -> usize {
        self.len()
    }
}

impl Sizeable for String {
    fn byte_len(&self) -> usize {
        self.len()
    }
}

impl Sizeable for Bytes {
    fn byte_len(&self) -> usize {
        self.len()
    }
}
