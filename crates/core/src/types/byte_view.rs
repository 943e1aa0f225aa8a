//! Immutable byte values handed out by cache groups

use super::Sizeable;
use bytes::Bytes;
use std::fmt;

/// An immutable view over a run of bytes.
///
/// Cloning is cheap and never copies the payload. Callers that need to
/// mutate the data take an owned copy with [`ByteView::to_vec`].
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteView {
    bytes: Bytes,
}

impl ByteView {
    /// Copy `data` into a new view
    #[must_use]
    pub fn copy_from_slice(data: &[u8]) -> Self {
        Self {
            bytes: Bytes::copy_from_slice(data),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the underlying bytes
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Owned copy of the bytes, independent of the cached value
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

impl Sizeable for ByteView {
    fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

impl AsRef<[u8]> for ByteView {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(data: Vec<u8>) -> Self {
        Self { bytes: data.into() }
    }
}

impl From<&[u8]> for ByteView {
    fn from(data: &[u8]) -> Self {
        Self::copy_from_slice(data)
    }
}

impl From<String> for ByteView {
    fn from(data: String) -> Self {
        Self { bytes: data.into() }
    }
}

impl From<&str> for ByteView {
    fn from(data: &str) -> Self {
        Self::copy_from_slice(data.as_bytes())
    }
}

impl fmt::Display for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

impl fmt::Debug for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteView")
            .field("len", &self.bytes.len())
            .field("bytes", &self.bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_is_independent_of_source() {
        let mut source = b"630".to_vec();
        let view = ByteView::copy_from_slice(&source);
        source[0] = b'9';
        assert_eq!(view.as_slice(), b"630");
    }

    #[test]
    fn test_to_vec_returns_owned_copy() {
        let view = ByteView::from("589");
        let mut copy = view.to_vec();
        copy.push(b'!');
        assert_eq!(view.len(), 3);
        assert_eq!(copy, b"589!");
    }

    #[test]
    fn test_display_and_size() {
        let view = ByteView::from(String::from("567"));
        assert_eq!(view.to_string(), "567");
        assert_eq!(view.byte_len(), 3);
        assert!(!view.is_empty());
        assert!(ByteView::default().is_empty());
    }
}
