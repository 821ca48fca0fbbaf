//! Fixed-capacity name field
//!
//! Names live in a zero-filled 25-byte buffer. At most 24 bytes of text are
//! stored so the field always ends in at least one NUL.

use std::borrow::Cow;
use std::fmt;

use crate::error::{RecordError, Result};

use super::NAME_CAPACITY;

/// Longest name (in bytes) that fits alongside its NUL terminator
pub const MAX_NAME_LEN: usize = NAME_CAPACITY - 1;

/// A bounded, NUL-padded text buffer
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedName {
    bytes: [u8; NAME_CAPACITY],
}

impl FixedName {
    /// Build a name, truncating on a char boundary if it is too long
    pub fn new(name: &str) -> Self {
        let mut end = name.len().min(MAX_NAME_LEN);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        Self::from_text(&name.as_bytes()[..end])
    }

    /// Build a name, rejecting anything longer than `MAX_NAME_LEN` bytes
    pub fn try_new(name: &str) -> Result<Self> {
        if name.len() > MAX_NAME_LEN {
            return Err(RecordError::NameTooLong {
                len: name.len(),
                max: MAX_NAME_LEN,
            });
        }
        Ok(Self::from_text(name.as_bytes()))
    }

    /// Wrap a raw field as read from disk
    pub fn from_bytes(bytes: [u8; NAME_CAPACITY]) -> Self {
        Self { bytes }
    }

    /// Raw field contents, NUL padding included
    pub fn as_bytes(&self) -> &[u8; NAME_CAPACITY] {
        &self.bytes
    }

    /// Text up to the first NUL (lossy if the bytes are not UTF-8)
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.text())
    }

    /// Length of the text in bytes
    pub fn len(&self) -> usize {
        self.text().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes[0] == 0
    }

    fn text(&self) -> &[u8] {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(NAME_CAPACITY);
        &self.bytes[..end]
    }

    fn from_text(text: &[u8]) -> Self {
        let mut bytes = [0u8; NAME_CAPACITY];
        bytes[..text.len()].copy_from_slice(text);
        Self { bytes }
    }
}

impl fmt::Display for FixedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl fmt::Debug for FixedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedName({:?})", self.as_str())
    }
}

impl From<&str> for FixedName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
