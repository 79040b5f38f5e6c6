use crate::error::{Error, Result};
use serde_json::Value;
use std::borrow::Cow;

/// A compact token as supplied by the caller
///
/// Tokens arrive either as text or as bytes holding UTF-8 text. Both are
/// normalized to text before any parsing runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken<'a> {
    /// Token given as text
    Text(&'a str),
    /// Token given as a byte sequence of UTF-8 text
    Bytes(&'a [u8]),
}

impl<'a> RawToken<'a> {
    /// Normalize the token to text
    ///
    /// Invalid UTF-8 sequences in bytes become U+FFFD. The replacement
    /// character is never `.`, so the segment count is unchanged; it is
    /// outside the Base64URL alphabet, so a header or payload holding one
    /// fails to decode, while the signature is passed through as is.
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            RawToken::Text(text) => Cow::Borrowed(text),
            RawToken::Bytes(bytes) => String::from_utf8_lossy(bytes),
        }
    }

    /// Length of the token in bytes
    pub fn len(&self) -> usize {
        match self {
            RawToken::Text(text) => text.len(),
            RawToken::Bytes(bytes) => bytes.len(),
        }
    }

    /// Whether the token is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a str> for RawToken<'a> {
    fn from(value: &'a str) -> Self {
        RawToken::Text(value)
    }
}

impl<'a> From<&'a String> for RawToken<'a> {
    fn from(value: &'a String) -> Self {
        RawToken::Text(value)
    }
}

impl<'a> From<&'a [u8]> for RawToken<'a> {
    fn from(value: &'a [u8]) -> Self {
        RawToken::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for RawToken<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        RawToken::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for RawToken<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        RawToken::Bytes(value)
    }
}

/// Tokens taken from dynamically typed input (e.g. a JSON request body)
///
/// Only JSON strings are tokens; booleans, numbers, `null`, arrays and
/// objects fail with [`Error::InvalidTokenType`].
impl<'a> TryFrom<&'a Value> for RawToken<'a> {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(RawToken::Text(text)),
            _ => Err(Error::InvalidTokenType),
        }
    }
}
