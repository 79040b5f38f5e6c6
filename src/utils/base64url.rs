//! Base64URL encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate. Decoding
//! accepts segments with or without trailing `=` padding, but any character
//! outside the URL-safe alphabet or a truncated final quantum is an error.

use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine};
use std::string::FromUtf8Error;
use thiserror::Error;

const URL_SAFE_PAD_INDIFFERENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Failure while turning a Base64URL segment into text
#[derive(Error, Debug)]
pub enum SegmentDecodeError {
    #[error("Base64URL decode failed: {0}")]
    Base64(#[from] DecodeError),

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Encode bytes to Base64URL string (no padding)
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL (no padding)
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, SegmentDecodeError> {
    Ok(URL_SAFE_PAD_INDIFFERENT.decode(input)?)
}

/// Decode Base64URL string to UTF-8 string
pub fn decode(input: &str) -> Result<String, SegmentDecodeError> {
    Ok(String::from_utf8(decode_bytes(input)?)?)
}
