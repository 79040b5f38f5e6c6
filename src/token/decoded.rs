//! Result shapes produced by a [`Decoder`](crate::Decoder)
//!
//! A decoder configured for claims-only output yields the payload alone;
//! one configured for complete output yields header, payload, signature and
//! the signing input.

use serde::Serialize;
use serde_json::Value;

/// A fully decoded token
///
/// Carries the decoded header and payload together with the raw signature
/// segment and the exact signing input. The signature is **not** verified;
/// use `input` and `signature` to verify it independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompleteToken {
    /// Decoded header (a JSON value, or the header text in raw mode)
    pub header: Value,
    /// Decoded payload (a JSON object, or the payload text in raw mode)
    pub payload: Value,
    /// Signature segment as Base64URL text, empty for unsigned tokens
    pub signature: String,
    /// Header and payload segments joined by `.`, as found in the token
    pub input: String,
}

impl CompleteToken {
    /// Get the `alg` header parameter
    pub fn algorithm(&self) -> Option<&str> {
        self.header_str("alg")
    }

    /// Get the `typ` header parameter
    pub fn token_type(&self) -> Option<&str> {
        self.header_str("typ")
    }

    /// Get the `kid` header parameter
    pub fn key_id(&self) -> Option<&str> {
        self.header_str("kid")
    }

    fn header_str(&self, name: &str) -> Option<&str> {
        self.header.get(name).and_then(Value::as_str)
    }
}

/// Output of a decode call
///
/// Serializes as the bare payload for [`Decoded::Claims`] and as
/// `{header, payload, signature, input}` for [`Decoded::Complete`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Decoded {
    /// Claims-only output: the decoded payload
    Claims(Value),
    /// Complete output
    Complete(CompleteToken),
}

impl Decoded {
    /// Whether this is the complete shape
    pub fn is_complete(&self) -> bool {
        matches!(self, Decoded::Complete(_))
    }

    /// Decoded payload, whatever the shape
    pub fn payload(&self) -> &Value {
        match self {
            Decoded::Claims(payload) => payload,
            Decoded::Complete(complete) => &complete.payload,
        }
    }

    /// Decoded header (complete shape only)
    pub fn header(&self) -> Option<&Value> {
        self.as_complete().map(|complete| &complete.header)
    }

    /// Signature segment (complete shape only)
    pub fn signature(&self) -> Option<&str> {
        self.as_complete().map(|complete| complete.signature.as_str())
    }

    /// Signing input (complete shape only)
    pub fn input(&self) -> Option<&str> {
        self.as_complete().map(|complete| complete.input.as_str())
    }

    /// Borrow the complete shape, if any
    pub fn as_complete(&self) -> Option<&CompleteToken> {
        match self {
            Decoded::Claims(_) => None,
            Decoded::Complete(complete) => Some(complete),
        }
    }

    /// Take the decoded payload
    pub fn into_payload(self) -> Value {
        match self {
            Decoded::Claims(payload) => payload,
            Decoded::Complete(complete) => complete.payload,
        }
    }
}
