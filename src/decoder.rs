//! Token decoder
//!
//! [`DecoderOptions`] is configured once and frozen into a [`Decoder`],
//! which can then decode any number of tokens, from any number of threads.

use crate::error::{Error, Result};
use crate::header::TypeCheck;
use crate::limits::check_token_length;
use crate::token::{CompleteToken, Decoded, RawToken, Segments};
use crate::utils::base64url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoder configuration
///
/// Options can be set through the builder methods or deserialized, using
/// camelCase keys (`json`, `checkTyp`, `complete`, `maxTokenLength`):
///
/// ```ignore
/// let options: DecoderOptions = serde_json::from_str(r#"{"checkTyp":"JWT"}"#)?;
/// let decoder = options.build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DecoderOptions {
    json: bool,
    check_typ: Option<String>,
    complete: bool,
    max_token_length: Option<usize>,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            json: true,
            check_typ: None,
            complete: false,
            max_token_length: None,
        }
    }
}

impl DecoderOptions {
    /// Create options with defaults: JSON parsing on, no `typ` check,
    /// claims-only output, no length bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse header and payload as JSON (default `true`)
    ///
    /// When disabled, both are returned as their decoded UTF-8 text and the
    /// payload shape is not checked.
    pub fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Require the header `typ` to match, case-insensitively
    ///
    /// Cannot be combined with `json(false)`.
    pub fn check_typ(mut self, typ: impl Into<String>) -> Self {
        self.check_typ = Some(typ.into());
        self
    }

    /// Return header, payload, signature and signing input instead of the
    /// claims alone (default `false`)
    pub fn complete(mut self, enabled: bool) -> Self {
        self.complete = enabled;
        self
    }

    /// Reject tokens longer than `bytes`
    pub fn max_token_length(mut self, bytes: usize) -> Self {
        self.max_token_length = Some(bytes);
        self
    }

    /// Validate the options and freeze them into a [`Decoder`]
    pub fn build(&self) -> Result<Decoder> {
        let check_typ = match &self.check_typ {
            None => None,
            Some(typ) if typ.is_empty() => {
                return Err(Error::ConfigurationInvalid(
                    "checkTyp must not be empty".into(),
                ));
            }
            Some(_) if !self.json => {
                return Err(Error::ConfigurationInvalid(
                    "checkTyp requires JSON decoding of the header".into(),
                ));
            }
            Some(typ) => Some(TypeCheck::new(typ.clone())),
        };

        if self.max_token_length == Some(0) {
            return Err(Error::ConfigurationInvalid(
                "maxTokenLength must be greater than zero".into(),
            ));
        }

        Ok(Decoder {
            json: self.json,
            check_typ,
            complete: self.complete,
            max_token_length: self.max_token_length,
        })
    }
}

/// Build a [`Decoder`] from options
pub fn create_decoder(options: DecoderOptions) -> Result<Decoder> {
    options.build()
}

/// Decodes compact tokens without verifying their signature
///
/// A decoder holds only its frozen configuration; decoding never mutates
/// it, so one decoder can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Decoder {
    json: bool,
    check_typ: Option<TypeCheck>,
    complete: bool,
    max_token_length: Option<usize>,
}

impl Decoder {
    /// Create a decoder with default options
    pub fn new() -> Self {
        Self {
            json: true,
            check_typ: None,
            complete: false,
            max_token_length: None,
        }
    }

    /// Decode a token given as text or bytes
    pub fn decode<'a>(&self, token: impl Into<RawToken<'a>>) -> Result<Decoded> {
        let result = self.decode_raw(token.into());
        if let Err(e) = &result {
            tracing::debug!(code = e.code(), "token rejected: {e}");
        }
        result
    }

    /// Decode a token held in a dynamically typed value
    ///
    /// Only JSON strings are accepted; anything else fails with
    /// [`Error::InvalidTokenType`].
    pub fn decode_value(&self, token: &Value) -> Result<Decoded> {
        match RawToken::try_from(token) {
            Ok(raw) => self.decode(raw),
            Err(e) => {
                tracing::debug!(code = e.code(), "token rejected: {e}");
                Err(e)
            }
        }
    }

    /// Decode a token and deserialize its claims into `C`
    ///
    /// Requires JSON decoding. Claims that do not fit `C` fail with
    /// [`Error::InvalidPayloadEncoding`], with a reason starting with
    /// `claims do not match target type`.
    pub fn decode_claims<'a, C>(&self, token: impl Into<RawToken<'a>>) -> Result<C>
    where
        C: DeserializeOwned,
    {
        if !self.json {
            return Err(Error::ConfigurationInvalid(
                "typed claims require JSON decoding".into(),
            ));
        }

        let payload = self.decode(token)?.into_payload();
        serde_json::from_value(payload).map_err(|e| Error::InvalidPayloadEncoding {
            reason: format!("claims do not match target type: {e}"),
        })
    }

    fn decode_raw(&self, token: RawToken<'_>) -> Result<Decoded> {
        check_token_length(token.len(), self.max_token_length)?;

        let text = token.as_text();
        let segments = Segments::split(&text)?;

        let header = self
            .decode_segment(segments.header())
            .map_err(|reason| Error::InvalidHeaderEncoding { reason })?;

        if let Some(check) = &self.check_typ {
            if !check.matches(&header) {
                return Err(Error::TypeMismatch {
                    expected: check.expected().to_string(),
                });
            }
        }

        let payload = self
            .decode_segment(segments.payload())
            .map_err(|reason| Error::InvalidPayloadEncoding { reason })?;

        // RFC 7519, section 7.2: the claims set must be a JSON object
        if self.json && !payload.is_object() {
            return Err(Error::PayloadNotObject);
        }

        tracing::trace!(
            complete = self.complete,
            header_len = segments.header().len(),
            payload_len = segments.payload().len(),
            signature_len = segments.signature().len(),
            "token decoded"
        );

        if !self.complete {
            return Ok(Decoded::Claims(payload));
        }

        Ok(Decoded::Complete(CompleteToken {
            header,
            payload,
            signature: segments.signature().to_string(),
            input: segments.signing_input().to_string(),
        }))
    }

    /// Base64URL-decode a segment and, in JSON mode, parse it
    fn decode_segment(&self, segment: &str) -> std::result::Result<Value, String> {
        let text = base64url::decode(segment).map_err(|e| e.to_string())?;
        if !self.json {
            return Ok(Value::String(text));
        }

        serde_json::from_str(&text).map_err(|e| format!("JSON parsing failed: {e}"))
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
