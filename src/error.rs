//! Errors for jwtpeek
//!
//! Every failure terminates the current decode call. The variant is the
//! error kind; encoding variants additionally keep the underlying reason
//! (Base64URL, UTF-8 or JSON failure) for diagnostics.

use thiserror::Error;

/// jwtpeek Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("The token must be a string or a buffer.")]
    InvalidTokenType,

    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("The token is malformed.")]
    MalformedToken,

    // ============================================================================
    // Segment Errors
    // ============================================================================
    #[error("The token header is not a valid base64url serialized JSON.")]
    InvalidHeaderEncoding { reason: String },

    #[error("The token payload is not a valid base64url serialized JSON.")]
    InvalidPayloadEncoding { reason: String },

    #[error("The payload must be an object")]
    PayloadNotObject,

    #[error("The type must be \"{expected}\".")]
    TypeMismatch { expected: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid configuration: {0}")]
    ConfigurationInvalid(String),
}

impl Error {
    /// Stable, machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidTokenType => "JWT_INVALID_TOKEN_TYPE",
            Error::TokenTooLarge { .. } => "JWT_TOKEN_TOO_LARGE",
            Error::MalformedToken => "JWT_MALFORMED",
            Error::InvalidHeaderEncoding { .. } => "JWT_INVALID_HEADER",
            Error::InvalidPayloadEncoding { .. } => "JWT_INVALID_PAYLOAD",
            Error::PayloadNotObject => "JWT_PAYLOAD_NOT_OBJECT",
            Error::TypeMismatch { .. } => "JWT_INVALID_TYPE",
            Error::ConfigurationInvalid(_) => "JWT_INVALID_CONFIGURATION",
        }
    }

    /// Underlying decoding failure for header/payload encoding errors
    pub fn reason(&self) -> Option<&str> {
        match self {
            Error::InvalidHeaderEncoding { reason } | Error::InvalidPayloadEncoding { reason } => {
                Some(reason)
            }
            _ => None,
        }
    }
}

/// Result type alias for jwtpeek operations
pub type Result<T> = std::result::Result<T, Error>;
