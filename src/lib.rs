//! # jwtpeek - Decode JWTs Without Verifying Them
//!
//! > Split, decode and shape compact JSON Web Tokens when the signature has
//! > already been checked, or will be checked elsewhere.
//!
//! **jwtpeek** turns a compact token (`header.payload.signature`, each part
//! Base64URL-encoded) into structured data. It performs **no** signature
//! verification and **no** claim validation (`exp`, `aud`, `iss`, ...); those
//! remain the caller's responsibility.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtpeek::*;
//!
//! let decoder = DecoderOptions::new().check_typ("JWT").build()?;
//!
//! let claims = decoder.decode(token_str)?.into_payload();
//! println!("Subject: {:?}", claims["sub"]);
//! ```
//!
//! ## Decoding Pipeline
//!
//! Every call runs the same linear pipeline and stops at the first failure:
//!
//! ```text
//! RawToken (text or UTF-8 bytes)
//!     │ normalize to text
//!     ▼
//! Segments (exactly three, split on '.')
//!     │ Base64URL → UTF-8 → JSON
//!     ▼
//! header / payload values
//!     │ typ check (optional), payload must be an object
//!     ▼
//! Decoded (claims only, or complete)
//! ```
//!
//! ## Options
//!
//! | Option | Default | Effect |
//! |---|---|---|
//! | `json` | `true` | parse header and payload as JSON; when off, return their text |
//! | `check_typ` | none | header `typ` must match (case-insensitive) |
//! | `complete` | `false` | return `{header, payload, signature, input}` |
//! | `max_token_length` | none | reject longer tokens |
//!
//! ## Complete Output
//!
//! With `complete(true)` the decoder returns a [`CompleteToken`] whose
//! `input` is the signing input exactly as it appears in the token, so the
//! signature can be verified independently against those bytes.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)

// Core modules
pub mod error;
pub mod utils;

// Token types
pub mod token;

// Decoder (main public API)
pub mod decoder;

pub(crate) mod header;
pub(crate) mod limits;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use decoder::{Decoder, DecoderOptions, create_decoder};
pub use error::{Error, Result};
pub use token::{CompleteToken, Decoded, RawToken, Segments};
