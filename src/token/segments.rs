use crate::error::{Error, Result};

/// The three dot-separated parts of a compact token
///
/// Segments borrow from the original token text, so the signing input is
/// reproduced byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    token: &'a str,
    header: &'a str,
    payload: &'a str,
    signature: &'a str,
}

impl<'a> Segments<'a> {
    /// Split a token on `.`
    ///
    /// Exactly three parts are required. Empty parts are kept, so
    /// `"header.payload."` splits into three segments with an empty
    /// signature.
    pub fn split(token: &'a str) -> Result<Self> {
        let mut parts = token.split('.');
        let header = parts.next().ok_or(Error::MalformedToken)?;
        let payload = parts.next().ok_or(Error::MalformedToken)?;
        let signature = parts.next().ok_or(Error::MalformedToken)?;
        if parts.next().is_some() {
            return Err(Error::MalformedToken);
        }

        Ok(Self {
            token,
            header,
            payload,
            signature,
        })
    }

    /// Base64URL header segment
    pub fn header(&self) -> &'a str {
        self.header
    }

    /// Base64URL payload segment
    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// Base64URL signature segment, possibly empty
    pub fn signature(&self) -> &'a str {
        self.signature
    }

    /// The signing input (`header.payload`) exactly as it appears in the token
    pub fn signing_input(&self) -> &'a str {
        &self.token[..self.header.len() + 1 + self.payload.len()]
    }
}
