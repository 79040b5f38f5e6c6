//! Size limit helpers for input validation

use crate::error::{Error, Result};

/// Reject tokens longer than `max` bytes, if a bound is configured
pub(crate) fn check_token_length(len: usize, max: Option<usize>) -> Result<()> {
    match max {
        Some(max) if len > max => Err(Error::TokenTooLarge { size: len, max }),
        _ => Ok(()),
    }
}
