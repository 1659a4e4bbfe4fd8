//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request Format
//! ```text
//! ┌──────────┬─────┬──────────────────┐
//! │ Tag (1)  │  #  │  Length (ASCII)  │
//! └──────────┴─────┴──────────────────┘
//! ```
//!
//! ### Reply Format
//! The raw password characters, nothing else.

use crate::error::{PasswdgenError, Result};
use super::request::parse_length;
use super::{PasswordRequest, PasswordType, FIELD_SEPARATOR, MAX_DATAGRAM_SIZE};

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request to bytes
///
/// Format: tag + '#' + decimal length
pub fn encode_request(request: &PasswordRequest) -> Vec<u8> {
    format!(
        "{}{}{}",
        request.password_type().tag(),
        FIELD_SEPARATOR,
        request.length()
    )
    .into_bytes()
}

/// Decode a request from bytes
///
/// Only the exact encoded form is accepted: no leading zeros, no sign
/// other than `-`. Trailing NUL padding and whitespace are ignored, so a
/// zero-filled receive buffer can be passed in whole.
pub fn decode_request(bytes: &[u8]) -> Result<PasswordRequest> {
    if bytes.len() > MAX_DATAGRAM_SIZE {
        return Err(PasswdgenError::Protocol(format!(
            "Request too large: {} bytes (max {})",
            bytes.len(),
            MAX_DATAGRAM_SIZE
        )));
    }

    let text = std::str::from_utf8(bytes)
        .map_err(|_| PasswdgenError::Protocol("Request is not valid UTF-8".to_string()))?;
    let text = text.trim_end_matches(|c: char| c == '\0' || c.is_ascii_whitespace());

    let (tag, length) = text.split_once(FIELD_SEPARATOR).ok_or_else(|| {
        PasswdgenError::Protocol(format!("Missing '{}' separator in {:?}", FIELD_SEPARATOR, text))
    })?;

    let mut tag_chars = tag.chars();
    let tag = match (tag_chars.next(), tag_chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(PasswdgenError::Protocol(format!(
                "Type tag must be a single character, got {:?}",
                tag
            )))
        }
    };

    // The encoder never writes leading zeros
    if length.len() > 1 && length.starts_with('0') {
        return Err(PasswdgenError::Protocol(format!(
            "Length has leading zeros: {:?}",
            length
        )));
    }
    let length = parse_length(length)
        .ok_or_else(|| PasswdgenError::Protocol(format!("Length is not a number: {:?}", length)))?;

    let password_type = PasswordType::try_from(tag)?;
    let length = length?;

    PasswordRequest::new(password_type, length)
}

// =============================================================================
// Reply Encoding/Decoding
// =============================================================================

/// Encode a reply to bytes
pub fn encode_reply(password: &str) -> Vec<u8> {
    password.as_bytes().to_vec()
}

/// Decode a reply from bytes
pub fn decode_reply(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Err(PasswdgenError::Protocol("Empty reply".to_string()));
    }

    let text = std::str::from_utf8(bytes)
        .map_err(|_| PasswdgenError::Protocol("Reply is not valid UTF-8".to_string()))?;

    Ok(text.to_string())
}
