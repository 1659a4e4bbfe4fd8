//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (plain ASCII, one UDP datagram each way)
//!
//! ### Request Format
//! ```text
//! <tag>#<length>        e.g. "s#16"
//! ```
//!
//! ### Tags
//! - n: numeric
//! - a: alphabetic (lowercase)
//! - m: mixed
//! - s: secure
//! - u: unambiguous secure
//!
//! ### Reply Format
//! The generated password as raw ASCII.

mod request;
mod codec;

pub use request::{PasswordRequest, PasswordType, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
pub use codec::{decode_reply, decode_request, encode_reply, encode_request};

pub(crate) use request::parse_length;

/// UDP port the server listens on
pub const DEFAULT_PORT: u16 = 20000;

/// Size of the per-process datagram buffer
pub const MAX_DATAGRAM_SIZE: usize = 255;

/// Separator between tag and length in a request
pub const FIELD_SEPARATOR: char = '#';
