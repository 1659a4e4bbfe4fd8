//! Request definitions
//!
//! Represents password requests from clients.

use std::fmt;

use crate::error::{PasswdgenError, Result};

/// Shortest password the service will generate
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Longest password the service will generate
pub const MAX_PASSWORD_LENGTH: usize = 32;

/// Password generation policies, keyed by their single-character tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordType {
    /// `n`: digits only
    Numeric,
    /// `a`: lowercase letters only
    Alpha,
    /// `m`: upper + lower + digit prefix, then letters
    Mixed,
    /// `s`: upper + lower + digit + symbol prefix, then any of the four
    Secure,
    /// `u`: like `Secure` without visually ambiguous characters
    Unambiguous,
}

impl PasswordType {
    /// All policies in tag order
    pub const ALL: [PasswordType; 5] = [
        PasswordType::Numeric,
        PasswordType::Alpha,
        PasswordType::Mixed,
        PasswordType::Secure,
        PasswordType::Unambiguous,
    ];

    /// Look up a policy by its tag
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'n' => Some(PasswordType::Numeric),
            'a' => Some(PasswordType::Alpha),
            'm' => Some(PasswordType::Mixed),
            's' => Some(PasswordType::Secure),
            'u' => Some(PasswordType::Unambiguous),
            _ => None,
        }
    }

    /// The wire tag for this policy
    pub fn tag(self) -> char {
        match self {
            PasswordType::Numeric => 'n',
            PasswordType::Alpha => 'a',
            PasswordType::Mixed => 'm',
            PasswordType::Secure => 's',
            PasswordType::Unambiguous => 'u',
        }
    }
}

impl TryFrom<char> for PasswordType {
    type Error = PasswdgenError;

    fn try_from(tag: char) -> Result<Self> {
        PasswordType::from_tag(tag).ok_or(PasswdgenError::InvalidType(tag))
    }
}

impl fmt::Display for PasswordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PasswordType::Numeric => "numeric",
            PasswordType::Alpha => "alpha",
            PasswordType::Mixed => "mixed",
            PasswordType::Secure => "secure",
            PasswordType::Unambiguous => "unambiguous",
        };
        f.write_str(name)
    }
}

/// A validated password request
///
/// The length is always within
/// [`MIN_PASSWORD_LENGTH`, `MAX_PASSWORD_LENGTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    password_type: PasswordType,
    length: usize,
}

impl PasswordRequest {
    /// Create a request, rejecting lengths outside the permitted range
    pub fn new(password_type: PasswordType, length: usize) -> Result<Self> {
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(PasswdgenError::InvalidLength(length as i64));
        }
        Ok(Self {
            password_type,
            length,
        })
    }

    /// Requested policy
    pub fn password_type(&self) -> PasswordType {
        self.password_type
    }

    /// Requested length in characters
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Parse a length field: an optional `-` followed by ASCII digits
///
/// Returns `None` when the field is not a number at all, so the caller can
/// report its own format error. Numbers are range-checked; values that do
/// not fit an `i64` still count as length errors.
pub(crate) fn parse_length(field: &str) -> Option<Result<usize>> {
    let negative = field.starts_with('-');
    let digits = if negative { &field[1..] } else { field };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let length = field
        .parse::<i64>()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX });
    Some(checked_length(length))
}

fn checked_length(length: i64) -> Result<usize> {
    let min = MIN_PASSWORD_LENGTH as i64;
    let max = MAX_PASSWORD_LENGTH as i64;
    if (min..=max).contains(&length) {
        Ok(length as usize)
    } else {
        Err(PasswdgenError::InvalidLength(length))
    }
}
