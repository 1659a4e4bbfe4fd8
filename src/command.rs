//! Command parser
//!
//! Turns one line of terminal input into an [`Input`].
//!
//! ## Grammar
//! ```text
//! h                 help
//! q                 quit
//! <tag> <length>    generate, e.g. "s 16"
//! ```

use crate::error::{PasswdgenError, Result};
use crate::protocol::{parse_length, PasswordRequest, PasswordType};

/// Prompt shown before each interactive command
pub const PROMPT: &str =
    "Enter the type of password to generate with its length [e.g. n 8] (or type 'q' to quit): ";

/// Help menu printed for `h`
pub const HELP_TEXT: &str = "\
Password Generator Help Menu Commands:
h        : show this help menu
n LENGTH : generate numeric password (digits only)
a LENGTH : generate alphabetic password (lowercase letters)
m LENGTH : generate mixed password (uppercase, lowercase letters and numbers)
s LENGTH : generate secure password (uppercase, lowercase, numbers, symbols)
u LENGTH : generate unambiguous secure password (no similar-looking characters)
q        : quit application
LENGTH must be between 6 and 32 characters
Ambiguous characters excluded in 'u' option:
0 O o (zero and letters O)
1 l I i (one and letters l, I)
2 Z z (two and letter Z)
5 S s (five and letter S)
8 B (eight and letter B)";

/// A parsed line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Show the help menu
    Help,

    /// Leave the interactive loop
    Quit,

    /// Send a password request
    Generate(PasswordRequest),
}

/// Parse a line of user input
///
/// Checks run in a fixed order: format, then length range, then type tag.
pub fn parse_input(line: &str) -> Result<Input> {
    let line = line.trim();

    if line.starts_with('h') {
        return Ok(Input::Help);
    }
    if line.starts_with('q') {
        return Ok(Input::Quit);
    }

    let mut fields = line.split_whitespace();
    let (tag, length) = match (fields.next(), fields.next(), fields.next()) {
        (Some(tag), Some(length), None) => (tag, length),
        _ => return Err(PasswdgenError::InvalidFormat),
    };

    let mut tag_chars = tag.chars();
    let tag = match (tag_chars.next(), tag_chars.next()) {
        (Some(c), None) => c,
        _ => return Err(PasswdgenError::InvalidFormat),
    };

    let length = match parse_length(length) {
        Some(length) => length?,
        None => return Err(PasswdgenError::InvalidFormat),
    };
    let password_type = PasswordType::try_from(tag)?;

    Ok(Input::Generate(PasswordRequest::new(password_type, length)?))
}

/// Parse a request given as separate arguments (one-shot CLI mode)
pub fn parse_args(tag: &str, length: &str) -> Result<PasswordRequest> {
    match parse_input(&format!("{} {}", tag, length))? {
        Input::Generate(request) => Ok(request),
        Input::Help | Input::Quit => Err(PasswdgenError::InvalidFormat),
    }
}
