//! Error types for passwdgen
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using PasswdgenError
pub type Result<T> = std::result::Result<T, PasswdgenError>;

/// Unified error type for passwdgen operations
#[derive(Debug, Error)]
pub enum PasswdgenError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // User Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input format. Expected format: \"<type> <length>\"")]
    InvalidFormat,

    /// Out-of-range length; saturated at `i64::MIN`/`i64::MAX` on overflow
    #[error("Password length must be in [6-32]")]
    InvalidLength(i64),

    #[error("Type must be any of [n, a, m, s, u] (got '{0}')")]
    InvalidType(char),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Could not resolve server address: {0}")]
    Resolve(String),

    #[error("No reply from server within {0} ms")]
    NoReply(u64),
}
