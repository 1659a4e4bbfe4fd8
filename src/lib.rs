//! # passwdgen
//!
//! A UDP password generator service:
//! - One request datagram, one reply datagram
//! - Five generation policies (numeric, alpha, mixed, secure, unambiguous)
//! - Synchronous, single-threaded server loop
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐                      ┌──────────────────────┐
//! │    passwdgen-cli     │      "s#16"          │   passwdgen-server   │
//! │  (Command Parser)    │ ───────────────────► │   (Transport Loop)   │
//! │                      │ ◄─────────────────── │                      │
//! └──────────────────────┘   "Kq7!x...."        └──────────┬───────────┘
//!                                                          │
//!                                                          ▼
//!                                               ┌──────────────────────┐
//!                                               │  Password Generator  │
//!                                               │  (policy dispatch)   │
//!                                               └──────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod command;
pub mod generator;
pub mod network;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PasswdgenError, Result};
pub use config::Config;
pub use protocol::{PasswordRequest, PasswordType};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of passwdgen
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
