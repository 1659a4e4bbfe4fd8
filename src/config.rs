//! Configuration for passwdgen
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

use crate::protocol::DEFAULT_PORT;

/// Hostname the client resolves when no server address is given
pub const DEFAULT_SERVER_HOST: &str = "passwdgen.uniba.it";

/// Main configuration shared by the server and the client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Server Configuration
    // -------------------------------------------------------------------------
    /// UDP listen address (loopback by default)
    pub listen_addr: String,

    /// Keep serving after a malformed request instead of exiting
    pub skip_malformed: bool,

    // -------------------------------------------------------------------------
    // Client Configuration
    // -------------------------------------------------------------------------
    /// Server address as `host:port`; the host is resolved on connect
    pub server_addr: String,

    /// Reply wait limit (milliseconds). `None` blocks indefinitely.
    pub recv_timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("127.0.0.1:{}", DEFAULT_PORT),
            skip_malformed: false,
            server_addr: format!("{}:{}", DEFAULT_SERVER_HOST, DEFAULT_PORT),
            recv_timeout_ms: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Receive timeout as a `Duration`, if one is set
    pub fn recv_timeout(&self) -> Option<Duration> {
        self.recv_timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the UDP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Keep the server running when a request fails to decode
    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.config.skip_malformed = skip;
        self
    }

    /// Set the server address the client sends to
    pub fn server_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server_addr = addr.into();
        self
    }

    /// Set the reply timeout (in milliseconds)
    pub fn recv_timeout_ms(mut self, ms: Option<u64>) -> Self {
        self.config.recv_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
