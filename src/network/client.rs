//! UDP Client
//!
//! Sends one request datagram and waits for one reply.

use std::io::ErrorKind;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::{PasswdgenError, Result};
use crate::protocol::{decode_reply, encode_request, PasswordRequest, MAX_DATAGRAM_SIZE};

/// Client for a passwdgen server
pub struct Client {
    /// Ephemeral local socket
    socket: UdpSocket,

    /// Resolved server address
    server_addr: SocketAddr,

    /// Total wait for one reply, `None` to block
    recv_timeout: Option<Duration>,

    /// Reused for every reply
    buffer: [u8; MAX_DATAGRAM_SIZE],
}

impl Client {
    /// Resolve the server address and open a local socket
    pub fn connect(config: &Config) -> Result<Self> {
        let server_addr = resolve(&config.server_addr)?;

        let bind_addr = if server_addr.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        };
        let socket = UdpSocket::bind(bind_addr)?;

        tracing::debug!("Client using server {} ({})", config.server_addr, server_addr);

        Ok(Self {
            socket,
            server_addr,
            recv_timeout: config.recv_timeout(),
            buffer: [0u8; MAX_DATAGRAM_SIZE],
        })
    }

    /// Resolved address of the server
    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Local address of the client socket
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Send a request and block until the password arrives
    ///
    /// With a receive timeout configured, the whole wait is bounded by it,
    /// including time spent discarding datagrams from other peers.
    pub fn request(&mut self, request: &PasswordRequest) -> Result<String> {
        let datagram = encode_request(request);

        let sent = self.socket.send_to(&datagram, self.server_addr)?;
        if sent != datagram.len() {
            return Err(PasswdgenError::Protocol(format!(
                "Short send: {} of {} bytes",
                sent,
                datagram.len()
            )));
        }

        let deadline = self.recv_timeout.map(|timeout| Instant::now() + timeout);

        loop {
            if let Some(deadline) = deadline {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    return Err(self.no_reply());
                }
                self.socket.set_read_timeout(Some(remaining))?;
            }

            let (len, from) = match self.socket.recv_from(&mut self.buffer) {
                Ok(received) => received,
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    return Err(self.no_reply());
                }
                Err(e) => return Err(e.into()),
            };

            if from != self.server_addr {
                tracing::warn!("Ignoring datagram from unexpected peer {}", from);
                continue;
            }
            return decode_reply(&self.buffer[..len]);
        }
    }

    fn no_reply(&self) -> PasswdgenError {
        let ms = self.recv_timeout.map_or(0, |t| t.as_millis() as u64);
        tracing::debug!("No reply from {} within {} ms", self.server_addr, ms);
        PasswdgenError::NoReply(ms)
    }
}

/// Resolve `host:port` to the first address returned
fn resolve(addr: &str) -> Result<SocketAddr> {
    addr.to_socket_addrs()
        .map_err(|e| PasswdgenError::Resolve(format!("{}: {}", addr, e)))?
        .next()
        .ok_or_else(|| PasswdgenError::Resolve(format!("{}: no addresses", addr)))
}
