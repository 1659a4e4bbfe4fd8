//! UDP Server
//!
//! Receives one request datagram at a time and replies with a password.

use std::net::{SocketAddr, UdpSocket};

use crate::config::Config;
use crate::error::{PasswdgenError, Result};
use crate::generator;
use crate::protocol::{decode_request, encode_reply, MAX_DATAGRAM_SIZE};

/// UDP server for passwdgen
pub struct Server {
    /// Bound socket
    socket: UdpSocket,

    /// Reused for every receive
    buffer: [u8; MAX_DATAGRAM_SIZE],

    /// Keep serving after a malformed request
    skip_malformed: bool,
}

impl Server {
    /// Bind the server socket to `config.listen_addr`
    pub fn bind(config: Config) -> Result<Self> {
        let socket = UdpSocket::bind(&config.listen_addr).map_err(|e| {
            tracing::error!("bind() failed on {}: {}", config.listen_addr, e);
            PasswdgenError::Io(e)
        })?;

        tracing::info!("Server bound to {}", socket.local_addr()?);

        Ok(Self {
            socket,
            buffer: [0u8; MAX_DATAGRAM_SIZE],
            skip_malformed: config.skip_malformed,
        })
    }

    /// Address the socket is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Serve requests forever (blocking)
    ///
    /// Returns only on a socket error, or on a malformed request unless
    /// `skip_malformed` is set.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.serve_one()?;
        }
    }

    /// Receive one datagram and send its reply
    pub fn serve_one(&mut self) -> Result<()> {
        tracing::debug!("Server listening...");

        let (len, peer) = self.socket.recv_from(&mut self.buffer).map_err(|e| {
            tracing::error!("recvfrom() failed: {}", e);
            PasswdgenError::Io(e)
        })?;

        tracing::info!("New request from {}", peer);

        let password = match Self::handle_datagram(&self.buffer[..len]) {
            Ok(password) => password,
            Err(e) if self.skip_malformed => {
                tracing::warn!("Dropping malformed request from {}: {}", peer, e);
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Malformed request from {}: {}", peer, e);
                return Err(e);
            }
        };

        let reply = encode_reply(&password);
        let sent = self.socket.send_to(&reply, peer)?;
        if sent != reply.len() {
            return Err(PasswdgenError::Protocol(format!(
                "Short send to {}: {} of {} bytes",
                peer,
                sent,
                reply.len()
            )));
        }

        tracing::trace!("Replied to {} with {} bytes", peer, sent);
        Ok(())
    }

    /// Decode a request datagram and generate its password
    pub fn handle_datagram(datagram: &[u8]) -> Result<String> {
        let request = decode_request(datagram)?;
        tracing::debug!(
            "Generating {} password of length {}",
            request.password_type(),
            request.length()
        );
        Ok(generator::generate_for(&request))
    }
}
