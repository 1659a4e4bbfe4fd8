//! Network Module
//!
//! UDP server and client.
//!
//! ## Architecture
//! - Server: one socket, one reusable buffer, one request at a time
//! - Client: one request datagram, one blocking receive

mod server;
mod client;

pub use server::Server;
pub use client::Client;
