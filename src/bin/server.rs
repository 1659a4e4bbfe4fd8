//! passwdgen Server Binary
//!
//! Starts the UDP password generator server.

use clap::Parser;
use passwdgen::network::Server;
use passwdgen::protocol::DEFAULT_PORT;
use passwdgen::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// passwdgen Server
#[derive(Parser, Debug)]
#[command(name = "passwdgen-server")]
#[command(about = "UDP password generator server")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value_t = format!("127.0.0.1:{}", DEFAULT_PORT))]
    listen: String,

    /// Log and drop malformed requests instead of exiting
    #[arg(long)]
    skip_malformed: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,passwdgen=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("passwdgen Server v{}", passwdgen::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let config = Config::builder()
        .listen_addr(&args.listen)
        .skip_malformed(args.skip_malformed)
        .build();

    let mut server = match Server::bind(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
