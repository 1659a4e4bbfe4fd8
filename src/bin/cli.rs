//! passwdgen CLI Client
//!
//! Interactive prompt (or one-shot request) against a passwdgen server.

use std::io;

use clap::Parser;
use passwdgen::command::parse_args;
use passwdgen::config::DEFAULT_SERVER_HOST;
use passwdgen::protocol::DEFAULT_PORT;
use passwdgen::session::{exchange, print_password, run_interactive};
use passwdgen::{Config, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// passwdgen CLI
#[derive(Parser, Debug)]
#[command(name = "passwdgen-cli")]
#[command(about = "CLI for the passwdgen password generator")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short, long, default_value_t = format!("{}:{}", DEFAULT_SERVER_HOST, DEFAULT_PORT))]
    server: String,

    /// Give up waiting for a reply after this many milliseconds
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Password type (n, a, m, s, u); omit for interactive mode
    #[arg(requires = "length")]
    password_type: Option<String>,

    /// Password length (6-32)
    length: Option<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .server_addr(&args.server)
        .recv_timeout_ms(args.timeout_ms)
        .build();

    let result = match (args.password_type.as_deref(), args.length.as_deref()) {
        (Some(tag), Some(length)) => one_shot(&config, tag, length),
        _ => run_interactive(&config, io::stdin().lock(), &mut io::stdout()),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Send the request given on the command line and exit
fn one_shot(config: &Config, tag: &str, length: &str) -> Result<()> {
    let request = parse_args(tag, length)?;
    let password = exchange(config, &request)?;
    print_password(&mut io::stdout(), &password)
}
