//! Interactive Session Tests
//!
//! These tests verify:
//! - A lost reply is reported and the prompt comes back
//! - Help, bad input and quit keep or end the session as expected
//! - A successful exchange prints the password

use std::io::Cursor;
use std::net::UdpSocket;
use std::thread;

use passwdgen::command::{HELP_TEXT, PROMPT};
use passwdgen::network::Server;
use passwdgen::session::{run_interactive, GOODBYE, SEPARATOR};
use passwdgen::Config;

// =============================================================================
// Helper Functions
// =============================================================================

fn run(config: &Config, input: &str) -> String {
    let mut output = Vec::new();
    run_interactive(config, Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn silent_config(timeout_ms: u64) -> (UdpSocket, Config) {
    let silent = UdpSocket::bind("127.0.0.1:0").unwrap();
    let config = Config::builder()
        .server_addr(silent.local_addr().unwrap().to_string())
        .recv_timeout_ms(Some(timeout_ms))
        .build();
    (silent, config)
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_timeout_reprompts_then_quits() {
    let (_silent, config) = silent_config(150);

    let output = run(&config, "n 8\nh\nq\n");

    assert!(output.contains("ERR: No reply from server within 150 ms"));
    assert!(output.contains(HELP_TEXT));
    assert!(output.ends_with(&format!("{}\n", GOODBYE)));
    assert_eq!(output.matches(PROMPT).count(), 3);
}

#[test]
fn test_unresolvable_server_reprompts() {
    let config = Config::builder().server_addr("no-port-given").build();

    let output = run(&config, "s 12\nq\n");

    assert!(output.contains("ERR: Could not resolve server address"));
    assert!(output.ends_with(&format!("{}\n", GOODBYE)));
}

#[test]
fn test_invalid_input_never_reaches_network() {
    // No server and no timeout: a send here would block forever
    let config = Config::builder().server_addr("127.0.0.1:9").build();

    let output = run(&config, "x 8\nn 3\nn\nq\n");

    assert!(output.contains("ERR: Type must be any of [n, a, m, s, u]"));
    assert!(output.contains("ERR: Password length must be in [6-32]"));
    assert!(output.contains("ERR: Invalid input format"));
    assert!(output.ends_with(&format!("{}\n", GOODBYE)));
}

#[test]
fn test_end_of_input_ends_session() {
    let config = Config::default();
    let output = run(&config, "");
    assert_eq!(output, PROMPT);
}

#[test]
fn test_successful_exchange_prints_password() {
    let server_config = Config::builder().listen_addr("127.0.0.1:0").build();
    let mut server = Server::bind(server_config).unwrap();
    let addr = server.local_addr().unwrap();
    let handle = thread::spawn(move || server.serve_one());

    let config = Config::builder()
        .server_addr(addr.to_string())
        .recv_timeout_ms(Some(5000))
        .build();

    let output = run(&config, "u 10\nq\n");

    let line = output
        .lines()
        .find_map(|line| line.split("Password generated: ").nth(1))
        .expect("password line");
    assert_eq!(line.len(), 10);
    assert!(output.contains(SEPARATOR));

    handle.join().unwrap().unwrap();
}
