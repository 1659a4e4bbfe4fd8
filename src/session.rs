//! Interactive session
//!
//! The prompt loop behind `passwdgen-cli`, generic over its input and
//! output so it can run against a terminal or an in-memory buffer.
//!
//! Errors from a single exchange (bad input, socket failure, no reply) are
//! printed and the user is prompted again. Only failures reading the input
//! or writing the output end the session.

use std::io::{BufRead, Write};

use crate::command::{parse_input, Input, HELP_TEXT, PROMPT};
use crate::config::Config;
use crate::error::Result;
use crate::network::Client;
use crate::protocol::PasswordRequest;

/// Printed after each generated password
pub const SEPARATOR: &str = "***************************************";

/// Printed when the user quits
pub const GOODBYE: &str = "Exited correctly.";

/// One request/reply exchange on a fresh socket
pub fn exchange(config: &Config, request: &PasswordRequest) -> Result<String> {
    let mut client = Client::connect(config)?;
    client.request(request)
}

/// Write a generated password the way the CLI shows it
pub fn print_password<W: Write>(output: &mut W, password: &str) -> Result<()> {
    writeln!(output, "Password generated: {}", password)?;
    writeln!(output, "{}", SEPARATOR)?;
    Ok(())
}

/// Prompt until the user quits or the input ends
pub fn run_interactive<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: &mut W,
) -> Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let request = match parse_input(&line) {
            Ok(Input::Help) => {
                writeln!(output, "{}", HELP_TEXT)?;
                continue;
            }
            Ok(Input::Quit) => {
                writeln!(output, "{}", GOODBYE)?;
                return Ok(());
            }
            Ok(Input::Generate(request)) => request,
            Err(e) => {
                writeln!(output, "ERR: {}", e)?;
                continue;
            }
        };

        match exchange(config, &request) {
            Ok(password) => print_password(output, &password)?,
            Err(e) => {
                tracing::warn!("Request {:?} failed: {}", request, e);
                writeln!(output, "ERR: {}", e)?;
            }
        }
    }
}
