//! Command Parser Tests
//!
//! These tests verify:
//! - Help and quit detection
//! - Valid requests
//! - Rejection order: format, then length, then type

use passwdgen::command::{parse_args, parse_input, Input, HELP_TEXT};
use passwdgen::protocol::PasswordType;
use passwdgen::PasswdgenError;

// =============================================================================
// Help / Quit
// =============================================================================

#[test]
fn test_help() {
    assert_eq!(parse_input("h").unwrap(), Input::Help);
    assert_eq!(parse_input("h\n").unwrap(), Input::Help);
    assert_eq!(parse_input("help").unwrap(), Input::Help);
}

#[test]
fn test_quit() {
    assert_eq!(parse_input("q").unwrap(), Input::Quit);
    assert_eq!(parse_input("  q\n").unwrap(), Input::Quit);
    assert_eq!(parse_input("quit").unwrap(), Input::Quit);
}

#[test]
fn test_help_text_lists_every_type() {
    for password_type in PasswordType::ALL {
        assert!(HELP_TEXT.contains(&format!("{} LENGTH", password_type.tag())));
    }
}

// =============================================================================
// Valid Requests
// =============================================================================

#[test]
fn test_generate_each_type() {
    for password_type in PasswordType::ALL {
        let line = format!("{} 8\n", password_type.tag());
        match parse_input(&line).unwrap() {
            Input::Generate(request) => {
                assert_eq!(request.password_type(), password_type);
                assert_eq!(request.length(), 8);
            }
            other => panic!("Expected Generate, got {:?}", other),
        }
    }
}

#[test]
fn test_generate_extra_whitespace() {
    match parse_input("  s \t 32  ").unwrap() {
        Input::Generate(request) => {
            assert_eq!(request.password_type(), PasswordType::Secure);
            assert_eq!(request.length(), 32);
        }
        other => panic!("Expected Generate, got {:?}", other),
    }
}

#[test]
fn test_parse_args() {
    let request = parse_args("u", "20").unwrap();
    assert_eq!(request.password_type(), PasswordType::Unambiguous);
    assert_eq!(request.length(), 20);

    assert!(matches!(parse_args("h", "8"), Err(PasswdgenError::InvalidFormat)));
    assert!(matches!(parse_args("z", "8"), Err(PasswdgenError::InvalidType('z'))));
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_invalid_format() {
    for line in ["", "   ", "n", "n8", "8 n", "n 8 9", "nn 8", "n eight", "n 8.5"] {
        assert!(
            matches!(parse_input(line), Err(PasswdgenError::InvalidFormat)),
            "expected format error for {:?}",
            line
        );
    }
}

#[test]
fn test_length_out_of_range() {
    assert!(matches!(parse_input("n 5"), Err(PasswdgenError::InvalidLength(5))));
    assert!(matches!(parse_input("n 33"), Err(PasswdgenError::InvalidLength(33))));
    assert!(matches!(parse_input("n 0"), Err(PasswdgenError::InvalidLength(0))));
    assert!(matches!(parse_input("n -7"), Err(PasswdgenError::InvalidLength(-7))));
}

#[test]
fn test_unknown_type() {
    assert!(matches!(parse_input("x 8"), Err(PasswdgenError::InvalidType('x'))));
    assert!(matches!(parse_input("N 8"), Err(PasswdgenError::InvalidType('N'))));
}

#[test]
fn test_length_checked_before_type() {
    assert!(matches!(parse_input("x 99"), Err(PasswdgenError::InvalidLength(99))));
}

#[test]
fn test_overflowing_length_is_length_error() {
    assert!(matches!(
        parse_input("n 99999999999999999999"),
        Err(PasswdgenError::InvalidLength(i64::MAX))
    ));
    assert!(matches!(
        parse_input("n -99999999999999999999"),
        Err(PasswdgenError::InvalidLength(i64::MIN))
    ));
}

#[test]
fn test_signs_and_leading_zeros() {
    assert!(matches!(parse_input("n +8"), Err(PasswdgenError::InvalidFormat)));
    assert!(matches!(parse_input("n -"), Err(PasswdgenError::InvalidFormat)));

    // Typed input is lenient about leading zeros
    match parse_input("n 08").unwrap() {
        Input::Generate(request) => assert_eq!(request.length(), 8),
        other => panic!("Expected Generate, got {:?}", other),
    }
}
