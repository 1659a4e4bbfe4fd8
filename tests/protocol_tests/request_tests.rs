//! Tests for PasswordType and PasswordRequest

use passwdgen::protocol::{PasswordRequest, PasswordType, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use passwdgen::PasswdgenError;

#[test]
fn test_tag_mapping() {
    let expected = [
        ('n', PasswordType::Numeric),
        ('a', PasswordType::Alpha),
        ('m', PasswordType::Mixed),
        ('s', PasswordType::Secure),
        ('u', PasswordType::Unambiguous),
    ];

    for (tag, password_type) in expected {
        assert_eq!(PasswordType::from_tag(tag), Some(password_type));
        assert_eq!(password_type.tag(), tag);
    }
}

#[test]
fn test_unknown_tags() {
    for tag in ['x', 'N', 'h', 'q', '#', ' ', '9'] {
        assert_eq!(PasswordType::from_tag(tag), None);
        assert!(matches!(
            PasswordType::try_from(tag),
            Err(PasswdgenError::InvalidType(c)) if c == tag
        ));
    }
}

#[test]
fn test_display_names() {
    assert_eq!(PasswordType::Numeric.to_string(), "numeric");
    assert_eq!(PasswordType::Unambiguous.to_string(), "unambiguous");
}

#[test]
fn test_request_length_bounds() {
    assert!(PasswordRequest::new(PasswordType::Alpha, MIN_PASSWORD_LENGTH).is_ok());
    assert!(PasswordRequest::new(PasswordType::Alpha, MAX_PASSWORD_LENGTH).is_ok());

    assert!(matches!(
        PasswordRequest::new(PasswordType::Alpha, MIN_PASSWORD_LENGTH - 1),
        Err(PasswdgenError::InvalidLength(5))
    ));
    assert!(matches!(
        PasswordRequest::new(PasswordType::Alpha, MAX_PASSWORD_LENGTH + 1),
        Err(PasswdgenError::InvalidLength(33))
    ));
    assert!(PasswordRequest::new(PasswordType::Alpha, 0).is_err());
}

#[test]
fn test_request_accessors() {
    let request = PasswordRequest::new(PasswordType::Mixed, 12).unwrap();
    assert_eq!(request.password_type(), PasswordType::Mixed);
    assert_eq!(request.length(), 12);
}
