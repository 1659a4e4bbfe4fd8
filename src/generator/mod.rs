//! Generator Module
//!
//! Password generation from a policy and a length.
//!
//! ## Policies
//! - n: digits only
//! - a: lowercase letters only
//! - m: `Aa0` prefix, then upper/lowercase letters
//! - s: `Aa0!` prefix, then any of upper, lower, digit, symbol
//! - u: same as `s` with ambiguous glyphs removed
//!
//! The random source is not cryptographically secure.

pub mod alphabet;
mod policy;

pub use policy::Policy;

use rand::Rng;

use crate::protocol::{PasswordRequest, PasswordType};

/// Generate a password using the thread-local RNG
pub fn generate(password_type: PasswordType, length: usize) -> String {
    generate_with(password_type, length, &mut rand::thread_rng())
}

/// Generate a password with a caller-supplied RNG
pub fn generate_with<R: Rng + ?Sized>(
    password_type: PasswordType,
    length: usize,
    rng: &mut R,
) -> String {
    Policy::for_type(password_type).generate(length, rng)
}

/// Generate the password described by a request
pub fn generate_for(request: &PasswordRequest) -> String {
    generate(request.password_type(), request.length())
}

impl PasswordType {
    /// Every character this policy can emit
    pub fn alphabet(self) -> Vec<char> {
        Policy::for_type(self).alphabet()
    }

    /// Whether `c` may appear in a password of this type
    pub fn permits(self, c: char) -> bool {
        Policy::for_type(self).permits(c)
    }
}
