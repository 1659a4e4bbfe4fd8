//! Generation policies
//!
//! Each policy is a fixed prefix of character classes (guaranteeing that
//! every class appears at least once) followed by a fill phase where each
//! remaining position picks a class at random, then a character from it.

use rand::Rng;

use crate::protocol::PasswordType;
use super::alphabet::CharClass;

/// Prefix and fill classes for a policy
#[derive(Debug, Clone, Copy)]
pub struct Policy {
    /// Classes placed at positions 0, 1, ... in order
    pub prefix: &'static [CharClass],

    /// Classes chosen from uniformly for the remaining positions
    pub fill: &'static [CharClass],
}

const NUMERIC: Policy = Policy {
    prefix: &[],
    fill: &[CharClass::DIGITS],
};

const ALPHA: Policy = Policy {
    prefix: &[],
    fill: &[CharClass::LOWERCASE],
};

const MIXED: Policy = Policy {
    prefix: &[CharClass::UPPERCASE, CharClass::LOWERCASE, CharClass::DIGITS],
    fill: &[CharClass::UPPERCASE, CharClass::LOWERCASE],
};

const SECURE_CLASSES: &[CharClass] = &[
    CharClass::UPPERCASE,
    CharClass::LOWERCASE,
    CharClass::DIGITS,
    CharClass::SYMBOLS,
];

const SECURE: Policy = Policy {
    prefix: SECURE_CLASSES,
    fill: SECURE_CLASSES,
};

const UNAMBIGUOUS_CLASSES: &[CharClass] = &[
    CharClass::UNAMBIGUOUS_UPPERCASE,
    CharClass::UNAMBIGUOUS_LOWERCASE,
    CharClass::UNAMBIGUOUS_DIGITS,
    CharClass::SYMBOLS,
];

const UNAMBIGUOUS: Policy = Policy {
    prefix: UNAMBIGUOUS_CLASSES,
    fill: UNAMBIGUOUS_CLASSES,
};

impl Policy {
    /// The policy for a password type
    pub fn for_type(password_type: PasswordType) -> &'static Policy {
        match password_type {
            PasswordType::Numeric => &NUMERIC,
            PasswordType::Alpha => &ALPHA,
            PasswordType::Mixed => &MIXED,
            PasswordType::Secure => &SECURE,
            PasswordType::Unambiguous => &UNAMBIGUOUS,
        }
    }

    /// Generate `length` characters
    ///
    /// If `length` is shorter than the prefix, the prefix is truncated.
    ///
    /// # Panics
    /// If `length` runs past the prefix and the policy has no fill classes.
    pub fn generate<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> String {
        assert!(
            length <= self.prefix.len() || !self.fill.is_empty(),
            "policy has no fill classes for positions past its prefix"
        );

        let mut password = String::with_capacity(length);

        for position in 0..length {
            let class = match self.prefix.get(position) {
                Some(class) => class,
                None => &self.fill[rng.gen_range(0..self.fill.len())],
            };
            password.push(pick(class, rng));
        }

        password
    }

    /// Whether `c` may appear anywhere in this policy's output
    pub fn permits(&self, c: char) -> bool {
        self.prefix
            .iter()
            .chain(self.fill.iter())
            .any(|class| class.contains(c))
    }

    /// Every character this policy can emit, sorted and deduplicated
    pub fn alphabet(&self) -> Vec<char> {
        let mut chars: Vec<char> = self
            .prefix
            .iter()
            .chain(self.fill.iter())
            .flat_map(|class| class.chars().iter().map(|&b| b as char))
            .collect();
        chars.sort_unstable();
        chars.dedup();
        chars
    }
}

fn pick<R: Rng + ?Sized>(class: &CharClass, rng: &mut R) -> char {
    let chars = class.chars();
    chars[rng.gen_range(0..chars.len())] as char
}
