//! Character classes used by the generation policies

pub const DIGITS: &[u8] = b"0123456789";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_-+=<>?";

// Ambiguous glyphs removed: 0/O/o, 1/l/I/i, 2/Z/z, 5/S/s, 8/B
pub const UNAMBIGUOUS_DIGITS: &[u8] = b"34679";
pub const UNAMBIGUOUS_LOWERCASE: &[u8] = b"abcdefghjkmnpqrtuvwxy";
pub const UNAMBIGUOUS_UPPERCASE: &[u8] = b"ACDEFGHJKLMNPQRTUWXY";

/// Characters excluded from the unambiguous policy
pub const AMBIGUOUS: &[u8] = b"0Oo1lIi2Zz5Ss8B";

/// A named set of characters drawn from uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClass(&'static [u8]);

impl CharClass {
    pub const DIGITS: CharClass = CharClass(DIGITS);
    pub const LOWERCASE: CharClass = CharClass(LOWERCASE);
    pub const UPPERCASE: CharClass = CharClass(UPPERCASE);
    pub const SYMBOLS: CharClass = CharClass(SYMBOLS);
    pub const UNAMBIGUOUS_DIGITS: CharClass = CharClass(UNAMBIGUOUS_DIGITS);
    pub const UNAMBIGUOUS_LOWERCASE: CharClass = CharClass(UNAMBIGUOUS_LOWERCASE);
    pub const UNAMBIGUOUS_UPPERCASE: CharClass = CharClass(UNAMBIGUOUS_UPPERCASE);

    pub fn chars(&self) -> &'static [u8] {
        self.0
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.0.contains(&(c as u8))
    }
}
