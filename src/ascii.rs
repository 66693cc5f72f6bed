//! Preset ASCII character-class matchers.
//!
//! Each function returns an [`ExpectCharset`] over a table built once and
//! shared process-wide.

use once_cell::sync::Lazy;

use crate::charset::Charset;
use crate::expect::{expect_set, ExpectCharset};

static DIGIT: Lazy<Charset> = Lazy::new(|| Charset::range(b'0', b'9'));
static LOWERCASE: Lazy<Charset> = Lazy::new(|| Charset::range(b'a', b'z'));
static UPPERCASE: Lazy<Charset> = Lazy::new(|| Charset::range(b'A', b'Z'));
static LETTER: Lazy<Charset> = Lazy::new(|| LOWERCASE.union(&UPPERCASE));
static ALPHANUMERIC: Lazy<Charset> = Lazy::new(|| LETTER.union(&DIGIT));
static HEX_DIGIT: Lazy<Charset> = Lazy::new(|| {
    DIGIT
        .union(&Charset::range(b'a', b'f'))
        .union(&Charset::range(b'A', b'F'))
});
static WHITESPACE: Lazy<Charset> = Lazy::new(|| Charset::new(b" \t\r\n"));

/// Convenience function to create an ASCII digit matcher
pub fn digit() -> ExpectCharset {
    expect_set(*DIGIT)
}

/// Convenience function to create an ASCII lowercase letter matcher
pub fn lowercase() -> ExpectCharset {
    expect_set(*LOWERCASE)
}

/// Convenience function to create an ASCII uppercase letter matcher
pub fn uppercase() -> ExpectCharset {
    expect_set(*UPPERCASE)
}

/// Convenience function to create an ASCII letter matcher
pub fn letter() -> ExpectCharset {
    expect_set(*LETTER)
}

/// Convenience function to create an ASCII alphanumeric matcher
pub fn alphanumeric() -> ExpectCharset {
    expect_set(*ALPHANUMERIC)
}

/// Convenience function to create a hexadecimal digit matcher
pub fn hex_digit() -> ExpectCharset {
    expect_set(*HEX_DIGIT)
}

/// Convenience function to create an ASCII whitespace matcher
/// (space, tab, carriage return, line feed)
pub fn whitespace() -> ExpectCharset {
    expect_set(*WHITESPACE)
}
