//! Helpers for characters.
//!
//! These are byte-level predicates for the hot loops of the encoder and the
//! normalizer. Validation never uses them; it goes through the compiled rules.

/// Checks if the given character matches `unreserved` rule.
#[inline]
#[must_use]
pub(crate) fn is_ascii_unreserved(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'.' | b'_' | b'~')
}

/// Checks if the given character matches `gen-delims` rule.
#[inline]
#[must_use]
pub(crate) fn is_gen_delim(c: u8) -> bool {
    matches!(c, b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@')
}

/// Checks if the given character matches `sub-delims` rule.
#[inline]
#[must_use]
pub(crate) fn is_sub_delim(c: u8) -> bool {
    matches!(
        c,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Checks if the given character matches `reserved` rule.
#[inline]
#[must_use]
pub(crate) fn is_ascii_reserved(c: u8) -> bool {
    is_gen_delim(c) || is_sub_delim(c)
}

/// Decodes a hexadecimal digit.
#[inline]
#[must_use]
fn hexdigit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Decodes the two hexadecimal digits at the head of the bytes.
///
/// Returns `None` if the bytes are too short or not hexadecimal digits.
#[inline]
#[must_use]
pub(crate) fn take_xdigits2(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [upper, lower, ..] => Some((hexdigit_value(*upper)? << 4) | hexdigit_value(*lower)?),
        _ => None,
    }
}
