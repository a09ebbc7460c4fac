//! Percent encoding of component strings.
//!
//! [`encode_component`] turns IRI component text into text acceptable to the
//! URI grammar. It only percent-encodes: no case normalization, no dot
//! segment removal, no reordering. For those, see [`crate::normalize`].

use std::borrow::Cow;

use crate::error::Error;
use crate::grammar::char::{is_ascii_reserved, is_ascii_unreserved, take_xdigits2};

/// Hexadecimal digits for a nibble.
const HEXDIGITS: [u8; 16] = *b"0123456789ABCDEF";

/// Text encoding used to get the bytes of a character to be percent-encoded.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Encoding {
    /// UTF-8.
    #[default]
    Utf8,
    /// ISO-8859-1.
    ///
    /// Characters above U+00FF cannot be encoded.
    Latin1,
}

impl Encoding {
    /// Returns the name of the encoding.
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "iso-8859-1",
        }
    }

    /// Writes the encoded bytes of the character to the buffer and returns them.
    fn encode_char(self, c: char, buf: &mut [u8; 4]) -> Result<&[u8], Error> {
        match self {
            Self::Utf8 => Ok(c.encode_utf8(buf).as_bytes()),
            Self::Latin1 => match u8::try_from(u32::from(c)) {
                Ok(b) => {
                    buf[0] = b;
                    Ok(&buf[..1])
                }
                Err(_) => Err(Error::unencodable_character(c, self.name())),
            },
        }
    }

    /// Decodes the bytes into a string.
    ///
    /// Returns `None` if the bytes are not valid in the encoding.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            Self::Utf8 => core::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            Self::Latin1 => {
                if bytes.is_ascii() {
                    // ASCII bytes are valid UTF-8 as is.
                    core::str::from_utf8(bytes).ok().map(Cow::Borrowed)
                } else {
                    Some(Cow::Owned(bytes.iter().copied().map(char::from).collect()))
                }
            }
        }
    }
}

/// Returns `true` if every `%` in the string starts a valid percent-encoded triplet.
fn is_percent_encoding_valid(bytes: &[u8]) -> bool {
    memchr::memchr_iter(b'%', bytes).all(|pos| take_xdigits2(&bytes[(pos + 1)..]).is_some())
}

/// Returns `true` if the ASCII character can be written as is.
#[inline]
fn is_passthrough(c: u8, keep_percent: bool) -> bool {
    is_ascii_unreserved(c) || is_ascii_reserved(c) || (keep_percent && c == b'%')
}

/// Percent-encodes the component text so that it only uses ASCII characters
/// legal in URIs.
///
/// * ASCII `unreserved` and `reserved` characters are kept as is.
/// * `%` is kept if every `%` in the text starts a valid percent-encoded
///   triplet; otherwise every `%` is encoded to `%25`.
/// * Any other character is replaced by the percent-encoded bytes of the
///   character in the given encoding, with uppercase hexadecimal digits.
///
/// # Errors
///
/// Returns [`UnencodableCharacter`][`crate::ErrorKind::UnencodableCharacter`]
/// error if a character cannot be represented in the encoding.
///
/// # Examples
///
/// ```
/// use uri_reference::encode::{encode_component, Encoding};
///
/// assert_eq!(encode_component("/r\u{E9}sum\u{E9}", Encoding::Utf8)?, "/r%C3%A9sum%C3%A9");
/// assert_eq!(encode_component("/r\u{E9}sum\u{E9}", Encoding::Latin1)?, "/r%E9sum%E9");
/// assert_eq!(encode_component("a b<c>", Encoding::Utf8)?, "a%20b%3Cc%3E");
/// // Valid percent-encoded triplets are kept.
/// assert_eq!(encode_component("100%25", Encoding::Utf8)?, "100%25");
/// // Otherwise, all `%` characters are encoded.
/// assert_eq!(encode_component("100%25 %", Encoding::Utf8)?, "100%2525%20%25");
/// # Ok::<_, uri_reference::Error>(())
/// ```
pub fn encode_component(text: &str, encoding: Encoding) -> Result<Cow<'_, str>, Error> {
    let keep_percent = is_percent_encoding_valid(text.as_bytes());
    let first_to_encode = match text
        .bytes()
        .position(|b| !(b.is_ascii() && is_passthrough(b, keep_percent)))
    {
        Some(pos) => pos,
        None => return Ok(Cow::Borrowed(text)),
    };

    let (prefix, rest) = text.split_at(first_to_encode);
    let mut encoded = String::with_capacity(text.len() + (rest.len() * 2));
    encoded.push_str(prefix);
    let mut buf = [0_u8; 4];
    for c in rest.chars() {
        if c.is_ascii() && is_passthrough(c as u8, keep_percent) {
            encoded.push(c);
            continue;
        }
        for &b in encoding.encode_char(c, &mut buf)? {
            encoded.push('%');
            encoded.push(char::from(HEXDIGITS[usize::from(b >> 4)]));
            encoded.push(char::from(HEXDIGITS[usize::from(b & 0b1111)]));
        }
    }
    Ok(Cow::Owned(encoded))
}
