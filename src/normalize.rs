//! Syntax-based normalization.
//!
//! See [RFC 3986 section 6.2.2]. The normalization here does:
//!
//! * Case normalization: the scheme and a registered name host are
//!   lowercased, IP literals have their hexadecimal digits lowercased (the
//!   zone ID is kept as is), and the hexadecimal digits of percent-encoded
//!   triplets are uppercased.
//! * Percent-encoding normalization: triplets of `unreserved` characters are
//!   decoded.
//! * Path segment normalization: dot segments are removed from the path of
//!   a reference with a scheme or an absolute path.
//!
//! Scheme-based normalization (such as removing the default port) is not
//! done.
//!
//! # Paths starting with `//`
//!
//! Dot segment removal can produce a path starting with `//` for a reference
//! without authority, such as `foo:/..//bar`. Serialized naively, it would
//! read back as an authority (`foo://bar`). In this case the path is prefixed
//! with `/.`, so the result stays unambiguous.
//!
//! # Examples
//!
//! ```
//! use uri_reference::types::UriReference;
//!
//! let uri = UriReference::from_string("HTTPS://User@EXAMPLE.com:443/a/./b/../c?q=%7e%2f#F")?;
//! assert_eq!(
//!     uri.normalize().unsplit(),
//!     "https://User@example.com:443/a/c?q=~%2F#F"
//! );
//!
//! let a = UriReference::from_string("HTTPS://EXAMPLE.com")?;
//! let b = UriReference::from_string("https://example.com")?;
//! assert_ne!(a, b);
//! assert!(a.normalized_eq(&b));
//! # Ok::<_, uri_reference::Error>(())
//! ```
//!
//! [RFC 3986 section 6.2.2]: https://tools.ietf.org/html/rfc3986#section-6.2.2

mod remove_dot_segments;

use core::fmt::{self, Write as _};

use crate::components;
use crate::grammar::char::{is_ascii_unreserved, take_xdigits2};
use crate::spec::Spec;
use crate::types::RiReference;

pub(crate) use self::remove_dot_segments::remove_dot_segments;

/// Writable as a percent-encoding and case normalized string.
///
/// This wrapper does the things below when being formatted:
///
/// * Decode unnecessarily percent-encoded characters.
/// * Convert alphabetic characters uppercase in percent-encoded triplets.
/// * If `lowercase` is set, convert other ASCII alphabetic characters
///   lowercase.
///
/// Note that this does not newly encode raw characters, and a `%` not
/// followed by two hexadecimal digits is written as is.
#[derive(Debug, Clone, Copy)]
struct PctCaseNormalized<'a> {
    /// String to normalize.
    source: &'a str,
    /// Whether to lowercase ASCII letters.
    lowercase: bool,
}

impl<'a> PctCaseNormalized<'a> {
    /// Creates a new `PctCaseNormalized` value which keeps the case.
    #[inline]
    #[must_use]
    fn new(source: &'a str) -> Self {
        Self {
            source,
            lowercase: false,
        }
    }

    /// Creates a new `PctCaseNormalized` value which lowercases ASCII letters.
    #[inline]
    #[must_use]
    fn lowercase(source: &'a str) -> Self {
        Self {
            source,
            lowercase: true,
        }
    }

    /// Writes the character with the case handling.
    #[inline]
    fn write_char(&self, f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
        if self.lowercase {
            f.write_char(c.to_ascii_lowercase())
        } else {
            f.write_char(c)
        }
    }

    /// Writes the string without percent-encoded triplets.
    fn write_plain(&self, f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
        if self.lowercase {
            s.chars().try_for_each(|c| self.write_char(f, c))
        } else {
            f.write_str(s)
        }
    }
}

impl fmt::Display for PctCaseNormalized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.source;
        while let Some(percent_pos) = memchr::memchr(b'%', rest.as_bytes()) {
            self.write_plain(f, &rest[..percent_pos])?;
            let after_percent = &rest[(percent_pos + 1)..];
            match take_xdigits2(after_percent.as_bytes()) {
                Some(decoded) if is_ascii_unreserved(decoded) => {
                    self.write_char(f, char::from(decoded))?;
                    rest = &after_percent[2..];
                }
                Some(decoded) => {
                    write!(f, "%{decoded:02X}")?;
                    rest = &after_percent[2..];
                }
                None => {
                    f.write_char('%')?;
                    rest = after_percent;
                }
            }
        }
        self.write_plain(f, rest)
    }
}

/// Normalizes the host.
fn normalize_host(host: &str) -> String {
    if !host.starts_with('[') {
        return PctCaseNormalized::lowercase(host).to_string();
    }
    // IP literal. The zone ID is case-sensitive.
    match host.find("%25") {
        Some(zone_pos) => {
            let (address, zone) = host.split_at(zone_pos);
            let mut normalized = address.to_ascii_lowercase();
            normalized.push_str(zone);
            normalized
        }
        None => host.to_ascii_lowercase(),
    }
}

/// Normalizes the authority.
///
/// An authority which cannot be decomposed is only percent-encoding
/// normalized.
fn normalize_authority<S: Spec>(authority: &str) -> String {
    let info = match components::authority_info::<S>(Some(authority)) {
        Ok(info) => info,
        Err(_) => return PctCaseNormalized::new(authority).to_string(),
    };
    let mut normalized = String::with_capacity(authority.len());
    if let Some(userinfo) = info.userinfo() {
        normalized.push_str(&PctCaseNormalized::new(userinfo).to_string());
        normalized.push('@');
    }
    if let Some(host) = info.host() {
        normalized.push_str(&normalize_host(host));
    }
    if let Some(port) = info.port() {
        normalized.push(':');
        normalized.push_str(port);
    }
    normalized
}

/// Removes dot segments, keeping the result unambiguous.
///
/// `has_authority` tells whether the reference the path belongs to has an
/// authority.
pub(crate) fn remove_dot_segments_unambiguous(path: &str, has_authority: bool) -> String {
    let path = remove_dot_segments(path);
    if !has_authority && path.starts_with("//") {
        let mut prefixed = String::with_capacity(path.len() + 2);
        prefixed.push_str("/.");
        prefixed.push_str(&path);
        return prefixed;
    }
    path
}

impl<S: Spec> RiReference<S> {
    /// Returns the syntax-based normalized reference.
    ///
    /// See the [module documentation][`crate::normalize`] for details.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let scheme = self.scheme().map(str::to_ascii_lowercase);
        let authority = self.authority().map(normalize_authority::<S>);
        let path = self.path().map(|path| {
            let path = PctCaseNormalized::new(path).to_string();
            if self.scheme().is_some() || path.starts_with('/') {
                remove_dot_segments_unambiguous(&path, authority.is_some())
            } else {
                // Dot segments of a relative-path reference are meaningful
                // until resolution.
                path
            }
        });
        let query = self
            .query()
            .map(|query| PctCaseNormalized::new(query).to_string());
        let fragment = self
            .fragment()
            .map(|fragment| PctCaseNormalized::new(fragment).to_string());

        Self::from_components(
            scheme.as_deref(),
            authority.as_deref(),
            path.as_deref(),
            query.as_deref(),
            fragment.as_deref(),
        )
        .with_encoding(self.encoding())
    }

    /// Returns `true` if the two references are equal after normalization.
    #[must_use]
    pub fn normalized_eq(&self, other: &Self) -> bool {
        self.normalize() == other.normalize()
    }
}
