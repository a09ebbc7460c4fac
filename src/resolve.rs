//! Reference resolution.
//!
//! See [RFC 3986 section 5.2].
//!
//! # Examples
//!
//! ```
//! use uri_reference::types::UriReference;
//!
//! let base = UriReference::from_string("http://a/b/c/d;p?q")?;
//! let reference = UriReference::from_string("../g?y#s")?;
//! assert_eq!(reference.resolve_with(&base, true)?, "http://a/b/g?y#s");
//!
//! // The base must have a scheme.
//! let relative_base = UriReference::from_string("//a/b")?;
//! assert!(reference.resolve_with(&relative_base, true).is_err());
//! # Ok::<_, uri_reference::Error>(())
//! ```
//!
//! [RFC 3986 section 5.2]: https://tools.ietf.org/html/rfc3986#section-5.2

use crate::error::Error;
use crate::normalize::remove_dot_segments_unambiguous;
use crate::spec::Spec;
use crate::types::RiReference;

/// Merges the reference path with the base path.
///
/// See [RFC 3986 section 5.2.3].
///
/// [RFC 3986 section 5.2.3]: https://tools.ietf.org/html/rfc3986#section-5.2.3
fn merge(base_has_authority: bool, base_path: &str, reference_path: &str) -> String {
    if base_has_authority && base_path.is_empty() {
        let mut merged = String::with_capacity(reference_path.len() + 1);
        merged.push('/');
        merged.push_str(reference_path);
        return merged;
    }
    let base_dir = match memchr::memrchr(b'/', base_path.as_bytes()) {
        Some(last_slash) => &base_path[..=last_slash],
        None => "",
    };
    let mut merged = String::with_capacity(base_dir.len() + reference_path.len());
    merged.push_str(base_dir);
    merged.push_str(reference_path);
    merged
}

impl<S: Spec> RiReference<S> {
    /// Resolves the reference against the base.
    ///
    /// This is the algorithm of [RFC 3986 section 5.2.2]. If `strict` is
    /// `false`, a reference with the same scheme as the base is resolved as if
    /// the scheme were absent, for backward compatibility with old parsers
    /// (e.g. `http:g` against `http://a/b/c/d;p?q` results in
    /// `http://a/b/c/g`).
    ///
    /// Components are not validated. The result keeps the encoding of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionFailed`][`crate::ErrorKind::ResolutionFailed`] error
    /// if the base has no scheme.
    ///
    /// [RFC 3986 section 5.2.2]: https://tools.ietf.org/html/rfc3986#section-5.2.2
    pub fn resolve_with(&self, base: &Self, strict: bool) -> Result<Self, Error> {
        let base_scheme = base.scheme().ok_or_else(Error::resolution_failed)?;

        let scheme = self
            .scheme()
            .filter(|scheme| strict || !scheme.eq_ignore_ascii_case(base_scheme));
        let reference_path = self.path().unwrap_or_default();

        let (scheme, authority, path, query) = if let Some(scheme) = scheme {
            (
                scheme,
                self.authority(),
                remove_dot_segments_unambiguous(reference_path, self.authority().is_some()),
                self.query(),
            )
        } else if self.authority().is_some() {
            (
                base_scheme,
                self.authority(),
                remove_dot_segments_unambiguous(reference_path, true),
                self.query(),
            )
        } else {
            let base_path = base.path().unwrap_or_default();
            let has_authority = base.authority().is_some();
            if reference_path.is_empty() {
                (
                    base_scheme,
                    base.authority(),
                    base_path.to_owned(),
                    self.query().or(base.query()),
                )
            } else {
                let path = if reference_path.starts_with('/') {
                    remove_dot_segments_unambiguous(reference_path, has_authority)
                } else {
                    let merged = merge(has_authority, base_path, reference_path);
                    remove_dot_segments_unambiguous(&merged, has_authority)
                };
                (base_scheme, base.authority(), path, self.query())
            }
        };

        Ok(Self::from_components(
            Some(scheme),
            authority,
            Some(&path),
            query,
            self.fragment(),
        )
        .with_encoding(self.encoding()))
    }
}
