//! Validators.
//!
//! Each validator checks a single raw component string against the grammar
//! rule of the spec `S`. Unlike the predicates on reference types, these take
//! a present component; absence is the caller's business.

use core::fmt;

use crate::grammar::{Charset, Rule};
use crate::spec::Spec;

/// Resource identifier validation error.
// Note that this type should implement `Copy` trait.
// To return additional non-`Copy` data as an error, use wrapper type
// (as `std::string::FromUtf8Error` contains `std::str::Utf8Error`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// Rule which the string failed to match.
    rule: Rule,
    /// Character universe of the rule.
    charset: Charset,
}

impl Error {
    /// Creates a new `Error`.
    ///
    /// For internal use.
    #[inline]
    #[must_use]
    pub(crate) fn new(rule: Rule, charset: Charset) -> Self {
        Self { rule, charset }
    }

    /// Returns the grammar rule which the string failed to match.
    #[inline]
    #[must_use]
    pub fn rule(&self) -> Rule {
        self.rule
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.charset {
            Charset::Uri => "URI",
            Charset::Iri => "IRI",
        };
        write!(f, "Invalid {kind}: `{}` rule not matched", self.rule)
    }
}

impl std::error::Error for Error {}

/// Validates the string against the rule.
#[inline]
fn validate_rule<S: Spec>(rule: Rule, s: &str) -> Result<(), Error> {
    let grammar = S::grammar();
    if grammar.is_match(rule, s) {
        Ok(())
    } else {
        Err(Error::new(rule, grammar.charset()))
    }
}

/// Validates [scheme][scheme].
///
/// [scheme]: https://tools.ietf.org/html/rfc3986#section-3.1
///
/// # Examples
///
/// ```
/// use uri_reference::spec::UriSpec;
/// use uri_reference::validate::scheme;
///
/// assert!(scheme::<UriSpec>("svn+ssh").is_ok());
/// assert!(scheme::<UriSpec>("1http").is_err());
/// ```
pub fn scheme<S: Spec>(s: &str) -> Result<(), Error> {
    validate_rule::<S>(Rule::Scheme, s)
}

/// Validates [authority][authority] (`[ userinfo "@" ] host [ ":" port ]`).
///
/// Note that this does not range-check IPv4-shaped hosts: `256.256.256.256`
/// is a valid `reg-name`.
///
/// [authority]: https://tools.ietf.org/html/rfc3986#section-3.2
///
/// # Examples
///
/// ```
/// use uri_reference::spec::UriSpec;
/// use uri_reference::validate::authority;
///
/// assert!(authority::<UriSpec>("user@[FF02:0:0:0:0:0:0:2%25en01]:80").is_ok());
/// assert!(authority::<UriSpec>("[FADF::01%en0]").is_err());
/// assert!(authority::<UriSpec>("256.256.256.256").is_ok());
/// ```
pub fn authority<S: Spec>(s: &str) -> Result<(), Error> {
    validate_rule::<S>(Rule::Subauthority, s)
}

/// Validates [userinfo][userinfo].
///
/// [userinfo]: https://tools.ietf.org/html/rfc3986#section-3.2.1
pub fn userinfo<S: Spec>(s: &str) -> Result<(), Error> {
    validate_rule::<S>(Rule::Userinfo, s)
}

/// Validates [host][host].
///
/// [host]: https://tools.ietf.org/html/rfc3986#section-3.2.2
pub fn host<S: Spec>(s: &str) -> Result<(), Error> {
    validate_rule::<S>(Rule::Host, s)
}

/// Validates [port][port].
///
/// [port]: https://tools.ietf.org/html/rfc3986#section-3.2.3
pub fn port<S: Spec>(s: &str) -> Result<(), Error> {
    validate_rule::<S>(Rule::Port, s)
}

/// Validates [IRI path][path].
///
/// Any form of path is accepted; restrictions which depend on the presence
/// of the other components are not checked.
///
/// [path]: https://tools.ietf.org/html/rfc3986#section-3.3
pub fn path<S: Spec>(s: &str) -> Result<(), Error> {
    validate_rule::<S>(Rule::Path, s)
}

/// Validates [IRI query][query].
///
/// Note that the first `?` character in an IRI is not a part of a query.
///
/// [query]: https://tools.ietf.org/html/rfc3986#section-3.4
pub fn query<S: Spec>(s: &str) -> Result<(), Error> {
    validate_rule::<S>(Rule::Query, s)
}

/// Validates [IRI fragment][fragment].
///
/// Note that the first `#` character in an IRI is not a part of a fragment.
/// For example, `https://example.com/#foo` has a fragment `foo`, **not** `#foo`.
///
/// [fragment]: https://tools.ietf.org/html/rfc3986#section-3.5
pub fn fragment<S: Spec>(s: &str) -> Result<(), Error> {
    validate_rule::<S>(Rule::Fragment, s)
}
