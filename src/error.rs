//! Errors of parsing, authority decomposition, encoding and resolution.

use core::fmt;

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The reference grammar could not decompose the input at all.
    MalformedReference,
    /// The authority does not match the `authority` rule, or a host label
    /// could not be encoded.
    InvalidAuthority,
    /// Host labels need encoding, but no encoder is available.
    ///
    /// Supply an encoder, or enable the `idna` feature.
    MissingDependency,
    /// A character cannot be represented in the declared text encoding.
    UnencodableCharacter,
    /// The base reference of a resolution is not absolute.
    ResolutionFailed,
}

/// Error on reference processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Inner error representation.
    repr: ErrorRepr,
}

impl Error {
    /// Returns the error kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match &self.repr {
            ErrorRepr::MalformedReference => ErrorKind::MalformedReference,
            ErrorRepr::InvalidAuthority(_) => ErrorKind::InvalidAuthority,
            ErrorRepr::MissingDependency => ErrorKind::MissingDependency,
            ErrorRepr::UnencodableCharacter(..) => ErrorKind::UnencodableCharacter,
            ErrorRepr::ResolutionFailed => ErrorKind::ResolutionFailed,
        }
    }

    /// Returns the offending authority for [`ErrorKind::InvalidAuthority`].
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        match &self.repr {
            ErrorRepr::InvalidAuthority(authority) => Some(authority),
            _ => None,
        }
    }

    /// Creates a new `MalformedReference` error.
    #[inline]
    #[must_use]
    pub(crate) fn malformed_reference() -> Self {
        ErrorRepr::MalformedReference.into()
    }

    /// Creates a new `InvalidAuthority` error.
    #[inline]
    #[must_use]
    pub(crate) fn invalid_authority(authority: &str) -> Self {
        ErrorRepr::InvalidAuthority(authority.to_owned()).into()
    }

    /// Creates a new `MissingDependency` error.
    #[inline]
    #[must_use]
    pub(crate) fn missing_dependency() -> Self {
        ErrorRepr::MissingDependency.into()
    }

    /// Creates a new `UnencodableCharacter` error.
    #[inline]
    #[must_use]
    pub(crate) fn unencodable_character(c: char, encoding: &'static str) -> Self {
        ErrorRepr::UnencodableCharacter(c, encoding).into()
    }

    /// Creates a new `ResolutionFailed` error.
    #[inline]
    #[must_use]
    pub(crate) fn resolution_failed() -> Self {
        ErrorRepr::ResolutionFailed.into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            ErrorRepr::MalformedReference => f.write_str("malformed reference"),
            ErrorRepr::InvalidAuthority(authority) => {
                write!(f, "invalid authority: {authority:?}")
            }
            ErrorRepr::MissingDependency => f.write_str(
                "host labels require encoding, but no encoder is available \
                 (enable the `idna` feature or supply an encoder)",
            ),
            ErrorRepr::UnencodableCharacter(c, encoding) => {
                write!(f, "character {c:?} cannot be encoded in {encoding}")
            }
            ErrorRepr::ResolutionFailed => {
                f.write_str("reference resolution failed: the base is not absolute")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorRepr> for Error {
    #[inline]
    fn from(repr: ErrorRepr) -> Self {
        Self { repr }
    }
}

/// Internal representation of `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ErrorRepr {
    /// Malformed reference.
    MalformedReference,
    /// Invalid authority, with the authority string.
    InvalidAuthority(String),
    /// No host label encoder.
    MissingDependency,
    /// Unencodable character, with the encoding name.
    UnencodableCharacter(char, &'static str),
    /// Base reference is not absolute.
    ResolutionFailed,
}
