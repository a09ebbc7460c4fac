//! Type-level specifications of IRI and URI.
//!
//! A reference type is parameterized by a spec type, which selects the
//! character universe of the grammar rules: [`UriSpec`] restricts every
//! component to the ASCII subset of [RFC 3986], and [`IriSpec`] widens it to
//! the Unicode subset of [RFC 3987].
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987

mod internal;

/// A trait for spec types.
///
/// This trait is not intended to be implemented by crate users.
// Note that all types which implement `Spec` also implement `SpecInternal`.
pub trait Spec: internal::Sealed + Copy {}

/// A type that represents specification of IRI.
///
/// Currently, only [RFC 3987] is supported.
///
/// [RFC 3987]: https://tools.ietf.org/html/rfc3987
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IriSpec {}

impl Spec for IriSpec {}

/// A type that represents specification of URI.
///
/// Currently, only [RFC 3986] is supported.
///
/// [RFC 3986]: https://tools.ietf.org/html/rfc3986
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UriSpec {}

impl Spec for UriSpec {}
