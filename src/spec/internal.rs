//! A private module for sealed trait and internal implementations.
//!
//! Note that this MUST be a private module.
//! See [Rust API Guidelines][sealed-trait] about the necessity of being private.
//!
//! [sealed-trait]:
//! https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed

use crate::grammar::{Charset, Grammar};
use crate::spec::{IriSpec, UriSpec};

/// A trait to prohibit user-defined types from implementing `Spec`.
///
/// About sealed trait, see [Rust API Guidelines][future-proofing].
///
/// [future-proofing]: https://rust-lang.github.io/api-guidelines/future-proofing.html
pub trait Sealed: SpecInternal {}

impl Sealed for IriSpec {}
impl Sealed for UriSpec {}

/// Internal implementations for spec types.
pub trait SpecInternal: Sized {
    /// Character universe of the grammar rules.
    const CHARSET: Charset;
    /// Whether an empty query or fragment is kept distinct from an absent one.
    ///
    /// When `false`, empty query and fragment are treated as absent on
    /// construction, as all the other components are.
    const KEEPS_EMPTY_QUERY_AND_FRAGMENT: bool;
    /// Whether the path, query and fragment are percent-encoded on parsing.
    const ENCODES_ON_PARSE: bool;

    /// Returns the compiled grammar for the spec.
    #[inline]
    #[must_use]
    fn grammar() -> &'static Grammar {
        Grammar::get(Self::CHARSET)
    }
}

impl SpecInternal for IriSpec {
    const CHARSET: Charset = Charset::Iri;
    const KEEPS_EMPTY_QUERY_AND_FRAGMENT: bool = true;
    const ENCODES_ON_PARSE: bool = true;
}

impl SpecInternal for UriSpec {
    const CHARSET: Charset = Charset::Uri;
    const KEEPS_EMPTY_QUERY_AND_FRAGMENT: bool = false;
    const ENCODES_ON_PARSE: bool = false;
}
