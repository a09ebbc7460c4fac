//! URI and IRI reference types.
//!
//! # Reference types
//!
//! A reference is the five components of [RFC 3986 section 3], each of which
//! may be absent:
//!
//! ```text
//! URI-reference = URI / relative-ref
//! URI           = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
//! relative-ref  = relative-part [ "?" query ] [ "#" fragment ]
//! ```
//!
//! Both flavors share one generic type, [`RiReference`], and differ only in
//! the spec type parameter:
//!
//! * [`UriReference`] (alias of `RiReference<UriSpec>`)
//!     + Components are checked against the ASCII grammar of [RFC 3986].
//!     + An empty component is the same as an absent one.
//! * [`IriReference`] (alias of `RiReference<IriSpec>`)
//!     + Components are checked against the Unicode grammar of [RFC 3987].
//!     + An empty query or fragment is kept distinct from an absent one,
//!       since it means the delimiter was present.
//!
//! Construction never fails for a well-formed string, even if components are
//! invalid: the splitting grammar accepts any string, and validity is a
//! separate question answered by [`RiReference::is_valid`].
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//! [RFC 3986 section 3]: https://tools.ietf.org/html/rfc3986#section-3
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987

pub use self::reference::{ComponentsTuple, RiReference};

use crate::spec::{IriSpec, UriSpec};

mod reference;

/// A URI reference.
pub type UriReference = RiReference<UriSpec>;

/// An IRI reference.
pub type IriReference = RiReference<IriSpec>;
