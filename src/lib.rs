//! URI and IRI references of [RFC 3986] and [RFC 3987].
//!
//! A reference string is split into `scheme`, `authority`, `path`, `query`
//! and `fragment` components, which can be inspected, validated, normalized,
//! resolved, converted from IRI to URI, and serialized back.
//!
//! ```
//! use uri_reference::types::{IriReference, UriReference};
//!
//! let uri = UriReference::from_string("ssh://user:pass@[::1%25lo]:22/path")?;
//! assert!(uri.is_valid());
//! assert_eq!(uri.userinfo(), Some("user:pass"));
//! assert_eq!(uri.host(), Some("[::1%25lo]"));
//! assert_eq!(uri.port(), Some("22"));
//! assert_eq!(uri.unsplit(), "ssh://user:pass@[::1%25lo]:22/path");
//!
//! // Comparison with a string parses the string first.
//! assert_eq!(uri, "ssh://user:pass@[::1%25lo]:22/path");
//!
//! // The `U+2603` snowman is allowed only in IRIs.
//! let iri = IriReference::from_string("http://\u{2603}.net/")?;
//! assert!(iri.is_valid());
//! assert!(!UriReference::from_string("http://\u{2603}.net/")?.is_valid());
//! # Ok::<_, uri_reference::Error>(())
//! ```
//!
//! Note that this crate does not have any extra knowledge about protocols.
//! Comparisons between references by `PartialEq` and `Eq` is implemented as
//! [simple string comparison](https://tools.ietf.org/html/rfc3986#section-6.2.1)
//! of the components. For case-insensitive comparison of the scheme and the
//! host, see [`RiReference::normalized_eq`][`types::RiReference::normalized_eq`].
//!
//! # Features
//!
//! * `std` (**enabled by default**):
//!     + Forwards to the `std` features of `memchr` and `serde`.
//!     + The crate itself always links the std library, since the grammar
//!       tables are built on `regex` and `std::sync::LazyLock`. Disabling
//!       this feature does not make the crate `no_std`.
//! * `idna` (**enabled by default**):
//!     + Enables the default host label encoder for IRI to URI conversion,
//!       [`convert::IdnaLabelEncoder`].
//!     + Without this feature, a label encoder should be supplied by
//!       [`IriReference::encode_with`][`types::RiReference::encode_with`].
//! * `serde`:
//!     + Implements `Serialize` and `Deserialize` for the reference types,
//!       as strings.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and never configures a logger.
//! Failures to decompose an authority and to encode a host label are logged
//! at the `debug` level, and each encoded host label at the `trace` level.
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod components;
pub mod convert;
pub mod encode;
mod error;
pub mod grammar;
pub mod normalize;
pub mod resolve;
pub mod spec;
pub mod types;
pub mod validate;

pub use self::error::{Error, ErrorKind};
