//! Conversion from IRI to URI.
//!
//! Components other than the host are percent-encoded by
//! [`encode_component`][`crate::encode::encode_component`] in the declared
//! encoding of the IRI. The host is split into dot-separated labels, and each
//! label is passed through a [`LabelEncoder`].
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "idna")] {
//! use uri_reference::types::IriReference;
//!
//! let iri = IriReference::from_string("http://\u{4F8B}\u{3048}.jp/\u{30D1}\u{30B9}?q=\u{03B1}")?;
//! let uri = iri.encode()?;
//! assert_eq!(uri.authority(), Some("xn--r8jz45g.jp"));
//! assert_eq!(uri.unsplit(), "http://xn--r8jz45g.jp/%E3%83%91%E3%82%B9?q=%CE%B1");
//! assert!(uri.is_valid());
//! # }
//! # Ok::<_, uri_reference::Error>(())
//! ```

use core::convert::Infallible;
use core::fmt;
use std::borrow::Cow;

use crate::encode::{encode_component, Encoding};
use crate::error::Error;
use crate::types::{IriReference, UriReference};

/// Encoder of a single host label.
///
/// This is implemented for closures `FnMut(&str) -> Result<T, E>` where `T`
/// is text or bytes, so a custom encoder can be injected without defining a
/// type.
///
/// # Examples
///
/// ```
/// use uri_reference::types::IriReference;
///
/// let iri = IriReference::from_string("http://Example.COM/")?;
/// let uri = iri.encode_with(|label: &str| Ok::<_, String>(label.to_ascii_lowercase()))?;
/// assert_eq!(uri.authority(), Some("example.com"));
/// # Ok::<_, uri_reference::Error>(())
/// ```
pub trait LabelEncoder {
    /// Encoded label, as text or bytes.
    ///
    /// Bytes must be valid UTF-8.
    type Output: AsRef<[u8]>;
    /// Label encoding error.
    type Error: fmt::Display;

    /// Encodes the label.
    fn encode_label(&mut self, label: &str) -> Result<Self::Output, Self::Error>;
}

impl<F, T, E> LabelEncoder for F
where
    F: FnMut(&str) -> Result<T, E>,
    T: AsRef<[u8]>,
    E: fmt::Display,
{
    type Output = T;
    type Error = E;

    #[inline]
    fn encode_label(&mut self, label: &str) -> Result<Self::Output, Self::Error> {
        self(label)
    }
}

/// Default label encoder using IDNA.
///
/// Labels containing non-ASCII characters are lowercased and then encoded
/// to ASCII by the IDNA algorithm with strict STD3 rules. ASCII labels are
/// returned as is.
///
/// # Examples
///
/// ```
/// use uri_reference::convert::{IdnaLabelEncoder, LabelEncoder};
///
/// let mut encoder = IdnaLabelEncoder::new();
/// assert_eq!(encoder.encode_label("\u{4F8B}\u{3048}").unwrap(), "xn--r8jz45g");
/// assert_eq!(encoder.encode_label("EXAMPLE").unwrap(), "EXAMPLE");
/// ```
#[cfg(feature = "idna")]
#[derive(Default, Debug, Clone, Copy)]
pub struct IdnaLabelEncoder {
    /// Reserved for options.
    _private: (),
}

#[cfg(feature = "idna")]
impl IdnaLabelEncoder {
    /// Creates a new encoder.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "idna")]
impl LabelEncoder for IdnaLabelEncoder {
    type Output = String;
    type Error = idna::Errors;

    fn encode_label(&mut self, label: &str) -> Result<Self::Output, Self::Error> {
        if !label.chars().any(|c| u32::from(c) > 0x80) {
            return Ok(label.to_owned());
        }
        idna::domain_to_ascii_strict(&label.to_lowercase())
    }
}

/// Label encoder that is never available.
#[cfg_attr(feature = "idna", allow(dead_code))]
#[derive(Debug, Clone, Copy)]
enum Unavailable {}

impl LabelEncoder for Unavailable {
    type Output = &'static [u8];
    type Error = Infallible;

    fn encode_label(&mut self, _: &str) -> Result<Self::Output, Self::Error> {
        match *self {}
    }
}

/// Percent-encodes the component if present.
fn encode_optional(
    component: Option<&str>,
    encoding: Encoding,
) -> Result<Option<Cow<'_, str>>, Error> {
    component.map(|s| encode_component(s, encoding)).transpose()
}

/// Encodes the host label by label.
fn encode_host<E: LabelEncoder>(
    host: &str,
    authority: &str,
    encoder: Option<&mut E>,
) -> Result<String, Error> {
    let encoder = match encoder {
        Some(v) => v,
        None => {
            log::debug!("no encoder is available for the host {host:?}");
            return Err(Error::missing_dependency());
        }
    };

    let mut encoded = String::with_capacity(host.len());
    for (i, label) in host.split('.').enumerate() {
        if i != 0 {
            encoded.push('.');
        }
        let output = encoder.encode_label(label).map_err(|e| {
            log::debug!("failed to encode the host label {label:?}: {e}");
            Error::invalid_authority(authority)
        })?;
        let output = core::str::from_utf8(output.as_ref()).map_err(|e| {
            log::debug!("the encoded host label for {label:?} is not UTF-8: {e}");
            Error::invalid_authority(authority)
        })?;
        log::trace!("encoded the host label {label:?} to {output:?}");
        encoded.push_str(output);
    }
    Ok(encoded)
}

impl IriReference {
    /// Converts the IRI reference into a URI reference, with the default
    /// label encoder.
    ///
    /// The default label encoder is [`IdnaLabelEncoder`]. Without the `idna`
    /// feature, there is no default encoder and the conversion of a reference
    /// with a non-empty host fails.
    ///
    /// # Errors
    ///
    /// * [`InvalidAuthority`][`crate::ErrorKind::InvalidAuthority`]: the
    ///   authority cannot be decomposed, or a host label cannot be encoded.
    /// * [`MissingDependency`][`crate::ErrorKind::MissingDependency`]: a host
    ///   exists but the `idna` feature is disabled.
    /// * [`UnencodableCharacter`][`crate::ErrorKind::UnencodableCharacter`]: a
    ///   character cannot be represented in the declared encoding.
    pub fn encode(&self) -> Result<UriReference, Error> {
        #[cfg(feature = "idna")]
        {
            self.encode_with(IdnaLabelEncoder::new())
        }
        #[cfg(not(feature = "idna"))]
        {
            self.encode_impl::<Unavailable>(None)
        }
    }

    /// Converts the IRI reference into a URI reference, with the given label
    /// encoder.
    ///
    /// # Errors
    ///
    /// Same as [`encode`][`Self::encode`], except that
    /// [`MissingDependency`][`crate::ErrorKind::MissingDependency`] is never
    /// returned.
    #[inline]
    pub fn encode_with<E: LabelEncoder>(&self, mut encoder: E) -> Result<UriReference, Error> {
        self.encode_impl(Some(&mut encoder))
    }

    /// Converts the IRI reference into a URI reference.
    fn encode_impl<E: LabelEncoder>(&self, encoder: Option<&mut E>) -> Result<UriReference, Error> {
        let encoding = self.encoding();

        let authority = match self.authority() {
            Some(authority) => {
                let info = self.authority_info()?;
                let mut encoded = String::with_capacity(authority.len());
                if let Some(userinfo) = info.userinfo() {
                    encoded.push_str(&encode_component(userinfo, encoding)?);
                    encoded.push('@');
                }
                match info.host() {
                    Some(host) if !host.is_empty() => {
                        encoded.push_str(&encode_host(host, authority, encoder)?);
                    }
                    _ => {}
                }
                if let Some(port) = info.port() {
                    encoded.push(':');
                    encoded.push_str(port);
                }
                Some(encoded)
            }
            None => None,
        };

        let scheme = encode_optional(self.scheme(), encoding)?;
        let path = encode_optional(self.path(), encoding)?;
        let query = encode_optional(self.query(), encoding)?;
        let fragment = encode_optional(self.fragment(), encoding)?;
        Ok(UriReference::from_components(
            scheme.as_deref(),
            authority.as_deref(),
            path.as_deref(),
            query.as_deref(),
            fragment.as_deref(),
        )
        .with_encoding(encoding))
    }
}
