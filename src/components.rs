//! Components of an authority.

use crate::error::Error;
use crate::grammar::Rule;
use crate::spec::Spec;

/// Subcomponents of an authority: `userinfo`, `host` and `port`.
///
/// All of them are slices of the source authority, kept verbatim: no case
/// folding and no percent-decoding is applied.
///
/// # Examples
///
/// ```
/// use uri_reference::types::UriReference;
///
/// let uri = UriReference::from_string("ssh://user:pass@[::1%25lo]:22")?;
/// let authority = uri.authority_info()?;
/// assert_eq!(authority.userinfo(), Some("user:pass"));
/// assert_eq!(authority.host(), Some("[::1%25lo]"));
/// assert_eq!(authority.port(), Some("22"));
/// # Ok::<_, uri_reference::Error>(())
/// ```
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorityComponents<'a> {
    /// `userinfo`, without the trailing `@`.
    userinfo: Option<&'a str>,
    /// `host`.
    host: Option<&'a str>,
    /// `port`, without the leading `:`.
    port: Option<&'a str>,
}

impl<'a> AuthorityComponents<'a> {
    /// Returns the `userinfo` part, without the trailing `@`.
    ///
    /// Note that this can be `Some("")` (e.g. for the authority `@example.com`).
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a str> {
        self.userinfo
    }

    /// Returns the `host` part.
    ///
    /// This is `Some(_)` whenever the authority is present, and can be
    /// `Some("")`.
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<&'a str> {
        self.host
    }

    /// Returns the `port` part, without the leading `:`.
    ///
    /// Note that this can be `Some("")` (e.g. for the authority `example.com:`).
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<&'a str> {
        self.port
    }
}

/// Decomposes the authority into `userinfo`, `host` and `port`.
///
/// An absent authority decomposes into three absent parts. A present authority
/// that does not match the `authority` rule of the spec `S` is an
/// [`InvalidAuthority`][`crate::ErrorKind::InvalidAuthority`] error.
///
/// # Examples
///
/// ```
/// use uri_reference::components::authority_info;
/// use uri_reference::spec::UriSpec;
/// use uri_reference::ErrorKind;
///
/// let info = authority_info::<UriSpec>(Some("www.example.com:443"))?;
/// assert_eq!(info.host(), Some("www.example.com"));
/// assert_eq!(info.port(), Some("443"));
///
/// let absent = authority_info::<UriSpec>(None)?;
/// assert_eq!(absent.host(), None);
///
/// let err = authority_info::<UriSpec>(Some("localhost:80:80:80")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidAuthority);
/// # Ok::<_, uri_reference::Error>(())
/// ```
pub fn authority_info<S: Spec>(authority: Option<&str>) -> Result<AuthorityComponents<'_>, Error> {
    let authority = match authority {
        Some(v) => v,
        None => return Ok(AuthorityComponents::default()),
    };
    match S::grammar().match_rule(Rule::Subauthority, authority) {
        Some(caps) => Ok(AuthorityComponents {
            userinfo: caps.name("userinfo"),
            host: caps.name("host"),
            port: caps.name("port"),
        }),
        None => {
            log::debug!("authority {authority:?} does not match the `authority` rule");
            Err(Error::invalid_authority(authority))
        }
    }
}
