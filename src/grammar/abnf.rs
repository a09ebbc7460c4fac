//! Pattern sources of the grammar rules.
//!
//! Each function corresponds to an ABNF rule of RFC 3986, RFC 3987 or
//! RFC 6874, and returns an unanchored pattern for the `regex` crate.
//!
//! Character class fragments (`*_CLASS`) are written to be concatenated inside
//! `[...]`. Class set operators of the `regex` crate (`&&`, `--`, `~~`) must
//! never appear by concatenation, so `&`, `-` and `~` are always escaped.

use super::Charset;

/// Splitting expression of RFC 3986 Appendix B, with named groups.
///
/// This matches any string, including strings with invalid characters.
pub(super) const REFERENCE: &str = concat!(
    r"(?:(?P<scheme>[^:/?#]+):)?",
    r"(?://(?P<authority>[^/?#]*))?",
    r"(?P<path>[^?#]*)",
    r"(?:\?(?P<query>[^#]*))?",
    r"(?:\#(?P<fragment>(?s:.*)))?",
);

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub(super) const SCHEME: &str = r"[A-Za-z][A-Za-z0-9+.\-]*";

/// `port = *DIGIT`.
pub(super) const PORT: &str = r"[0-9]*";

/// `pct-encoded = "%" HEXDIG HEXDIG`.
const PCT_ENCODED: &str = r"%[0-9A-Fa-f]{2}";

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`.
const UNRESERVED_CLASS: &str = r"A-Za-z0-9._\~\-";

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`.
const SUB_DELIMS_CLASS: &str = r"!$\&'()*+,;=";

/// `ucschar` of RFC 3987.
const UCSCHAR_CLASS: &str = concat!(
    r"\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}",
    r"\x{10000}-\x{1FFFD}\x{20000}-\x{2FFFD}\x{30000}-\x{3FFFD}",
    r"\x{40000}-\x{4FFFD}\x{50000}-\x{5FFFD}\x{60000}-\x{6FFFD}",
    r"\x{70000}-\x{7FFFD}\x{80000}-\x{8FFFD}\x{90000}-\x{9FFFD}",
    r"\x{A0000}-\x{AFFFD}\x{B0000}-\x{BFFFD}\x{C0000}-\x{CFFFD}",
    r"\x{D0000}-\x{DFFFD}\x{E1000}-\x{EFFFD}",
);

/// `iprivate` of RFC 3987.
const IPRIVATE_CLASS: &str = r"\x{E000}-\x{F8FF}\x{F0000}-\x{FFFFD}\x{100000}-\x{10FFFD}";

/// `h16 = 1*4HEXDIG`.
const H16: &str = r"[0-9A-Fa-f]{1,4}";

/// `dec-octet`: `0` to `255` without leading zeros.
const DEC_OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])";

/// `IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet`.
pub(super) fn ipv4_address() -> String {
    format!(r"{DEC_OCTET}\.{DEC_OCTET}\.{DEC_OCTET}\.{DEC_OCTET}")
}

/// `IPv6address` of RFC 3986 section 3.2.2.
fn ipv6_address() -> String {
    let ls32 = format!("(?:{H16}:{H16}|{})", ipv4_address());
    // `[ *N( h16 ":" ) h16 ]`.
    let head = |n: usize| format!("(?:(?:{H16}:){{0,{n}}}{H16})?");
    let alternatives = [
        format!("(?:{H16}:){{6}}{ls32}"),
        format!("::(?:{H16}:){{5}}{ls32}"),
        format!("(?:{H16})?::(?:{H16}:){{4}}{ls32}"),
        format!("{}::(?:{H16}:){{3}}{ls32}", head(1)),
        format!("{}::(?:{H16}:){{2}}{ls32}", head(2)),
        format!("{}::{H16}:{ls32}", head(3)),
        format!("{}::{ls32}", head(4)),
        format!("{}::{H16}", head(5)),
        format!("{}::", head(6)),
    ];
    format!("(?:{})", alternatives.join("|"))
}

/// `IP-literal = "[" ( IPv6address / IPv6addrz / IPvFuture ) "]"`.
///
/// `IPv6addrz = IPv6address "%25" ZoneID` and
/// `ZoneID = 1*( unreserved / pct-encoded )` are from RFC 6874.
pub(super) fn ip_literal() -> String {
    let zone_id = format!("(?:[{UNRESERVED_CLASS}]|{PCT_ENCODED})+");
    let ipv_future = format!(r"[vV][0-9A-Fa-f]+\.[{UNRESERVED_CLASS}{SUB_DELIMS_CLASS}:]+");
    format!(r"\[(?:{}(?:%25{zone_id})?|{ipv_future})\]", ipv6_address())
}

/// Rules which depend on the character universe.
#[derive(Debug, Clone, Copy)]
pub(super) struct Abnf {
    /// Character universe.
    charset: Charset,
}

impl Abnf {
    /// Creates a new rule set.
    #[inline]
    #[must_use]
    pub(super) fn new(charset: Charset) -> Self {
        Self { charset }
    }

    /// `unreserved` or `iunreserved` class fragment.
    fn unreserved_class(self) -> String {
        match self.charset {
            Charset::Uri => UNRESERVED_CLASS.to_owned(),
            Charset::Iri => format!("{UNRESERVED_CLASS}{UCSCHAR_CLASS}"),
        }
    }

    /// `iprivate` class fragment, empty for URIs.
    fn private_class(self) -> &'static str {
        match self.charset {
            Charset::Uri => "",
            Charset::Iri => IPRIVATE_CLASS,
        }
    }

    /// `*( unreserved / pct-encoded / sub-delims / <extra> )`.
    fn repeat_with(self, extra: &str) -> String {
        format!(
            "(?:[{}{SUB_DELIMS_CLASS}{extra}]|{PCT_ENCODED})*",
            self.unreserved_class()
        )
    }

    /// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`.
    pub(super) fn userinfo(self) -> String {
        self.repeat_with(":")
    }

    /// `reg-name = *( unreserved / pct-encoded / sub-delims )`.
    pub(super) fn reg_name(self) -> String {
        self.repeat_with("")
    }

    /// `host = IP-literal / IPv4address / reg-name`.
    pub(super) fn host(self) -> String {
        format!("(?:{}|{}|{})", ip_literal(), ipv4_address(), self.reg_name())
    }

    /// `authority = [ userinfo "@" ] host [ ":" port ]`.
    pub(super) fn subauthority(self) -> String {
        format!(
            "(?:(?P<userinfo>{})@)?(?P<host>{})(?::(?P<port>{PORT}))?",
            self.userinfo(),
            self.host()
        )
    }

    /// `*( pchar / "/" )`.
    ///
    /// This is the union of `path-abempty`, `path-absolute`, `path-noscheme`,
    /// `path-rootless` and `path-empty`. Which of them is allowed depends on
    /// the other components, and that is not checked here.
    pub(super) fn path(self) -> String {
        self.repeat_with(":@/")
    }

    /// `query = *( pchar / "/" / "?" )`, with `iprivate` for IRIs.
    pub(super) fn query(self) -> String {
        self.repeat_with(&format!(":@/?{}", self.private_class()))
    }

    /// `fragment = *( pchar / "/" / "?" )`.
    pub(super) fn fragment(self) -> String {
        self.repeat_with(":@/?")
    }
}
