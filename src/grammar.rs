//! Grammar rules of URI and IRI references.
//!
//! Every rule is written once, as a regular expression equivalent to the ABNF
//! of [RFC 3986] (and [RFC 3987] for the IRI character universe), and compiled
//! once per process on first use. Consumers refer to a rule by its [`Rule`]
//! name and never embed pattern literals by themselves.
//!
//! All matches are anchored at both ends: a rule either matches the entire
//! input or does not match at all.
//!
//! ```
//! use uri_reference::grammar::{self, Rule};
//! use uri_reference::spec::{IriSpec, UriSpec};
//!
//! let uri = grammar::get::<UriSpec>();
//! assert!(uri.is_match(Rule::Host, "[::1]"));
//! assert!(!uri.is_match(Rule::Host, "[FF02::3::5]"));
//!
//! // `U+3044` is `ucschar`, valid only in the IRI character universe.
//! assert!(!uri.is_match(Rule::Path, "/\u{3044}"));
//! assert!(grammar::get::<IriSpec>().is_match(Rule::Path, "/\u{3044}"));
//!
//! let caps = uri
//!     .match_rule(Rule::Subauthority, "user@example.com:8080")
//!     .expect("valid authority");
//! assert_eq!(caps.name("userinfo"), Some("user"));
//! assert_eq!(caps.name("host"), Some("example.com"));
//! assert_eq!(caps.name("port"), Some("8080"));
//! ```
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987

mod abnf;
pub(crate) mod char;

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::spec::Spec;

/// Grammar for the URI character universe.
static URI_GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| Grammar::compile(Charset::Uri));

/// Grammar for the IRI character universe.
static IRI_GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| Grammar::compile(Charset::Iri));

/// Character universe of a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// ASCII-only characters allowed by RFC 3986.
    Uri,
    /// Unicode characters allowed by RFC 3987.
    Iri,
}

/// Name of a grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Rule {
    /// Whole reference, split into `scheme`, `authority`, `path`, `query`
    /// and `fragment` groups.
    ///
    /// This is the splitting expression of [RFC 3986 Appendix B], which
    /// matches any string. Components are not validated by this rule.
    ///
    /// [RFC 3986 Appendix B]: https://tools.ietf.org/html/rfc3986#appendix-B
    Reference,
    /// `[ userinfo "@" ] host [ ":" port ]`, with `userinfo`, `host` and `port`
    /// groups.
    Subauthority,
    /// `scheme`.
    Scheme,
    /// `userinfo` or `iuserinfo`.
    Userinfo,
    /// `host` or `ihost`.
    Host,
    /// `IPv4address`.
    Ipv4Address,
    /// `IP-literal`, including the RFC 6874 zone ID form.
    IpLiteral,
    /// `reg-name` or `ireg-name`.
    RegName,
    /// `port`.
    Port,
    /// `path` or `ipath`.
    Path,
    /// `query` or `iquery`.
    Query,
    /// `fragment` or `ifragment`.
    Fragment,
}

impl Rule {
    /// All rules, in the order of the compiled table.
    const ALL: [Rule; 12] = [
        Rule::Reference,
        Rule::Subauthority,
        Rule::Scheme,
        Rule::Userinfo,
        Rule::Host,
        Rule::Ipv4Address,
        Rule::IpLiteral,
        Rule::RegName,
        Rule::Port,
        Rule::Path,
        Rule::Query,
        Rule::Fragment,
    ];

    /// Returns the ABNF rule name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Rule::Reference => "URI-reference",
            Rule::Subauthority => "authority",
            Rule::Scheme => "scheme",
            Rule::Userinfo => "userinfo",
            Rule::Host => "host",
            Rule::Ipv4Address => "IPv4address",
            Rule::IpLiteral => "IP-literal",
            Rule::RegName => "reg-name",
            Rule::Port => "port",
            Rule::Path => "path",
            Rule::Query => "query",
            Rule::Fragment => "fragment",
        }
    }

    /// Returns the unanchored pattern source for the given character universe.
    fn pattern(self, charset: Charset) -> String {
        let abnf = abnf::Abnf::new(charset);
        match self {
            Rule::Reference => abnf::REFERENCE.to_owned(),
            Rule::Subauthority => abnf.subauthority(),
            Rule::Scheme => abnf::SCHEME.to_owned(),
            Rule::Userinfo => abnf.userinfo(),
            Rule::Host => abnf.host(),
            Rule::Ipv4Address => abnf::ipv4_address(),
            Rule::IpLiteral => abnf::ip_literal(),
            Rule::RegName => abnf.reg_name(),
            Rule::Port => abnf::PORT.to_owned(),
            Rule::Path => abnf.path(),
            Rule::Query => abnf.query(),
            Rule::Fragment => abnf.fragment(),
        }
    }
}

impl fmt::Display for Rule {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compiled table of grammar rules for one character universe.
pub struct Grammar {
    /// Character universe.
    charset: Charset,
    /// Anchored expressions, indexed by `Rule as usize`.
    rules: Vec<Regex>,
}

impl Grammar {
    /// Returns the process-wide grammar for the character universe.
    #[must_use]
    pub fn get(charset: Charset) -> &'static Grammar {
        match charset {
            Charset::Uri => &URI_GRAMMAR,
            Charset::Iri => &IRI_GRAMMAR,
        }
    }

    /// Compiles all the rules.
    fn compile(charset: Charset) -> Self {
        let rules = Rule::ALL
            .iter()
            .map(|&rule| {
                let anchored = format!("^(?:{})$", rule.pattern(charset));
                Regex::new(&anchored).unwrap_or_else(|e| {
                    panic!("[consistency] the rule `{rule}` must be a valid pattern: {e}")
                })
            })
            .collect();
        Self { charset, rules }
    }

    /// Returns the character universe of the grammar.
    #[inline]
    #[must_use]
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Returns the compiled expression for the rule.
    #[inline]
    fn regex(&self, rule: Rule) -> &Regex {
        &self.rules[rule as usize]
    }

    /// Returns `true` if the entire string matches the rule.
    #[inline]
    #[must_use]
    pub fn is_match(&self, rule: Rule, s: &str) -> bool {
        self.regex(rule).is_match(s)
    }

    /// Matches the entire string against the rule and returns the named
    /// capture groups.
    ///
    /// Returns `None` if the string does not match.
    #[must_use]
    pub fn match_rule<'t>(&self, rule: Rule, s: &'t str) -> Option<Captures<'t>> {
        self.regex(rule).captures(s).map(Captures)
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("charset", &self.charset)
            .finish_non_exhaustive()
    }
}

/// Returns the compiled grammar for the spec.
#[inline]
#[must_use]
pub fn get<S: Spec>() -> &'static Grammar {
    S::grammar()
}

/// Named capture groups of a successful match.
#[derive(Debug)]
pub struct Captures<'t>(regex::Captures<'t>);

impl<'t> Captures<'t> {
    /// Returns the substring captured by the named group.
    ///
    /// Returns `None` if the group did not take part in the match.
    /// Note that this can be `Some("")` when a group matched an empty string.
    #[inline]
    #[must_use]
    pub fn name(&self, group: &str) -> Option<&'t str> {
        self.0.name(group).map(|m| m.as_str())
    }
}
