//! Utilities.
#![allow(dead_code)]

/// Hosts valid in both URIs and IRIs.
pub const VALID_HOSTS: &[&str] = &[
    "[21DA:00D3:0000:2F3B:02AA:00FF:FE28:9C5A]",
    "[::1]",
    "[::1%25lo]",
    "[FF02:0:0:0:0:0:0:2%25en01]",
    "[FF02:30:0:0:0:0:0:5%25en1]",
    "[21DA:D3:0:2F3B:2AA:FF:FE28:9C5A]",
    "[FE80::2AA:FF:FE9A:4CA2]",
    "[FF02::2]",
    "[FF02:3::5]",
    "[FF02:0:0:0:0:0:0:2]",
    "[FF02:30:0:0:0:0:0:5]",
    "127.0.0.1",
    "www.example.com",
    "localhost",
    "http-bin.org",
];

/// Hosts invalid in URIs.
pub const INVALID_HOSTS: &[&str] = &[
    "[FF02::3::5]",
    "[FADF:01]",
    "[FADF:01%en0]",
    "[FADF::01%en0]",
    "[FADF::01%]",
    "[FADF::01%25]",
    "localhost:80:80:80",
    "\u{2603}",
];

/// Spellings of the same scheme.
pub const EQUIVALENT_SCHEMES: &[&str] = &["https", "HTTPS", "HttPs", "hTTpS", "HtTpS"];

/// Spellings of the same host name.
pub const EQUIVALENT_HOSTNAMES: &[&str] = &[
    "example.com",
    "eXample.com",
    "example.COM",
    "EXAMPLE.com",
    "ExAMPLE.com",
    "eXAMPLE.com",
    "exaMPLE.com",
    "EXAMPLE.COM",
];

/// Templates of references with a host, `{}` replaced by the host.
const HOST_TEMPLATES: &[&str] = &[
    "http://{}",
    "ftp://{}:21",
    "ssh://user:pass@{}:22",
    "http://{}/path/to/resource",
    "http://{}/path/to/resource?key=value",
    "https://user:pass@{}:443/path/to/resource?key=value#fragment",
    "//{}",
];

/// Returns references built from the templates, with the hosts.
pub fn references_with_hosts<'a>(hosts: &'a [&'a str]) -> impl Iterator<Item = (String, &'a str)> + 'a {
    hosts.iter().flat_map(|host| {
        HOST_TEMPLATES
            .iter()
            .map(move |template| (template.replace("{}", host), *host))
    })
}
