//! IPv4/FQDN classification of cleaned URLs.
//!
//! Each cleaned URL is bucketed as an IPv4 literal, an FQDN-bearing URL, or
//! discarded. FQDN recognition is Public Suffix List-aware via `psl`: the
//! host must split into a registrable domain rooted at a known suffix. A
//! valid dotted quad never carries a public suffix, so the strict `Ipv4Addr`
//! parse of the host covers exactly the "domain without FQDN" case. No IPv6.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use psl::Psl;

/// Classification of a single cleaned URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlClass {
    /// The host is a strict IPv4 dotted-quad literal.
    Ip(Ipv4Addr),
    /// The host is a public-suffix-rooted domain; carries the lower-cased
    /// FQDN including subdomains.
    Fqdn(String),
    /// Neither a valid FQDN nor a valid IPv4 literal; discarded.
    Invalid,
}

/// Derives the host portion of a cleaned URL.
///
/// Cuts at the first `/`, `?` or `#`, drops a userinfo prefix, and drops a
/// trailing all-digit port. Cleaned URLs carry no scheme, so the host starts
/// at the beginning of the string.
fn host_of(url: &str) -> &str {
    let end = url.find(['/', '?', '#']).unwrap_or(url.len());
    let mut host = &url[..end];
    if let Some(at) = host.rfind('@') {
        host = &host[at + 1..];
    }
    if let Some(colon) = host.rfind(':') {
        let port = &host[colon + 1..];
        if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) {
            host = &host[..colon];
        }
    }
    host
}

/// Classifies a cleaned URL.
///
/// The host is tried as a strict IPv4 literal first; otherwise it must carry
/// a registrable domain rooted at a suffix the Public Suffix List knows to
/// count as an FQDN. The FQDN keeps all subdomain labels, lower-cased (the
/// list itself is lower-case, so matching happens on the lowered host).
pub fn classify(extractor: &psl::List, url: &str) -> UrlClass {
    let host = host_of(url);
    if host.is_empty() {
        return UrlClass::Invalid;
    }
    if let Ok(ip) = host.parse::<Ipv4Addr>() {
        return UrlClass::Ip(ip);
    }
    let host = host.to_lowercase();
    match extractor.domain(host.as_bytes()) {
        Some(domain) if domain.suffix().is_known() => UrlClass::Fqdn(host),
        _ => UrlClass::Invalid,
    }
}

/// The three disjoint allowlist buckets accumulated across a run.
///
/// `BTreeSet` gives set semantics plus the documented output orders for
/// free: lexicographic for the string sets, numeric for `Ipv4Addr` (its
/// `Ord` compares the address value).
#[derive(Debug, Default)]
pub struct ClassifiedSets {
    /// Cleaned URLs whose host is a valid FQDN.
    pub non_ips: BTreeSet<String>,
    /// IPv4 literals.
    pub ips: BTreeSet<Ipv4Addr>,
    /// Lower-cased FQDNs.
    pub fqdns: BTreeSet<String>,
    /// Count of discarded URLs (not logged individually).
    pub invalid: usize,
}

impl ClassifiedSets {
    /// Classifies `url` and files it into the matching bucket.
    ///
    /// An FQDN-bearing URL lands in two sets: the original cleaned URL in
    /// `non_ips` and the lower-cased FQDN in `fqdns`.
    pub fn insert(&mut self, extractor: &psl::List, url: &str) {
        match classify(extractor, url) {
            UrlClass::Ip(ip) => {
                self.ips.insert(ip);
            }
            UrlClass::Fqdn(fqdn) => {
                self.non_ips.insert(url.to_string());
                self.fqdns.insert(fqdn);
            }
            UrlClass::Invalid => {
                self.invalid += 1;
            }
        }
    }

    /// `true` when there is no allowlist content at all.
    ///
    /// `fqdns` is intentionally not consulted: it can only be non-empty when
    /// `non_ips` is.
    pub fn is_empty(&self) -> bool {
        self.non_ips.is_empty() && self.ips.is_empty()
    }
}
