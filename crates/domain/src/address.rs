//! Reverse-lookup name construction for IPv4 and IPv6 addresses.

use crate::DomainError;
use std::net::Ipv6Addr;

const IPV4_REVERSE_SUFFIX: &str = "in-addr.arpa";
const IPV6_REVERSE_SUFFIX: &str = "ip6.arpa";

/// Expands an IPv6 address to eight colon-separated groups of four lowercase
/// hex digits. Already-expanded input comes back unchanged.
pub fn expand_ipv6(address: &str) -> Result<String, DomainError> {
    let ip: Ipv6Addr = address
        .parse()
        .map_err(|_| DomainError::InvalidIpAddress(address.to_string()))?;

    let groups: Vec<String> = ip.segments().iter().map(|s| format!("{:04x}", s)).collect();
    Ok(groups.join(":"))
}

/// `192.0.2.1` becomes `1.2.0.192.in-addr.arpa`.
///
/// Works on the dotted text as given, so partial prefixes such as `10.1`
/// reverse to `1.10.in-addr.arpa`.
pub fn reverse_ipv4(address: &str) -> String {
    let mut groups: Vec<&str> = address.split('.').collect();
    groups.reverse();
    format!("{}.{}", groups.join("."), IPV4_REVERSE_SUFFIX)
}

pub fn reverse_ipv6(address: &str) -> Result<String, DomainError> {
    let expanded = expand_ipv6(address)?;
    let nibbles: Vec<String> = expanded
        .chars()
        .filter(|c| *c != ':')
        .rev()
        .map(String::from)
        .collect();
    Ok(format!("{}.{}", nibbles.join("."), IPV6_REVERSE_SUFFIX))
}

/// Picks the reverse namespace from the address text: anything with a colon is IPv6.
pub fn select_reverse(address: &str) -> Result<String, DomainError> {
    if address.contains(':') {
        reverse_ipv6(address)
    } else {
        Ok(reverse_ipv4(address))
    }
}
