use ferrous_dig_domain::DnsMessage;
use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct LookupOutcome {
    /// Address the real query was sent to.
    pub server: IpAddr,
    /// True when `server` came from a bootstrap lookup of a hostname.
    pub bootstrapped: bool,
    pub message: DnsMessage,
}
