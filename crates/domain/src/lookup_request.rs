use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Everything the user asked for on the command line.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    /// Domain name, or an address when `reverse` is set.
    pub target: Arc<str>,
    /// Name server as an IP literal or a hostname.
    pub server: Arc<str>,
    pub port: u16,
    pub recursion_desired: bool,
    pub reverse: bool,
    pub ipv6: bool,
}

impl LookupRequest {
    pub fn new(target: impl Into<Arc<str>>, server: impl Into<Arc<str>>) -> Self {
        Self {
            target: target.into(),
            server: server.into(),
            port: DEFAULT_DNS_PORT,
            recursion_desired: false,
            reverse: false,
            ipv6: false,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_recursion(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_ipv6(mut self, ipv6: bool) -> Self {
        self.ipv6 = ipv6;
        self
    }
}
