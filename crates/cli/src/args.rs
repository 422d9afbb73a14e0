use clap::Parser;
use ferrous_dig_domain::{CliOverrides, LookupRequest, DEFAULT_DNS_PORT};

#[derive(Parser, Debug)]
#[command(name = "ferrous-dig")]
#[command(version)]
#[command(about = "Ferrous Dig - send one DNS query over UDP and print the reply")]
pub struct Cli {
    /// Ask the server to recurse (sets RD)
    #[arg(short = 'r')]
    pub recursion: bool,

    /// Reverse lookup: TARGET is an IPv4 or IPv6 address
    #[arg(short = 'x')]
    pub reverse: bool,

    /// Query AAAA instead of A
    #[arg(short = '6')]
    pub ipv6: bool,

    /// Name server, as an IP address or a hostname
    #[arg(short = 's', value_name = "SERVER")]
    pub server: String,

    /// Name server port
    #[arg(short = 'p', value_name = "PORT", default_value_t = DEFAULT_DNS_PORT)]
    pub port: u16,

    /// Domain name to look up (or address with -x)
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn lookup_request(&self) -> LookupRequest {
        LookupRequest::new(self.target.as_str(), self.server.as_str())
            .with_port(self.port)
            .with_recursion(self.recursion)
            .with_reverse(self.reverse)
            .with_ipv6(self.ipv6)
    }

    pub fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            log_level: self.log_level.clone(),
        }
    }
}
