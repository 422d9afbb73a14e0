//! ferrous-dig Domain Layer
pub mod address;
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;
pub mod lookup_request;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{DnsMessage, Header, QueryKind, QueryOptions, Question};
pub use dns_record::{RecordClass, RecordData, RecordType, ResourceRecord};
pub use errors::DomainError;
pub use lookup_request::{LookupRequest, DEFAULT_DNS_PORT};
