pub mod bootstrap;
pub mod errors;
pub mod logging;
pub mod query;
pub mod root;

pub use bootstrap::BootstrapConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query::QueryConfig;
pub use root::{CliOverrides, Config};
