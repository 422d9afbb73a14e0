use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Size of the buffer a reply is received into; longer datagrams are cut.
    #[serde(default = "default_receive_buffer_size")]
    pub receive_buffer_size: usize,
}

impl QueryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            receive_buffer_size: default_receive_buffer_size(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_receive_buffer_size() -> usize {
    1024
}
