use serde::{Deserialize, Serialize};

/// Resolver used only to look up the address of a name server given by hostname.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BootstrapConfig {
    #[serde(default = "default_bootstrap_server")]
    pub server: String,

    #[serde(default = "default_bootstrap_port")]
    pub port: u16,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            server: default_bootstrap_server(),
            port: default_bootstrap_port(),
        }
    }
}

fn default_bootstrap_server() -> String {
    "1.1.1.1".to_string()
}

fn default_bootstrap_port() -> u16 {
    53
}
