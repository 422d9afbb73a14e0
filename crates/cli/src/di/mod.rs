use ferrous_dig_application::use_cases::LookupUseCase;
use ferrous_dig_domain::Config;
use ferrous_dig_infrastructure::dns::UdpQueryEngine;
use std::sync::Arc;
use tracing::debug;

pub struct LookupServices {
    pub lookup: LookupUseCase,
}

impl LookupServices {
    pub fn new(config: &Config) -> Self {
        debug!(
            timeout_ms = config.query.timeout().as_millis() as u64,
            receive_buffer_size = config.query.receive_buffer_size,
            "Initializing UDP query engine"
        );

        let engine = Arc::new(UdpQueryEngine::from_config(&config.query));
        let lookup = LookupUseCase::new(engine, config.bootstrap.clone());

        Self { lookup }
    }
}
