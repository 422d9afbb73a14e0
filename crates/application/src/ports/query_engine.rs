use async_trait::async_trait;
use ferrous_dig_domain::{DomainError, Header, Question};

/// One request/reply exchange with a single name server.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    /// Serializes `header` and `question`, sends them to `server_address:port`
    /// and returns the raw reply bytes, trimmed to the received length.
    ///
    /// `server_address` must be an IP literal. No retries are made.
    async fn execute(
        &self,
        server_address: &str,
        port: u16,
        header: &Header,
        question: &Question,
    ) -> Result<Vec<u8>, DomainError>;
}
