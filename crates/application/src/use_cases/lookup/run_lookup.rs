use super::LookupOutcome;
use crate::ports::QueryEngine;
use ferrous_dig_domain::address::select_reverse;
use ferrous_dig_domain::config::BootstrapConfig;
use ferrous_dig_domain::wire::decode_message;
use ferrous_dig_domain::{
    DnsMessage, DomainError, Header, LookupRequest, QueryOptions, Question, RecordType,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};

/// Drives one lookup: validate, resolve the server if it is a hostname,
/// send the real query and decode the reply.
pub struct LookupUseCase {
    engine: Arc<dyn QueryEngine>,
    bootstrap: BootstrapConfig,
}

impl LookupUseCase {
    pub fn new(engine: Arc<dyn QueryEngine>, bootstrap: BootstrapConfig) -> Self {
        Self { engine, bootstrap }
    }

    pub async fn execute(&self, request: &LookupRequest) -> Result<LookupOutcome, DomainError> {
        let question = Self::build_question(request)?;

        let (server, bootstrapped) = match request.server.parse::<IpAddr>() {
            Ok(ip) => (ip, false),
            Err(_) => (self.resolve_server(&request.server).await?, true),
        };

        let header = Header::query(
            fastrand::u16(..),
            QueryOptions::normal(request.recursion_desired),
        );

        debug!(
            server = %server,
            port = request.port,
            qname = %question.qname,
            qtype = ?question.record_type(),
            rd = header.recursion_desired(),
            "Sending query"
        );

        let message = self
            .exchange(&server.to_string(), request.port, &header, &question)
            .await?;

        info!(
            server = %server,
            answers = message.answers.len(),
            rcode = message.header.rcode(),
            "Lookup complete"
        );

        Ok(LookupOutcome {
            server,
            bootstrapped,
            message,
        })
    }

    /// Picks the query name and type from the request flags.
    fn build_question(request: &LookupRequest) -> Result<Question, DomainError> {
        if request.reverse && request.ipv6 {
            return Err(DomainError::ConflictingFlags("-x", "-6"));
        }

        if request.reverse {
            let qname = select_reverse(&request.target)?;
            return Ok(Question::new(qname, RecordType::PTR));
        }

        let record_type = if request.ipv6 {
            RecordType::AAAA
        } else {
            RecordType::A
        };
        Ok(Question::new(request.target.as_ref(), record_type))
    }

    async fn resolve_server(&self, hostname: &str) -> Result<IpAddr, DomainError> {
        let header = Header::query(fastrand::u16(..), QueryOptions::server_resolution());
        let question = Question::new(hostname, RecordType::A);

        debug!(
            hostname = %hostname,
            resolver = %self.bootstrap.server,
            "Resolving name server address"
        );

        let reply = self
            .exchange(&self.bootstrap.server, self.bootstrap.port, &header, &question)
            .await?;

        let address = reply
            .first_answer_address()
            .ok_or_else(|| DomainError::InvalidServerAddress(hostname.to_string()))?;

        debug!(hostname = %hostname, address = %address, "Name server resolved");
        Ok(address)
    }

    async fn exchange(
        &self,
        server: &str,
        port: u16,
        header: &Header,
        question: &Question,
    ) -> Result<DnsMessage, DomainError> {
        let bytes = self.engine.execute(server, port, header, question).await?;
        let message = decode_message(&bytes)?;

        if message.header.id != header.id {
            return Err(DomainError::MalformedMessage(format!(
                "reply id {} does not match query id {}",
                message.header.id, header.id
            )));
        }

        Ok(message)
    }
}
