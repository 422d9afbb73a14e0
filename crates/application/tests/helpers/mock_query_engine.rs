#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_dig_application::ports::QueryEngine;
use ferrous_dig_domain::dns_message::{FLAG_QR, FLAG_RA};
use ferrous_dig_domain::wire::encode_message;
use ferrous_dig_domain::{
    DnsMessage, DomainError, Header, Question, RecordData, RecordType, ResourceRecord,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub server: String,
    pub port: u16,
    pub header: Header,
    pub question: Question,
}

#[derive(Clone)]
enum Scripted {
    /// Encoded with the id of the incoming query.
    Reply(DnsMessage),
    /// Encoded with an id that differs from the query's.
    WrongId(DnsMessage),
    Raw(Vec<u8>),
    Fail(DomainError),
}

/// Answers per server address and records every call.
#[derive(Clone, Default)]
pub struct MockQueryEngine {
    scripted: Arc<Mutex<HashMap<String, Scripted>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockQueryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reply(&self, server: &str, reply: DnsMessage) {
        self.scripted
            .lock()
            .unwrap()
            .insert(server.to_string(), Scripted::Reply(reply));
    }

    pub fn set_raw_reply(&self, server: &str, bytes: Vec<u8>) {
        self.scripted
            .lock()
            .unwrap()
            .insert(server.to_string(), Scripted::Raw(bytes));
    }

    pub fn set_reply_with_wrong_id(&self, server: &str, reply: DnsMessage) {
        self.scripted
            .lock()
            .unwrap()
            .insert(server.to_string(), Scripted::WrongId(reply));
    }

    pub fn set_error(&self, server: &str, error: DomainError) {
        self.scripted
            .lock()
            .unwrap()
            .insert(server.to_string(), Scripted::Fail(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl QueryEngine for MockQueryEngine {
    async fn execute(
        &self,
        server_address: &str,
        port: u16,
        header: &Header,
        question: &Question,
    ) -> Result<Vec<u8>, DomainError> {
        self.calls.lock().unwrap().push(RecordedCall {
            server: server_address.to_string(),
            port,
            header: *header,
            question: question.clone(),
        });

        let scripted = self
            .scripted
            .lock()
            .unwrap()
            .get(server_address)
            .cloned()
            .ok_or_else(|| DomainError::TimeoutOrNoData {
                server: server_address.to_string(),
            })?;

        match scripted {
            Scripted::Reply(mut reply) => {
                reply.header.id = header.id;
                reply.questions = vec![question.clone()];
                Ok(encode_message(&reply).unwrap())
            }
            Scripted::WrongId(mut reply) => {
                reply.header.id = header.id.wrapping_add(1);
                Ok(encode_message(&reply).unwrap())
            }
            Scripted::Raw(bytes) => Ok(bytes),
            Scripted::Fail(err) => Err(err),
        }
    }
}

/// Recursive-looking reply whose answer section carries `addresses` for `name`.
pub fn a_reply(name: &str, addresses: &[IpAddr]) -> DnsMessage {
    let answers = addresses
        .iter()
        .map(|addr| match addr {
            IpAddr::V4(v4) => ResourceRecord::new(name, RecordType::A, 300, RecordData::Ipv4(*v4)),
            IpAddr::V6(v6) => {
                ResourceRecord::new(name, RecordType::AAAA, 300, RecordData::Ipv6(*v6))
            }
        })
        .collect();

    DnsMessage {
        header: Header {
            flags: FLAG_QR | FLAG_RA,
            ..Header::default()
        },
        questions: vec![],
        answers,
        authority: vec![],
        additional: vec![],
    }
}
