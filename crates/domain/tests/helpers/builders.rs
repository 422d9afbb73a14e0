#![allow(dead_code)]
use ferrous_dig_domain::dns_message::{FLAG_QR, FLAG_RA, FLAG_RD};
use ferrous_dig_domain::{DnsMessage, Header, Question, RecordData, RecordType, ResourceRecord};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Builds reply messages for codec tests.
pub struct ReplyBuilder {
    message: DnsMessage,
}

impl ReplyBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            message: DnsMessage {
                header: Header {
                    id,
                    flags: FLAG_QR | FLAG_RD | FLAG_RA,
                    ..Header::default()
                },
                questions: vec![],
                answers: vec![],
                authority: vec![],
                additional: vec![],
            },
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.message.header.flags = flags;
        self
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.message.questions.push(Question::new(name, record_type));
        self
    }

    pub fn answer_a(mut self, name: &str, addr: Ipv4Addr, ttl: u32) -> Self {
        self.message
            .answers
            .push(ResourceRecord::new(name, RecordType::A, ttl, RecordData::Ipv4(addr)));
        self
    }

    pub fn answer_aaaa(mut self, name: &str, addr: Ipv6Addr, ttl: u32) -> Self {
        self.message
            .answers
            .push(ResourceRecord::new(name, RecordType::AAAA, ttl, RecordData::Ipv6(addr)));
        self
    }

    pub fn answer_cname(mut self, name: &str, target: &str, ttl: u32) -> Self {
        self.message.answers.push(ResourceRecord::new(
            name,
            RecordType::CNAME,
            ttl,
            RecordData::DomainName(target.to_string()),
        ));
        self
    }

    pub fn authority_ns(mut self, zone: &str, ns: &str, ttl: u32) -> Self {
        self.message.authority.push(ResourceRecord::new(
            zone,
            RecordType::NS,
            ttl,
            RecordData::DomainName(ns.to_string()),
        ));
        self
    }

    pub fn additional_a(mut self, name: &str, addr: Ipv4Addr, ttl: u32) -> Self {
        self.message
            .additional
            .push(ResourceRecord::new(name, RecordType::A, ttl, RecordData::Ipv4(addr)));
        self
    }

    pub fn build(self) -> DnsMessage {
        self.message
    }

    pub fn to_bytes(self) -> Vec<u8> {
        ferrous_dig_domain::wire::encode_message(&self.message).unwrap()
    }
}
