//! In-memory form of a DNS message: header, question and the three record sections.

use crate::dns_record::{RecordClass, RecordType, ResourceRecord};

pub const FLAG_QR: u16 = 1 << 15;
pub const OPCODE_MASK: u16 = 0x7800;
pub const OPCODE_SHIFT: u16 = 11;
pub const FLAG_AA: u16 = 1 << 10;
pub const FLAG_TC: u16 = 1 << 9;
pub const FLAG_RD: u16 = 1 << 8;
pub const FLAG_RA: u16 = 1 << 7;
pub const RCODE_MASK: u16 = 0x000F;

/// Why a query is being sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// The lookup the user asked for.
    Normal,
    /// Bootstrap lookup of the name server's own address.
    ServerResolution,
}

/// Inputs that decide the outgoing header flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub recursion_desired: bool,
    pub kind: QueryKind,
}

impl QueryOptions {
    pub fn normal(recursion_desired: bool) -> Self {
        Self {
            recursion_desired,
            kind: QueryKind::Normal,
        }
    }

    pub fn server_resolution() -> Self {
        Self {
            recursion_desired: true,
            kind: QueryKind::ServerResolution,
        }
    }

    /// Server resolution always asks for recursion, whatever the user requested.
    pub fn effective_recursion(&self) -> bool {
        match self.kind {
            QueryKind::ServerResolution => true,
            QueryKind::Normal => self.recursion_desired,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Header {
    /// Standard query header carrying a single question.
    pub fn query(id: u16, options: QueryOptions) -> Self {
        let flags = if options.effective_recursion() {
            FLAG_RD
        } else {
            0
        };
        Self {
            id,
            flags,
            qd_count: 1,
            ..Self::default()
        }
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & OPCODE_MASK) >> OPCODE_SHIFT) as u8
    }

    pub fn authoritative(&self) -> bool {
        self.flags & FLAG_AA != 0
    }

    pub fn truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RD != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RA != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(qname: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            qname: qname.into(),
            qtype: record_type.to_u16(),
            qclass: RecordClass::IN.to_u16(),
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }
}

/// A fully decoded reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsMessage {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl DnsMessage {
    /// First address carried by the answer section, skipping CNAMEs and the like.
    pub fn first_answer_address(&self) -> Option<std::net::IpAddr> {
        self.answers.iter().find_map(|rr| rr.rdata.ip_addr())
    }
}
