use super::{RecordClass, RecordType};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Decoded rdata, tagged by what the record type says it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    DomainName(String),
    Opaque(Vec<u8>),
}

impl RecordData {
    pub fn ip_addr(&self) -> Option<std::net::IpAddr> {
        match self {
            RecordData::Ipv4(addr) => Some((*addr).into()),
            RecordData::Ipv6(addr) => Some((*addr).into()),
            RecordData::DomainName(_) | RecordData::Opaque(_) => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Ipv4(addr) => write!(f, "{}", addr),
            RecordData::Ipv6(addr) => write!(f, "{}", addr),
            RecordData::DomainName(name) => write!(f, "{}", name),
            // RFC 3597 generic rdata
            RecordData::Opaque(bytes) => {
                write!(f, "\\# {}", bytes.len())?;
                if !bytes.is_empty() {
                    write!(f, " ")?;
                    for b in bytes {
                        write!(f, "{:02x}", b)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    /// Raw type code; unknown types are kept as-is.
    pub rtype: u16,

    pub class: u16,

    pub ttl: u32,

    /// Length of the rdata as it appeared on the wire.
    pub rdlength: u16,

    pub rdata: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, record_type: RecordType, ttl: u32, rdata: RecordData) -> Self {
        let rdlength = match &rdata {
            RecordData::Ipv4(_) => 4,
            RecordData::Ipv6(_) => 16,
            RecordData::Opaque(bytes) => bytes.len() as u16,
            // recomputed when encoded
            RecordData::DomainName(_) => 0,
        };
        Self {
            name: name.into(),
            rtype: record_type.to_u16(),
            class: RecordClass::IN.to_u16(),
            ttl,
            rdlength,
            rdata,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn record_class(&self) -> Option<RecordClass> {
        RecordClass::from_u16(self.class)
    }
}
