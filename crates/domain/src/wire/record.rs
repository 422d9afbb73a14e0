use super::name::{decode_name, encode_name};
use super::{read_u16, read_u32};
use crate::dns_record::{RecordData, RecordType, ResourceRecord};
use crate::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type, class, TTL and rdlength.
const FIXED_FIELDS_LEN: usize = 10;

/// Decodes one resource record starting at `offset`.
///
/// The returned offset is always the end of the rdata as declared by
/// rdlength, so consecutive records can be read from one running offset.
pub fn decode_resource_record(
    message: &[u8],
    offset: usize,
) -> Result<(ResourceRecord, usize), DomainError> {
    let (name, pos) = decode_name(message, offset)?;

    let rtype = read_u16(message, pos)?;
    let class = read_u16(message, pos + 2)?;
    let ttl = read_u32(message, pos + 4)?;
    let rdlength = read_u16(message, pos + 8)?;

    let rdata_start = pos + FIXED_FIELDS_LEN;
    let rdata_end = rdata_start + rdlength as usize;
    let raw = message.get(rdata_start..rdata_end).ok_or_else(|| {
        DomainError::malformed(format!(
            "rdata of {} bytes at offset {} runs past end of message ({} bytes)",
            rdlength,
            rdata_start,
            message.len()
        ))
    })?;

    let rdata = match RecordType::from_u16(rtype) {
        Some(RecordType::A) if raw.len() == 4 => {
            RecordData::Ipv4(Ipv4Addr::new(raw[0], raw[1], raw[2], raw[3]))
        }
        Some(RecordType::AAAA) if raw.len() == 16 => {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(raw);
            RecordData::Ipv6(Ipv6Addr::from(octets))
        }
        Some(rt) if rt.has_name_rdata() => {
            // the name may point back into the message, so decode against all of it
            let (target, _) = decode_name(message, rdata_start)?;
            RecordData::DomainName(target)
        }
        _ => RecordData::Opaque(raw.to_vec()),
    };

    Ok((
        ResourceRecord {
            name,
            rtype,
            class,
            ttl,
            rdlength,
            rdata,
        },
        rdata_end,
    ))
}

/// Encodes a record without name compression.
pub fn encode_resource_record(record: &ResourceRecord) -> Result<Vec<u8>, DomainError> {
    let rdata = match &record.rdata {
        RecordData::Ipv4(addr) => addr.octets().to_vec(),
        RecordData::Ipv6(addr) => addr.octets().to_vec(),
        RecordData::DomainName(name) => encode_name(name)?,
        RecordData::Opaque(bytes) => bytes.clone(),
    };
    let rdlength = u16::try_from(rdata.len()).map_err(|_| {
        DomainError::malformed(format!("rdata of {} bytes does not fit rdlength", rdata.len()))
    })?;

    let mut buf = encode_name(&record.name)?;
    buf.extend_from_slice(&record.rtype.to_be_bytes());
    buf.extend_from_slice(&record.class.to_be_bytes());
    buf.extend_from_slice(&record.ttl.to_be_bytes());
    buf.extend_from_slice(&rdlength.to_be_bytes());
    buf.extend_from_slice(&rdata);
    Ok(buf)
}
