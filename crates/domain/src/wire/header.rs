use super::read_u16;
use crate::dns_message::Header;
use crate::DomainError;

pub const HEADER_LEN: usize = 12;

pub fn encode_header(header: &Header) -> [u8; HEADER_LEN] {
    let mut buf = [0u8; HEADER_LEN];
    buf[0..2].copy_from_slice(&header.id.to_be_bytes());
    buf[2..4].copy_from_slice(&header.flags.to_be_bytes());
    buf[4..6].copy_from_slice(&header.qd_count.to_be_bytes());
    buf[6..8].copy_from_slice(&header.an_count.to_be_bytes());
    buf[8..10].copy_from_slice(&header.ns_count.to_be_bytes());
    buf[10..12].copy_from_slice(&header.ar_count.to_be_bytes());
    buf
}

/// Decodes the fixed header at the start of `message`, returning it with the
/// offset of the question section.
pub fn decode_header(message: &[u8]) -> Result<(Header, usize), DomainError> {
    if message.len() < HEADER_LEN {
        return Err(DomainError::malformed(format!(
            "message is {} bytes, shorter than the {}-byte header",
            message.len(),
            HEADER_LEN
        )));
    }

    let header = Header {
        id: read_u16(message, 0)?,
        flags: read_u16(message, 2)?,
        qd_count: read_u16(message, 4)?,
        an_count: read_u16(message, 6)?,
        ns_count: read_u16(message, 8)?,
        ar_count: read_u16(message, 10)?,
    };

    Ok((header, HEADER_LEN))
}
