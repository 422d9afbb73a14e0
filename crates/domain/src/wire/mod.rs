//! DNS wire format (RFC 1035 §4).
//!
//! Every decoder takes the whole message plus a start offset and hands back
//! the decoded value with the offset to continue from. Nothing holds a
//! mutable cursor, so following a compression pointer backwards cannot
//! disturb the caller's position.

mod header;
mod message;
mod name;
mod question;
mod record;

pub use header::{decode_header, encode_header, HEADER_LEN};
pub use message::{decode_message, decode_records, encode_message, encode_query};
pub use name::{decode_name, encode_name, MAX_LABEL_LEN, MAX_NAME_WIRE_LEN};
pub use question::{decode_question, encode_question};
pub use record::{decode_resource_record, encode_resource_record};

use crate::DomainError;

pub(crate) fn read_u16(message: &[u8], offset: usize) -> Result<u16, DomainError> {
    message
        .get(offset..offset + 2)
        .map(|b| u16::from_be_bytes([b[0], b[1]]))
        .ok_or_else(|| {
            DomainError::malformed(format!("expected 2 bytes at offset {}", offset))
        })
}

pub(crate) fn read_u32(message: &[u8], offset: usize) -> Result<u32, DomainError> {
    message
        .get(offset..offset + 4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| {
            DomainError::malformed(format!("expected 4 bytes at offset {}", offset))
        })
}
