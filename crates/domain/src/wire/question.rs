use super::name::{decode_name, encode_name};
use super::read_u16;
use crate::dns_message::Question;
use crate::DomainError;

pub fn encode_question(question: &Question) -> Result<Vec<u8>, DomainError> {
    let mut buf = encode_name(&question.qname)?;
    buf.extend_from_slice(&question.qtype.to_be_bytes());
    buf.extend_from_slice(&question.qclass.to_be_bytes());
    Ok(buf)
}

pub fn decode_question(message: &[u8], offset: usize) -> Result<(Question, usize), DomainError> {
    let (qname, pos) = decode_name(message, offset)?;
    let qtype = read_u16(message, pos)?;
    let qclass = read_u16(message, pos + 2)?;

    Ok((
        Question {
            qname,
            qtype,
            qclass,
        },
        pos + 4,
    ))
}
