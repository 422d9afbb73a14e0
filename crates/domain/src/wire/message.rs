use super::header::{decode_header, encode_header};
use super::question::{decode_question, encode_question};
use super::record::{decode_resource_record, encode_resource_record};
use crate::dns_message::{DnsMessage, Header, Question};
use crate::dns_record::ResourceRecord;
use crate::DomainError;

/// Serializes a query: header followed by its single question.
pub fn encode_query(header: &Header, question: &Question) -> Result<Vec<u8>, DomainError> {
    let question_bytes = encode_question(question)?;
    let mut buf = Vec::with_capacity(super::HEADER_LEN + question_bytes.len());
    buf.extend_from_slice(&encode_header(header));
    buf.extend_from_slice(&question_bytes);
    Ok(buf)
}

/// Serializes a whole message without name compression.
///
/// Section counts are taken from the section lengths, not from `message.header`.
pub fn encode_message(message: &DnsMessage) -> Result<Vec<u8>, DomainError> {
    let count = |len: usize, section: &str| {
        u16::try_from(len)
            .map_err(|_| DomainError::malformed(format!("too many {} entries: {}", section, len)))
    };

    let header = Header {
        qd_count: count(message.questions.len(), "question")?,
        an_count: count(message.answers.len(), "answer")?,
        ns_count: count(message.authority.len(), "authority")?,
        ar_count: count(message.additional.len(), "additional")?,
        ..message.header
    };

    let mut buf = encode_header(&header).to_vec();
    for question in &message.questions {
        buf.extend_from_slice(&encode_question(question)?);
    }
    for record in message
        .answers
        .iter()
        .chain(&message.authority)
        .chain(&message.additional)
    {
        buf.extend_from_slice(&encode_resource_record(record)?);
    }
    Ok(buf)
}

/// Decodes exactly `count` records starting at `offset`.
pub fn decode_records(
    message: &[u8],
    offset: usize,
    count: u16,
) -> Result<(Vec<ResourceRecord>, usize), DomainError> {
    let mut records = Vec::with_capacity(count as usize);
    let mut pos = offset;
    for _ in 0..count {
        let (record, next) = decode_resource_record(message, pos)?;
        records.push(record);
        pos = next;
    }
    Ok((records, pos))
}

/// Decodes a whole message, honouring the four section counts in the header.
///
/// Bytes after the last counted record are ignored.
pub fn decode_message(message: &[u8]) -> Result<DnsMessage, DomainError> {
    let (header, mut pos) = decode_header(message)?;

    let mut questions = Vec::with_capacity(header.qd_count as usize);
    for _ in 0..header.qd_count {
        let (question, next) = decode_question(message, pos)?;
        questions.push(question);
        pos = next;
    }

    let (answers, pos) = decode_records(message, pos, header.an_count)?;
    let (authority, pos) = decode_records(message, pos, header.ns_count)?;
    let (additional, _) = decode_records(message, pos, header.ar_count)?;

    Ok(DnsMessage {
        header,
        questions,
        answers,
        authority,
        additional,
    })
}
