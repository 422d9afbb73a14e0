use crate::DomainError;

pub const MAX_LABEL_LEN: usize = 63;

/// RFC 1035 §2.3.4, terminator included.
pub const MAX_NAME_WIRE_LEN: usize = 255;

const POINTER_MASK: u8 = 0xC0;

/// Encodes a dotted name as length-prefixed labels followed by the root byte.
///
/// Empty segments (leading, trailing or doubled dots) are skipped, so
/// `"example.com."` and `"example.com"` encode identically.
pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(name.len() + 2);

    for label in name.split('.').filter(|label| !label.is_empty()) {
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::LabelTooLong {
                label: label.to_string(),
                len: label.len(),
            });
        }
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);

    if buf.len() > MAX_NAME_WIRE_LEN {
        return Err(DomainError::NameTooLong(buf.len()));
    }

    Ok(buf)
}

/// Decodes the name starting at `offset`, following compression pointers.
///
/// Returns the dotted name (no trailing dot, empty for the root) and the
/// offset where the caller should continue: right after the two bytes of the
/// first pointer if one was followed, otherwise right after the root byte.
///
/// Pointer hops are capped at the message length, which no well-formed
/// message can reach, so pointer loops fail instead of spinning.
pub fn decode_name(message: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
    let mut name = String::new();
    let mut pos = offset;
    let mut resume_at: Option<usize> = None;
    let mut hops = 0usize;

    loop {
        let len = *message.get(pos).ok_or_else(|| {
            DomainError::malformed(format!("name at offset {} runs past end of message", offset))
        })?;

        match len & POINTER_MASK {
            0x00 => {
                if len == 0 {
                    pos += 1;
                    break;
                }

                let start = pos + 1;
                let end = start + len as usize;
                let label = message.get(start..end).ok_or_else(|| {
                    DomainError::malformed(format!("label at offset {} is truncated", pos))
                })?;

                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(&String::from_utf8_lossy(label));
                pos = end;
            }
            POINTER_MASK => {
                let low = *message.get(pos + 1).ok_or_else(|| {
                    DomainError::malformed(format!("compression pointer at offset {} is truncated", pos))
                })?;

                hops += 1;
                if hops > message.len() {
                    return Err(DomainError::malformed(format!(
                        "compression pointer loop in name at offset {}",
                        offset
                    )));
                }

                if resume_at.is_none() {
                    resume_at = Some(pos + 2);
                }
                pos = (usize::from(len & !POINTER_MASK) << 8) | usize::from(low);
            }
            _ => {
                // 0x40 and 0x80 label types are reserved
                return Err(DomainError::malformed(format!(
                    "unsupported label type {:#04x} at offset {}",
                    len, pos
                )));
            }
        }
    }

    Ok((name, resume_at.unwrap_or(pos)))
}
