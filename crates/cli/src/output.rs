//! Human-readable report of a decoded reply.

use ferrous_dig_domain::{DnsMessage, RecordClass, RecordData, RecordType, ResourceRecord};
use std::fmt;

/// Renders the summary line followed by the four sections.
pub struct Report<'a>(pub &'a DnsMessage);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.0;
        let header = &message.header;

        writeln!(
            f,
            "Authoritative: {}, Recursive: {}, Truncated: {}",
            yes_no(header.authoritative()),
            yes_no(header.recursion_desired()),
            yes_no(header.truncated())
        )?;

        writeln!(f, "Question section ({})", message.questions.len())?;
        for question in &message.questions {
            writeln!(
                f,
                "  {}, {}, {}",
                absolute(&question.qname),
                RecordType::mnemonic(question.qtype),
                RecordClass::mnemonic(question.qclass)
            )?;
        }

        write_section(f, "Answer", &message.answers)?;
        write_section(f, "Authority", &message.authority)?;
        write_section(f, "Additional", &message.additional)
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, records: &[ResourceRecord]) -> fmt::Result {
    writeln!(f, "{} section ({})", title, records.len())?;
    for record in records {
        let rdata = match &record.rdata {
            RecordData::DomainName(name) => absolute(name),
            other => other.to_string(),
        };
        writeln!(
            f,
            "  {}, {}, {}, {}, {}",
            absolute(&record.name),
            RecordType::mnemonic(record.rtype),
            RecordClass::mnemonic(record.class),
            record.ttl,
            rdata
        )?;
    }
    Ok(())
}

fn absolute(name: &str) -> String {
    format!("{}.", name)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
