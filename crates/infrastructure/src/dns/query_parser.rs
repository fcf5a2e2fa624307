use super::RecordTypeMapper;
use ferrous_responder_domain::{DomainError, OpCode, Query, QueryClass, Transport};
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::BinEncodable;

/// Decodes a raw query message.
///
/// Label octets are kept exactly as received: a label may hold dots or
/// bytes outside ASCII and the reply still echoes the same question. Answer
/// and authority records, if a client sends any, are ignored. The EDNS(0)
/// payload size is read from the OPT record; hickory raises declared sizes
/// below 512 to 512 (RFC 6891 §6.2.3). Query types and classes are not
/// filtered here; that is the dispatcher's job.
///
/// Rejected as malformed:
///
/// * Anything hickory cannot decode (short buffer, bad label, record
///   running past the end)
/// * QR bit set
/// * QDCOUNT other than 1
pub fn parse_query(buf: &[u8], transport: Transport) -> Result<Query, DomainError> {
    let message = Message::from_vec(buf).map_err(|e| malformed(e.to_string()))?;

    if message.message_type == MessageType::Response {
        return Err(malformed("QR bit set on a query".to_string()));
    }
    let [question] = message.queries.as_slice() else {
        return Err(malformed(format!(
            "expected one question, got {}",
            message.queries.len()
        )));
    };

    let wire_name = question
        .name()
        .to_bytes()
        .map_err(|e| malformed(e.to_string()))?;

    let query = Query::new(
        presentation_name(question.name()),
        RecordTypeMapper::from_hickory(question.query_type()),
        transport,
    )
    .with_id(message.id)
    .with_opcode(OpCode::from_u8(u8::from(message.op_code)))
    .with_recursion_desired(message.recursion_desired)
    .with_class(QueryClass(u16::from(question.query_class())))
    .with_wire_name(wire_name);

    Ok(match &message.edns {
        Some(edns) => query.with_edns(edns.max_payload()),
        None => query,
    })
}

/// Escaped text form without the root dot; the root name itself is "".
fn presentation_name(name: &Name) -> String {
    if name.is_root() {
        return String::new();
    }
    let mut name = name.clone();
    name.set_fqdn(false);
    name.to_ascii()
}

fn malformed(reason: String) -> DomainError {
    DomainError::MalformedQuery(reason)
}
