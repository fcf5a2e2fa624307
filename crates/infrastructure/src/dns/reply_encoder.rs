use super::RecordTypeMapper;
use ferrous_responder_application::ports::ReplyEncoder;
use ferrous_responder_domain::{
    DomainError, Question, RecordData, Reply, ResourceRecord, ResponseCode,
};
use hickory_proto::op::{
    Edns, Message, OpCode as HickoryOpCode, Query as HickoryQuery,
    ResponseCode as HickoryResponseCode,
};
use hickory_proto::rr::rdata::{A, AAAA, PTR};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::BinDecodable;

/// Encodes replies through `hickory_proto::op::Message`.
///
/// The question is rebuilt from the received QNAME octets when the query
/// carried them, so it matches the request byte for byte. Answer owners equal
/// to the question name reuse it, which lets hickory compress them to a
/// pointer at offset 12.
#[derive(Debug, Clone, Copy, Default)]
pub struct HickoryReplyEncoder;

impl HickoryReplyEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn to_message(&self, reply: &Reply) -> Result<Message, DomainError> {
        let mut message = Message::response(
            reply.id(),
            HickoryOpCode::from_u8(reply.opcode().to_u8()),
        );
        message.metadata.authoritative = reply.authoritative();
        message.metadata.truncation = reply.is_truncated();
        message.metadata.recursion_desired = reply.recursion_desired();
        message.metadata.recursion_available = reply.recursion_available();
        message.metadata.response_code = response_code(reply.response_code());

        let question = reply.question();
        let qname = question_name(question)?;
        let mut query = HickoryQuery::new();
        query
            .set_name(qname.clone())
            .set_query_type(RecordTypeMapper::to_hickory(question.query_type))
            .set_query_class(DNSClass::from(question.query_class.0));
        message.add_query(query);

        for rr in reply.answers() {
            message.add_answer(answer_record(rr, question, &qname)?);
        }

        // RFC 6891 §6.1.1: answer an OPT with an OPT, with or without answers.
        if let Some(payload_size) = reply.edns_payload_size() {
            let mut edns = Edns::new();
            edns.set_max_payload(payload_size);
            message.set_edns(edns);
        }

        Ok(message)
    }
}

impl ReplyEncoder for HickoryReplyEncoder {
    fn encode(&self, reply: &Reply) -> Result<Vec<u8>, DomainError> {
        self.to_message(reply)?
            .to_vec()
            .map_err(|e| DomainError::ReplyEncoding(e.to_string()))
    }
}

fn response_code(code: ResponseCode) -> HickoryResponseCode {
    match code {
        ResponseCode::NoError => HickoryResponseCode::NoError,
        ResponseCode::ServerFailure => HickoryResponseCode::ServFail,
        ResponseCode::NameError => HickoryResponseCode::NXDomain,
        ResponseCode::NotImplemented => HickoryResponseCode::NotImp,
    }
}

fn question_name(question: &Question) -> Result<Name, DomainError> {
    match &question.wire_name {
        Some(octets) => Name::from_bytes(octets)
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", question.name, e))),
        None => absolute_name(&question.name),
    }
}

/// Presentation-form name as an absolute `Name`. Escapes are honoured and
/// labels over 63 octets are rejected.
fn absolute_name(name: &str) -> Result<Name, DomainError> {
    if name.is_empty() {
        return Ok(Name::root());
    }
    let mut parsed = Name::from_ascii(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))?;
    parsed.set_fqdn(true);
    Ok(parsed)
}

fn answer_record(
    rr: &ResourceRecord,
    question: &Question,
    qname: &Name,
) -> Result<Record, DomainError> {
    let owner = if rr.header.name == question.name {
        qname.clone()
    } else {
        absolute_name(&rr.header.name)?
    };
    let data = match &rr.data {
        RecordData::A(ip) => RData::A(A(*ip)),
        RecordData::AAAA(ip) => RData::AAAA(AAAA(*ip)),
        RecordData::PTR(target) => RData::PTR(PTR(absolute_name(target)?)),
    };

    let mut record = Record::from_rdata(owner, rr.ttl(), data);
    record.dns_class = DNSClass::from(rr.header.class.0);
    Ok(record)
}
