use super::HeaderBuilder;
use crate::ports::ZoneRecordRef;
use ferrous_responder_domain::{
    Query, QueryType, RecordData, Reply, ResourceRecord, ResponderConfig, ResponseCode,
};
use std::net::IpAddr;
use std::sync::Arc;

/// The reply the dispatcher selected for a query, chosen exactly once.
#[derive(Debug, Clone)]
pub enum ReplyKind {
    /// Forward lookup candidates, not yet filtered by address family.
    Address(Vec<ZoneRecordRef>),
    /// Hostnames bound to the queried address.
    Pointer(Vec<ZoneRecordRef>),
    NameError,
    NotImplemented,
    /// The registry could not be consulted.
    ServerFailure,
}

impl ReplyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyKind::Address(_) => "address",
            ReplyKind::Pointer(_) => "pointer",
            ReplyKind::NameError => "name_error",
            ReplyKind::NotImplemented => "not_implemented",
            ReplyKind::ServerFailure => "server_failure",
        }
    }
}

/// Builds complete replies. Stateless apart from the configured TTLs and
/// the EDNS payload size it advertises.
#[derive(Debug, Clone)]
pub struct ReplyAssembler {
    headers: HeaderBuilder,
    edns_udp_size: u16,
}

impl ReplyAssembler {
    pub fn new(config: &ResponderConfig) -> Self {
        Self {
            headers: HeaderBuilder::new(config),
            edns_udp_size: config.edns_udp_size,
        }
    }

    pub fn headers(&self) -> &HeaderBuilder {
        &self.headers
    }

    pub fn assemble(&self, query: &Query, kind: ReplyKind) -> Reply {
        match kind {
            ReplyKind::Address(records) => self.address_reply(query, &records),
            ReplyKind::Pointer(records) => self.pointer_reply(query, &records),
            ReplyKind::NameError => self.name_error(query),
            ReplyKind::NotImplemented => self.not_implemented(query),
            ReplyKind::ServerFailure => self.server_failure(query),
        }
    }

    /// NOERROR with one answer per candidate whose family matches the
    /// requested type. Mismatched candidates are skipped; input order is kept
    /// and duplicates are not collapsed.
    pub fn address_reply(&self, query: &Query, records: &[ZoneRecordRef]) -> Reply {
        let answers = records
            .iter()
            .filter_map(|record| match (query.query_type, record.ip()) {
                (QueryType::A, IpAddr::V4(v4)) => Some(RecordData::A(v4)),
                (QueryType::AAAA, IpAddr::V6(v6)) => Some(RecordData::AAAA(v6)),
                _ => None,
            })
            .map(|data| self.answer(query, data))
            .collect();

        self.finish(query, Reply::new(query, ResponseCode::NoError).with_answers(answers))
    }

    /// NOERROR with one PTR answer per candidate, in input order.
    pub fn pointer_reply(&self, query: &Query, records: &[ZoneRecordRef]) -> Reply {
        let answers = records
            .iter()
            .map(|record| self.answer(query, RecordData::PTR(Arc::from(record.name()))))
            .collect();

        self.finish(query, Reply::new(query, ResponseCode::NoError).with_answers(answers))
    }

    pub fn name_error(&self, query: &Query) -> Reply {
        self.finish(query, Reply::new(query, ResponseCode::NameError))
    }

    pub fn not_implemented(&self, query: &Query) -> Reply {
        self.finish(query, Reply::new(query, ResponseCode::NotImplemented))
    }

    pub fn server_failure(&self, query: &Query) -> Reply {
        self.finish(query, Reply::new(query, ResponseCode::ServerFailure))
    }

    fn answer(&self, query: &Query, data: RecordData) -> ResourceRecord {
        ResourceRecord::new(self.headers.answer_header(query, data.record_type()), data)
    }

    // RFC 6891 §6.1.1: answer an OPT with an OPT.
    fn finish(&self, query: &Query, reply: Reply) -> Reply {
        if query.has_edns() {
            reply.with_edns(self.edns_udp_size)
        } else {
            reply
        }
    }
}
