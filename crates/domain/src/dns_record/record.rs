use super::QueryType;
use crate::dns_query::QueryClass;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Owner name, type, class and TTL of one resource record.
///
/// Every record in a reply owns its own copy; headers are never shared
/// between records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    pub name: Arc<str>,
    pub record_type: QueryType,
    pub class: QueryClass,
    pub ttl: u32,
}

impl RecordHeader {
    pub fn new(name: impl Into<Arc<str>>, record_type: QueryType, ttl: u32) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: QueryClass::IN,
            ttl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    PTR(Arc<str>),
}

impl RecordData {
    pub fn record_type(&self) -> QueryType {
        match self {
            RecordData::A(_) => QueryType::A,
            RecordData::AAAA(_) => QueryType::AAAA,
            RecordData::PTR(_) => QueryType::PTR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub header: RecordHeader,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(header: RecordHeader, data: RecordData) -> Self {
        Self { header, data }
    }

    pub fn ttl(&self) -> u32 {
        self.header.ttl
    }
}
