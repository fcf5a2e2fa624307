#![allow(dead_code)]

use ferrous_responder_domain::{
    Query, QueryType, RecordData, RecordHeader, Reply, ResourceRecord, ResponseCode, Transport,
};
use std::net::IpAddr;

pub struct ReplyBuilder {
    query: Query,
    code: ResponseCode,
    answers: Vec<ResourceRecord>,
    ttl: u32,
}

impl ReplyBuilder {
    pub fn new() -> Self {
        Self {
            query: Query::new("host.local", QueryType::A, Transport::Datagram).with_id(0x1234),
            code: ResponseCode::NoError,
            answers: Vec::new(),
            ttl: 30,
        }
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn code(mut self, code: ResponseCode) -> Self {
        self.code = code;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn address(mut self, ip: &str) -> Self {
        let ip: IpAddr = ip.parse().unwrap();
        let data = match ip {
            IpAddr::V4(v4) => RecordData::A(v4),
            IpAddr::V6(v6) => RecordData::AAAA(v6),
        };
        let header = RecordHeader::new(self.query.name.clone(), data.record_type(), self.ttl);
        self.answers.push(ResourceRecord::new(header, data));
        self
    }

    pub fn pointer(mut self, target: &str) -> Self {
        let header = RecordHeader::new(self.query.name.clone(), QueryType::PTR, self.ttl);
        self.answers
            .push(ResourceRecord::new(header, RecordData::PTR(target.into())));
        self
    }

    pub fn build(self) -> Reply {
        Reply::new(&self.query, self.code).with_answers(self.answers)
    }
}

impl Default for ReplyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
