#![allow(dead_code)]

use ferrous_responder_application::ports::ReplyEncoder;
use ferrous_responder_domain::{DomainError, RecordData, Reply, ResponseCode};
use std::sync::atomic::{AtomicUsize, Ordering};

const HEADER: usize = 12;
const OPT: usize = 11;
/// TYPE + CLASS + TTL + RDLENGTH
const RR_FIXED: usize = 10;

fn name_len(name: &str) -> usize {
    if name.is_empty() {
        return 1;
    }
    name.split('.').map(|label| label.len() + 1).sum::<usize>() + 1
}

/// Produces zero-filled buffers as long as the wire message would be, with
/// answer owners equal to the question compressed to a two-byte pointer.
#[derive(Default)]
pub struct SizingEncoder {
    calls: AtomicUsize,
}

impl SizingEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn wire_len(reply: &Reply) -> usize {
        let question = reply.question();
        let answers: usize = reply
            .answers()
            .iter()
            .map(|rr| {
                let owner = if rr.header.name == question.name {
                    2
                } else {
                    name_len(&rr.header.name)
                };
                let rdata = match &rr.data {
                    RecordData::A(_) => 4,
                    RecordData::AAAA(_) => 16,
                    RecordData::PTR(target) => name_len(target),
                };
                owner + RR_FIXED + rdata
            })
            .sum();
        let opt = if reply.edns_payload_size().is_some() {
            OPT
        } else {
            0
        };

        HEADER + name_len(&question.name) + 4 + answers + opt
    }
}

impl ReplyEncoder for SizingEncoder {
    fn encode(&self, reply: &Reply) -> Result<Vec<u8>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![0; Self::wire_len(reply)])
    }
}

/// Refuses every NOERROR reply, standing in for record data that has no
/// wire representation.
pub struct RejectingEncoder;

impl ReplyEncoder for RejectingEncoder {
    fn encode(&self, reply: &Reply) -> Result<Vec<u8>, DomainError> {
        if reply.response_code() == ResponseCode::NoError {
            return Err(DomainError::InvalidDomainName(
                "label exceeds 63 octets".to_string(),
            ));
        }
        SizingEncoder::new().encode(reply)
    }
}

/// Refuses everything.
pub struct BrokenEncoder;

impl ReplyEncoder for BrokenEncoder {
    fn encode(&self, _reply: &Reply) -> Result<Vec<u8>, DomainError> {
        Err(DomainError::ReplyEncoding("encoder offline".to_string()))
    }
}
