use crate::dns_query::{OpCode, Query, QueryClass};
use crate::dns_record::{QueryType, ResourceRecord};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    ServerFailure,
    NameError,
    NotImplemented,
}

impl ResponseCode {
    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::ServerFailure => "SERVFAIL",
            ResponseCode::NameError => "NXDOMAIN",
            ResponseCode::NotImplemented => "NOTIMP",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question section echoed back from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Arc<str>,
    /// Received QNAME octets; encoders prefer these over `name`.
    pub wire_name: Option<Arc<[u8]>>,
    pub query_type: QueryType,
    pub query_class: QueryClass,
}

impl From<&Query> for Question {
    fn from(query: &Query) -> Self {
        Self {
            name: Arc::clone(&query.name),
            wire_name: query.wire_name.clone(),
            query_type: query.query_type,
            query_class: query.query_class,
        }
    }
}

/// A complete response message.
///
/// A truncated reply never carries answers: `into_truncated` is the only way
/// to set the TC flag and it drops the answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    id: u16,
    opcode: OpCode,
    recursion_desired: bool,
    recursion_available: bool,
    authoritative: bool,
    truncated: bool,
    response_code: ResponseCode,
    question: Question,
    answers: Vec<ResourceRecord>,
    edns_payload_size: Option<u16>,
}

impl Reply {
    /// Empty reply echoing the query's id, opcode, RD flag and question.
    pub fn new(query: &Query, response_code: ResponseCode) -> Self {
        Self {
            id: query.id,
            opcode: query.opcode,
            recursion_desired: query.recursion_desired,
            recursion_available: true,
            authoritative: true,
            truncated: false,
            response_code,
            question: Question::from(query),
            answers: Vec::new(),
            edns_payload_size: None,
        }
    }

    pub fn with_answers(mut self, answers: Vec<ResourceRecord>) -> Self {
        if !self.truncated {
            self.answers = answers;
        }
        self
    }

    /// Attaches an OPT record advertising `payload_size`.
    pub fn with_edns(mut self, payload_size: u16) -> Self {
        self.edns_payload_size = Some(payload_size);
        self
    }

    /// Same header and question, TC set, no answers.
    pub fn into_truncated(mut self) -> Self {
        self.truncated = true;
        self.answers.clear();
        self
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn opcode(&self) -> OpCode {
        self.opcode
    }

    pub fn recursion_desired(&self) -> bool {
        self.recursion_desired
    }

    pub fn recursion_available(&self) -> bool {
        self.recursion_available
    }

    pub fn authoritative(&self) -> bool {
        self.authoritative
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn response_code(&self) -> ResponseCode {
        self.response_code
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answers
    }

    pub fn edns_payload_size(&self) -> Option<u16> {
        self.edns_payload_size
    }
}
