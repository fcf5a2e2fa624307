use super::QueryType;
use std::fmt;
use std::sync::Arc;

/// Transport the query arrived on. Decides the response size ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    /// Connectionless (UDP).
    Datagram,
    /// Connection-oriented (TCP).
    Stream,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Datagram => "udp",
            Transport::Stream => "tcp",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    Query,
    Other(u8),
}

impl OpCode {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => OpCode::Query,
            other => OpCode::Other(other & 0x0F),
        }
    }

    pub fn to_u8(&self) -> u8 {
        match self {
            OpCode::Query => 0,
            OpCode::Other(value) => *value & 0x0F,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryClass(pub u16);

impl QueryClass {
    pub const IN: QueryClass = QueryClass(1);
    pub const ANY: QueryClass = QueryClass(255);

    /// Only the Internet class (or a wildcard asking for it) is served.
    pub fn is_served(&self) -> bool {
        *self == Self::IN || *self == Self::ANY
    }
}

impl Default for QueryClass {
    fn default() -> Self {
        Self::IN
    }
}

/// A parsed name-resolution query, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub id: u16,
    pub opcode: OpCode,
    pub recursion_desired: bool,
    /// Requested name in presentation form without the trailing root dot,
    /// case as received. Octets that are not plain hostname characters are
    /// backslash-escaped.
    pub name: Arc<str>,
    /// QNAME exactly as it appeared on the wire, uncompressed. Replies echo
    /// these octets so the question always matches the request.
    pub wire_name: Option<Arc<[u8]>>,
    pub query_type: QueryType,
    pub query_class: QueryClass,
    pub transport: Transport,
    /// UDP payload size declared in an EDNS(0) OPT record, if one was sent.
    pub edns_payload_size: Option<u16>,
}

impl Query {
    pub fn new(name: impl Into<Arc<str>>, query_type: QueryType, transport: Transport) -> Self {
        let name: Arc<str> = name.into();
        let name = match name.strip_suffix('.') {
            Some(trimmed) if !trimmed.ends_with('\\') => Arc::from(trimmed),
            _ => name,
        };

        Self {
            id: 0,
            opcode: OpCode::Query,
            recursion_desired: true,
            name,
            wire_name: None,
            query_type,
            query_class: QueryClass::IN,
            transport,
            edns_payload_size: None,
        }
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn with_opcode(mut self, opcode: OpCode) -> Self {
        self.opcode = opcode;
        self
    }

    pub fn with_class(mut self, query_class: QueryClass) -> Self {
        self.query_class = query_class;
        self
    }

    pub fn with_recursion_desired(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }

    pub fn with_wire_name(mut self, wire_name: impl Into<Arc<[u8]>>) -> Self {
        self.wire_name = Some(wire_name.into());
        self
    }

    pub fn with_edns(mut self, payload_size: u16) -> Self {
        self.edns_payload_size = Some(payload_size);
        self
    }

    pub fn has_edns(&self) -> bool {
        self.edns_payload_size.is_some()
    }
}
