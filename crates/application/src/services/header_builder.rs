use ferrous_responder_domain::{Query, QueryType, RecordHeader, ResponderConfig};

/// Produces resource-record headers carrying the configured TTL policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBuilder {
    local_ttl: u32,
    negative_ttl: u32,
}

impl HeaderBuilder {
    pub fn new(config: &ResponderConfig) -> Self {
        Self {
            local_ttl: config.local_ttl,
            negative_ttl: config.negative_ttl,
        }
    }

    /// Header for one positive answer to `query` holding data of
    /// `record_type`. Called once per record so that no two records share a
    /// header value.
    pub fn answer_header(&self, query: &Query, record_type: QueryType) -> RecordHeader {
        RecordHeader::new(query.name.clone(), record_type, self.local_ttl)
    }

    pub fn local_ttl(&self) -> u32 {
        self.local_ttl
    }

    pub fn negative_ttl(&self) -> u32 {
        self.negative_ttl
    }
}
