use std::fmt;

/// Record type requested by a query. Anything the responder does not answer
/// is carried as `Other` with its raw wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    A,
    AAAA,
    PTR,
    Other(u16),
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::A => "A",
            QueryType::AAAA => "AAAA",
            QueryType::PTR => "PTR",
            QueryType::Other(_) => "OTHER",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            QueryType::A => 1,
            QueryType::PTR => 12,
            QueryType::AAAA => 28,
            QueryType::Other(value) => *value,
        }
    }

    /// Whether this type selects the forward (address) path.
    pub fn is_address(&self) -> bool {
        matches!(self, QueryType::A | QueryType::AAAA)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // RFC 3597 presentation of unknown types
            QueryType::Other(value) => write!(f, "TYPE{}", value),
            known => f.write_str(known.as_str()),
        }
    }
}
