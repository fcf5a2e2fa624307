use serde::{Deserialize, Serialize};

/// Smallest datagram every resolver must accept (RFC 1035 §4.2.1).
pub const MIN_UDP_SIZE: u16 = 512;
/// Largest message the two-byte length prefix of the protocol can frame.
pub const MAX_MESSAGE_SIZE: u16 = 65535;

/// Settings handed to the query core at construction time.
///
/// Both TTLs are kept short on purpose: the registry changes over time and
/// downstream caches should not hold answers for long.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResponderConfig {
    /// TTL attached to every positive answer.
    #[serde(default = "default_local_ttl")]
    pub local_ttl: u32,

    /// Negative-answer TTL. No record carries it because negative replies
    /// have no authority section; it is only reported in logs.
    #[serde(default = "default_negative_ttl")]
    pub negative_ttl: u32,

    /// Ceiling for datagram replies when the client sent no EDNS option.
    #[serde(default = "default_min_udp_size")]
    pub min_udp_size: u16,

    /// Ceiling for stream replies and for EDNS-declared datagram sizes.
    #[serde(default = "default_max_message_size")]
    pub max_message_size: u16,

    /// Payload size advertised in the OPT record of replies to EDNS queries.
    #[serde(default = "default_edns_udp_size")]
    pub edns_udp_size: u16,

    /// Domain appended to static records that do not carry their own.
    #[serde(default = "default_domain")]
    pub domain: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            local_ttl: default_local_ttl(),
            negative_ttl: default_negative_ttl(),
            min_udp_size: default_min_udp_size(),
            max_message_size: default_max_message_size(),
            edns_udp_size: default_edns_udp_size(),
            domain: default_domain(),
        }
    }
}

fn default_local_ttl() -> u32 {
    30
}

fn default_negative_ttl() -> u32 {
    30
}

fn default_min_udp_size() -> u16 {
    MIN_UDP_SIZE
}

fn default_max_message_size() -> u16 {
    MAX_MESSAGE_SIZE
}

fn default_edns_udp_size() -> u16 {
    4096
}

fn default_domain() -> String {
    "local".to_string()
}
