use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A name that cannot be written as a wire-format domain name.
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    #[error("Failed to encode reply: {0}")]
    ReplyEncoding(String),

    /// The registry holds no records for the name or address.
    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    /// Lookup failed for a reason other than absence of the name.
    #[error("Zone registry unavailable: {0}")]
    RegistryUnavailable(String),
}
