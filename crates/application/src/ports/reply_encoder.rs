use ferrous_responder_domain::{DomainError, Reply};

/// Serializes replies into wire-format messages.
///
/// Truncation decisions are made on the length of this encoder's output, and
/// that output is what the transport sends.
pub trait ReplyEncoder: Send + Sync {
    fn encode(&self, reply: &Reply) -> Result<Vec<u8>, DomainError>;
}

/// A finished reply together with its encoded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedReply {
    pub reply: Reply,
    pub wire: Vec<u8>,
}

impl EncodedReply {
    pub fn len(&self) -> usize {
        self.wire.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wire.is_empty()
    }
}
