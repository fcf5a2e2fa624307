use crate::ports::{EncodedReply, ReplyEncoder};
use ferrous_responder_domain::{DomainError, Query, Reply, ResponderConfig, Transport};
use tracing::debug;

/// Decides the size ceiling for a reply and swaps oversized replies for a
/// truncated one. Truncation is all or nothing: answers are never partially
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationPolicy {
    min_udp_size: u16,
    max_message_size: u16,
}

impl TruncationPolicy {
    pub fn new(config: &ResponderConfig) -> Self {
        Self {
            min_udp_size: config.min_udp_size,
            max_message_size: config.max_message_size,
        }
    }

    /// Upper bound on the serialized reply for `query`.
    ///
    /// * stream: the protocol maximum
    /// * datagram with EDNS: the declared payload size, raised to the
    ///   classic floor and capped at the protocol maximum
    /// * plain datagram: the classic floor
    pub fn max_response_size(&self, query: &Query) -> usize {
        let limit = match (query.transport, query.edns_payload_size) {
            (Transport::Stream, _) => self.max_message_size,
            (Transport::Datagram, Some(declared)) => declared
                .max(self.min_udp_size)
                .min(self.max_message_size),
            (Transport::Datagram, None) => self.min_udp_size,
        };
        usize::from(limit)
    }

    /// Encodes `reply` and, when the result exceeds the limit for `query`,
    /// encodes the truncated form instead.
    pub fn apply(
        &self,
        query: &Query,
        reply: Reply,
        encoder: &dyn ReplyEncoder,
    ) -> Result<EncodedReply, DomainError> {
        let limit = self.max_response_size(query);
        let wire = encoder.encode(&reply)?;
        let size = wire.len();
        if size <= limit {
            return Ok(EncodedReply { reply, wire });
        }

        debug!(
            domain = %query.name,
            transport = %query.transport,
            size,
            limit,
            answers = reply.answers().len(),
            "Reply exceeds transport limit, truncating"
        );
        let reply = reply.into_truncated();
        let wire = encoder.encode(&reply)?;
        Ok(EncodedReply { reply, wire })
    }
}
