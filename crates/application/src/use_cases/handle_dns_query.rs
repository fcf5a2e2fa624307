use crate::ports::{EncodedReply, ReplyEncoder, ZoneRecordRef, ZoneRegistry};
use crate::services::{ReplyAssembler, ReplyKind, TruncationPolicy};
use ferrous_responder_domain::{
    parse_reverse_name, DomainError, OpCode, Query, QueryType, ResponderConfig, ResponseCode,
};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Query dispatcher.
///
/// Each call walks Received → Resolved → Assembled → SizeChecked → Final and
/// ends with an encoded reply; there is no retry and no state kept between
/// calls, so one instance can serve any number of concurrent queries.
pub struct HandleDnsQueryUseCase {
    registry: Arc<dyn ZoneRegistry>,
    encoder: Arc<dyn ReplyEncoder>,
    assembler: ReplyAssembler,
    truncation: TruncationPolicy,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        registry: Arc<dyn ZoneRegistry>,
        encoder: Arc<dyn ReplyEncoder>,
        config: &ResponderConfig,
    ) -> Self {
        Self {
            registry,
            encoder,
            assembler: ReplyAssembler::new(config),
            truncation: TruncationPolicy::new(config),
        }
    }

    /// A reply that cannot be encoded is replaced by SERVFAIL for the same
    /// question. `Err` only when that cannot be encoded either.
    pub async fn execute(&self, query: &Query) -> Result<EncodedReply, DomainError> {
        let kind = self.resolve(query).await;
        debug!(
            domain = %query.name,
            record_type = %query.query_type,
            reply = kind.as_str(),
            "Query resolved"
        );

        let reply = self.assembler.assemble(query, kind);
        let encoded = match self.truncation.apply(query, reply, self.encoder.as_ref()) {
            Ok(encoded) => encoded,
            Err(e) => {
                error!(domain = %query.name, error = %e, "Failed to encode reply");
                let reply = self.assembler.server_failure(query);
                let wire = self.encoder.encode(&reply)?;
                EncodedReply { reply, wire }
            }
        };

        let code = encoded.reply.response_code();
        if code != ResponseCode::NoError {
            debug!(
                domain = %query.name,
                code = %code,
                negative_ttl = self.assembler.headers().negative_ttl(),
                "Negative reply"
            );
        }
        Ok(encoded)
    }

    async fn resolve(&self, query: &Query) -> ReplyKind {
        if query.opcode != OpCode::Query || !query.query_class.is_served() {
            return ReplyKind::NotImplemented;
        }

        match query.query_type {
            query_type if query_type.is_address() => {
                let lookup = self.registry.lookup_forward(&query.name).await;
                match Self::candidates(query, lookup) {
                    Ok(records) => ReplyKind::Address(records),
                    Err(kind) => kind,
                }
            }
            QueryType::PTR => {
                let Some(address) = parse_reverse_name(&query.name) else {
                    debug!(domain = %query.name, "PTR query for a non-reverse name");
                    return ReplyKind::NameError;
                };
                let lookup = self.registry.lookup_reverse(address).await;
                match Self::candidates(query, lookup) {
                    Ok(records) => ReplyKind::Pointer(records),
                    Err(kind) => kind,
                }
            }
            _ => ReplyKind::NotImplemented,
        }
    }

    /// No records at all means the name is unknown, which is distinct from a
    /// known name with nothing of the requested family.
    fn candidates(
        query: &Query,
        lookup: Result<Vec<ZoneRecordRef>, DomainError>,
    ) -> Result<Vec<ZoneRecordRef>, ReplyKind> {
        match lookup {
            Ok(records) if !records.is_empty() => Ok(records),
            Ok(_) | Err(DomainError::NxDomain) => Err(ReplyKind::NameError),
            Err(e) => {
                warn!(domain = %query.name, error = %e, "Zone registry lookup failed");
                Err(ReplyKind::ServerFailure)
            }
        }
    }
}
