use super::{parse_query, RecordTypeMapper};
use ferrous_responder_application::use_cases::HandleDnsQueryUseCase;
use ferrous_responder_domain::Transport;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error};

/// Bridges raw transport buffers and the query use case. Shared by the UDP
/// and TCP listeners.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the encoded reply, or `None` when the packet is not a
    /// decodable query and should be dropped without answer.
    pub async fn handle_raw(
        &self,
        buf: &[u8],
        transport: Transport,
        client_ip: IpAddr,
    ) -> Option<Vec<u8>> {
        let query = match parse_query(buf, transport) {
            Ok(query) => query,
            Err(e) => {
                debug!(error = %e, client = %client_ip, transport = %transport, "Dropping malformed query");
                return None;
            }
        };

        debug!(
            domain = %query.name,
            record_type = %RecordTypeMapper::to_hickory(query.query_type),
            client = %client_ip,
            transport = %transport,
            "DNS query received"
        );

        match self.use_case.execute(&query).await {
            Ok(encoded) => {
                debug!(
                    domain = %query.name,
                    code = %encoded.reply.response_code(),
                    answers = encoded.reply.answers().len(),
                    truncated = encoded.reply.is_truncated(),
                    size = encoded.len(),
                    "Sending response"
                );
                Some(encoded.wire)
            }
            Err(e) => {
                error!(error = %e, domain = %query.name, "Failed to encode error response");
                None
            }
        }
    }
}
