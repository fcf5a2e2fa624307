use ferrous_responder_application::ports::{ReplyEncoder, ZoneRegistry};
use ferrous_responder_application::use_cases::HandleDnsQueryUseCase;
use ferrous_responder_domain::Config;
use ferrous_responder_infrastructure::dns::{DnsServerHandler, HickoryReplyEncoder};
use ferrous_responder_infrastructure::registry::StaticZoneRegistry;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let registry = Arc::new(StaticZoneRegistry::from_config(config)?);
        let encoder = Arc::new(HickoryReplyEncoder::new());
        let handler_use_case = Arc::new(HandleDnsQueryUseCase::new(
            registry as Arc<dyn ZoneRegistry>,
            encoder as Arc<dyn ReplyEncoder>,
            &config.responder,
        ));

        info!(
            local_ttl = config.responder.local_ttl,
            min_udp_size = config.responder.min_udp_size,
            max_message_size = config.responder.max_message_size,
            "Query handler ready"
        );

        Ok(Self { handler_use_case })
    }

    pub fn handler(&self) -> DnsServerHandler {
        DnsServerHandler::new(self.handler_use_case.clone())
    }
}
