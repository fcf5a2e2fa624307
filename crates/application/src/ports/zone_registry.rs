use async_trait::async_trait;
use ferrous_responder_domain::{DomainError, ZoneRecord};
use std::net::IpAddr;
use std::sync::Arc;

pub type ZoneRecordRef = Arc<dyn ZoneRecord>;

/// Source of candidate records, owned by the service-discovery layer.
///
/// Each call must answer from one consistent snapshot and keep the
/// registry's ordering. `Err(DomainError::NxDomain)` and an empty list both
/// mean the name is unknown; any other error is a lookup failure.
#[async_trait]
pub trait ZoneRegistry: Send + Sync {
    async fn lookup_forward(&self, name: &str) -> Result<Vec<ZoneRecordRef>, DomainError>;

    async fn lookup_reverse(&self, address: IpAddr) -> Result<Vec<ZoneRecordRef>, DomainError>;
}
