use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A `[[records]]` entry from the configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticRecord {
    pub hostname: String,

    #[serde(default)]
    pub domain: Option<String>,

    pub ip: String,
}

impl StaticRecord {
    pub fn fqdn(&self, default_domain: &str) -> String {
        let hostname = self.hostname.trim_end_matches('.');
        match self.domain.as_deref().unwrap_or(default_domain) {
            "" => hostname.to_string(),
            domain => format!("{}.{}", hostname, domain.trim_end_matches('.')),
        }
    }

    pub fn ip_addr(&self) -> Result<IpAddr, DomainError> {
        self.ip
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(self.ip.clone()))
    }
}
