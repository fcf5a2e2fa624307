use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

/// Read-only view of a registry entry: one name bound to one address.
///
/// Records belong to the registry; the responder only reads them while a
/// single reply is being built.
pub trait ZoneRecord: fmt::Debug + Send + Sync {
    fn ip(&self) -> IpAddr;

    /// Canonical hostname, without the trailing root dot.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneEntry {
    name: Arc<str>,
    ip: IpAddr,
}

impl ZoneEntry {
    pub fn new(name: impl Into<Arc<str>>, ip: IpAddr) -> Self {
        let name: Arc<str> = name.into();
        let name = match name.strip_suffix('.') {
            Some(trimmed) => Arc::from(trimmed),
            None => name,
        };
        Self { name, ip }
    }
}

impl ZoneRecord for ZoneEntry {
    fn ip(&self) -> IpAddr {
        self.ip
    }

    fn name(&self) -> &str {
        &self.name
    }
}
