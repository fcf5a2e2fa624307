use arc_swap::ArcSwap;
use async_trait::async_trait;
use ferrous_responder_application::ports::{ZoneRecordRef, ZoneRegistry};
use ferrous_responder_domain::{Config, DomainError, ZoneEntry};
use rustc_hash::FxHashMap;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};

/// Immutable view of every binding. Readers load one snapshot per lookup and
/// never observe a half-applied change.
#[derive(Debug, Clone, Default)]
struct ZoneSnapshot {
    by_name: FxHashMap<String, Vec<ZoneRecordRef>>,
    by_address: FxHashMap<IpAddr, Vec<ZoneRecordRef>>,
}

impl ZoneSnapshot {
    fn from_entries(entries: impl IntoIterator<Item = ZoneEntry>) -> Self {
        let mut snapshot = Self::default();
        for entry in entries {
            snapshot.insert(Arc::new(entry));
        }
        snapshot
    }

    fn insert(&mut self, record: ZoneRecordRef) {
        self.by_name
            .entry(normalize(record.name()))
            .or_default()
            .push(Arc::clone(&record));
        self.by_address.entry(record.ip()).or_default().push(record);
    }

    fn remove_name(&mut self, key: &str) -> usize {
        let Some(removed) = self.by_name.remove(key) else {
            return 0;
        };

        for record in &removed {
            if let Some(bound) = self.by_address.get_mut(&record.ip()) {
                bound.retain(|candidate| normalize(candidate.name()) != key);
                if bound.is_empty() {
                    self.by_address.remove(&record.ip());
                }
            }
        }
        removed.len()
    }

    fn len(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// In-memory registry of name/address bindings.
///
/// Lookups are lock-free; mutations build a fresh snapshot and swap it in,
/// so in-flight queries keep the records they already loaded.
/// Names match case-insensitively. Insertion order is preserved per name
/// and per address.
pub struct StaticZoneRegistry {
    snapshot: ArcSwap<ZoneSnapshot>,
}

impl StaticZoneRegistry {
    pub fn new() -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(ZoneSnapshot::default()),
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = ZoneEntry>) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(ZoneSnapshot::from_entries(entries)),
        }
    }

    /// Builds the registry from the `[[records]]` table. Hostnames without
    /// their own domain get `responder.domain` appended.
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let entries = config
            .records
            .iter()
            .map(|record| {
                Ok(ZoneEntry::new(
                    record.fqdn(&config.responder.domain),
                    record.ip_addr()?,
                ))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        let registry = Self::from_entries(entries);
        info!(records = registry.len(), "Zone registry loaded");
        Ok(registry)
    }

    pub fn add(&self, entry: ZoneEntry) {
        let record: ZoneRecordRef = Arc::new(entry);
        debug!(name = %record.name(), ip = %record.ip(), "Adding zone record");
        self.snapshot.rcu(|current| {
            let mut next = ZoneSnapshot::clone(current);
            next.insert(Arc::clone(&record));
            next
        });
    }

    /// Drops every binding for `name`. Returns how many were removed.
    pub fn remove_name(&self, name: &str) -> usize {
        let key = normalize(name);
        let mut removed = 0;
        self.snapshot.rcu(|current| {
            let mut next = ZoneSnapshot::clone(current);
            removed = next.remove_name(&key);
            next
        });
        debug!(name = %key, removed, "Removed zone records");
        removed
    }

    pub fn replace_all(&self, entries: impl IntoIterator<Item = ZoneEntry>) {
        let next = ZoneSnapshot::from_entries(entries);
        info!(records = next.len(), "Zone registry replaced");
        self.snapshot.store(Arc::new(next));
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn forward(&self, name: &str) -> Result<Vec<ZoneRecordRef>, DomainError> {
        self.snapshot
            .load()
            .by_name
            .get(&normalize(name))
            .cloned()
            .ok_or(DomainError::NxDomain)
    }

    fn reverse(&self, ip: IpAddr) -> Result<Vec<ZoneRecordRef>, DomainError> {
        self.snapshot
            .load()
            .by_address
            .get(&ip)
            .cloned()
            .ok_or(DomainError::NxDomain)
    }
}

impl Default for StaticZoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneRegistry for StaticZoneRegistry {
    async fn lookup_forward(&self, name: &str) -> Result<Vec<ZoneRecordRef>, DomainError> {
        self.forward(name)
    }

    async fn lookup_reverse(&self, ip: IpAddr) -> Result<Vec<ZoneRecordRef>, DomainError> {
        self.reverse(ip)
    }
}
