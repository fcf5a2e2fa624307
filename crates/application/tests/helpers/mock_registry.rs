#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_responder_application::ports::{ZoneRecordRef, ZoneRegistry};
use ferrous_responder_domain::{DomainError, ZoneEntry};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Builds `(name, ip)` pairs into registry records, keeping order.
pub fn entries(name: &str, ips: &[&str]) -> Vec<ZoneRecordRef> {
    ips.iter()
        .map(|ip| Arc::new(ZoneEntry::new(name, ip.parse::<IpAddr>().unwrap())) as ZoneRecordRef)
        .collect()
}

#[derive(Default)]
pub struct MockZoneRegistry {
    forward: RwLock<HashMap<String, Vec<ZoneRecordRef>>>,
    reverse: RwLock<HashMap<IpAddr, Vec<ZoneRecordRef>>>,
    failure: RwLock<Option<DomainError>>,
    forward_calls: AtomicUsize,
    reverse_calls: AtomicUsize,
}

impl MockZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_forward(&self, name: &str, records: Vec<ZoneRecordRef>) {
        self.forward
            .write()
            .unwrap()
            .insert(name.to_string(), records);
    }

    pub fn set_reverse(&self, ip: &str, names: &[&str]) {
        let ip: IpAddr = ip.parse().unwrap();
        let records = names
            .iter()
            .map(|name| Arc::new(ZoneEntry::new(*name, ip)) as ZoneRecordRef)
            .collect();
        self.reverse.write().unwrap().insert(ip, records);
    }

    pub fn fail_with(&self, error: DomainError) {
        *self.failure.write().unwrap() = Some(error);
    }

    pub fn forward_calls(&self) -> usize {
        self.forward_calls.load(Ordering::SeqCst)
    }

    pub fn reverse_calls(&self) -> usize {
        self.reverse_calls.load(Ordering::SeqCst)
    }

    fn failure(&self) -> Option<DomainError> {
        self.failure.read().unwrap().clone()
    }
}

#[async_trait]
impl ZoneRegistry for MockZoneRegistry {
    async fn lookup_forward(&self, name: &str) -> Result<Vec<ZoneRecordRef>, DomainError> {
        self.forward_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.failure() {
            return Err(error);
        }
        self.forward
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or(DomainError::NxDomain)
    }

    async fn lookup_reverse(&self, address: IpAddr) -> Result<Vec<ZoneRecordRef>, DomainError> {
        self.reverse_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.failure() {
            return Err(error);
        }
        self.reverse
            .read()
            .unwrap()
            .get(&address)
            .cloned()
            .ok_or(DomainError::NxDomain)
    }
}
