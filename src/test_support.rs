//! In-memory collaborators shared by unit tests across the crate.

use crate::error::LookupError;
use crate::validation::resolver::{MxRecord, Resolver};
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Resolver answering from fixed tables. Unknown domains fail like NXDOMAIN.
#[derive(Default)]
pub struct StaticResolver {
    hosts: Mutex<HashMap<String, Vec<IpAddr>>>,
    mx: Mutex<HashMap<String, Vec<MxRecord>>>,
    host_calls: AtomicUsize,
    mx_calls: AtomicUsize,
    delay: Duration,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `domain` as resolving, with one MX record per `mx_hosts`
    /// entry.
    pub fn with_domain(self, domain: &str, mx_hosts: &[&str]) -> Self {
        self.set_host(domain, true);
        let records = mx_hosts
            .iter()
            .enumerate()
            .map(|(i, host)| MxRecord::new(*host, (i as u16 + 1) * 10))
            .collect();
        self.mx.lock().unwrap().insert(domain.to_string(), records);
        self
    }

    /// Every lookup sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn set_host(&self, domain: &str, exists: bool) {
        let mut hosts = self.hosts.lock().unwrap();
        if exists {
            hosts.insert(domain.to_string(), vec![IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))]);
        } else {
            hosts.remove(domain);
        }
    }

    pub fn host_calls(&self) -> usize {
        self.host_calls.load(Ordering::SeqCst)
    }

    pub fn mx_calls(&self) -> usize {
        self.mx_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl Resolver for StaticResolver {
    async fn lookup_host(&self, domain: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.host_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        let answer = self.hosts.lock().unwrap().get(domain).cloned();
        answer.ok_or_else(|| LookupError::Other {
            message: format!("no record found for {}", domain),
        })
    }

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError> {
        self.mx_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        let answer = self.mx.lock().unwrap().get(domain).cloned();
        answer.ok_or_else(|| LookupError::Other {
            message: format!("no MX record found for {}", domain),
        })
    }
}
