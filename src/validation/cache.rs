use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    exists: bool,
    stored_at: Instant,
}

#[derive(Debug)]
struct Inner {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
}

impl Inner {
    fn is_fresh(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.duration_since(entry.stored_at) <= self.ttl
    }
}

/// TTL map from domain to its last observed existence answer.
///
/// Expiry is lazy: a stale entry reads as absent whether or not it has been
/// purged. A single reader/writer lock guards the whole map and the TTL.
#[derive(Debug)]
pub struct DomainCache {
    inner: RwLock<Inner>,
}

impl DomainCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: RwLock::new(Inner {
                ttl,
                entries: HashMap::new(),
            }),
        }
    }

    // A poisoned lock only means another thread panicked mid-update; the map
    // itself is still a valid cache.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the cached answer, or `None` when absent or older than the TTL.
    pub fn get(&self, domain: &str) -> Option<bool> {
        let inner = self.read();
        let now = Instant::now();
        inner
            .entries
            .get(domain)
            .filter(|entry| inner.is_fresh(entry, now))
            .map(|entry| entry.exists)
    }

    pub fn set(&self, domain: &str, exists: bool) {
        let entry = CacheEntry {
            exists,
            stored_at: Instant::now(),
        };
        self.write().entries.insert(domain.to_string(), entry);
    }

    /// Drops every entry older than the TTL and returns how many were removed.
    pub fn clear_expired(&self) -> usize {
        let mut inner = self.write();
        let now = Instant::now();
        let ttl = inner.ttl;
        let before = inner.entries.len();
        inner
            .entries
            .retain(|_, entry| now.duration_since(entry.stored_at) <= ttl);
        before - inner.entries.len()
    }

    /// Changes the TTL for subsequent reads. Existing entries keep their
    /// original timestamps.
    pub fn set_duration(&self, ttl: Duration) {
        self.write().ttl = ttl;
    }

    pub fn ttl(&self) -> Duration {
        self.read().ttl
    }

    /// Number of stored entries, including stale ones not yet swept.
    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Periodically sweeps expired entries until the returned token is cancelled.
pub fn spawn_cache_sweeper(cache: Arc<DomainCache>, every: Duration) -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(interval_secs = every.as_secs(), "domain cache sweeper started");

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    info!("domain cache sweeper stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let removed = cache.clear_expired();
                    if removed > 0 {
                        debug!(removed, remaining = cache.len(), "swept expired domain entries");
                    }
                }
            }
        }
    });

    cancel
}
