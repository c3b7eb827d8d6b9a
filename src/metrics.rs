use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use utoipa::ToSchema;

/// Resolver call being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Host,
    Mx,
}

/// Fire-and-forget observation hooks.
///
/// Implementations must not block and have no influence on validation
/// outcomes.
pub trait MetricsSink: Send + Sync {
    fn record_score(&self, score: u8);
    fn record_cache_op(&self, hit: bool);
    fn record_lookup(&self, kind: LookupKind, elapsed: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn record_score(&self, _score: u8) {}
    fn record_cache_op(&self, _hit: bool) {}
    fn record_lookup(&self, _kind: LookupKind, _elapsed: Duration) {}
}

/// Atomic counters, readable at any time through [`CounterMetrics::snapshot`].
#[derive(Debug, Default)]
pub struct CounterMetrics {
    validations: AtomicU64,
    score_total: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    host_lookups: AtomicU64,
    mx_lookups: AtomicU64,
    lookup_micros: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct MetricsSnapshot {
    pub validations: u64,
    pub score_total: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub host_lookups: u64,
    pub mx_lookups: u64,
    pub lookup_micros: u64,
}

impl CounterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            validations: self.validations.load(Ordering::Relaxed),
            score_total: self.score_total.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            host_lookups: self.host_lookups.load(Ordering::Relaxed),
            mx_lookups: self.mx_lookups.load(Ordering::Relaxed),
            lookup_micros: self.lookup_micros.load(Ordering::Relaxed),
        }
    }
}

impl MetricsSink for CounterMetrics {
    fn record_score(&self, score: u8) {
        self.validations.fetch_add(1, Ordering::Relaxed);
        self.score_total.fetch_add(u64::from(score), Ordering::Relaxed);
    }

    fn record_cache_op(&self, hit: bool) {
        let counter = if hit { &self.cache_hits } else { &self.cache_misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn record_lookup(&self, kind: LookupKind, elapsed: Duration) {
        let counter = match kind {
            LookupKind::Host => &self.host_lookups,
            LookupKind::Mx => &self.mx_lookups,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.lookup_micros.fetch_add(micros, Ordering::Relaxed);
    }
}
