use crate::metrics::MetricsSnapshot;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, Debug, PartialEq, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Entries currently held by the domain cache, stale ones included.
    pub cache_entries: usize,
    pub metrics: MetricsSnapshot,
}

impl HealthResponse {
    pub fn up(cache_entries: usize, metrics: MetricsSnapshot) -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            cache_entries,
            metrics,
        }
    }
}
