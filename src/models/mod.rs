/// Request and verdict types for single and bulk validation, plus the
/// per-domain [`DomainCheckResult`] shared across a batch.
///
/// [`DomainCheckResult`]: email::DomainCheckResult
pub mod email;

/// # Health Status Response
///
/// Liveness payload with a timestamp, the domain cache size and a snapshot
/// of the validation counters.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "cache_entries": 12,
///   "metrics": { "validations": 40, "cache_hits": 28, "...": 0 }
/// }
/// ```
pub mod health;

pub use email::{
    BulkEmailRequest, BulkValidationResponse, Checks, DomainCheckResult, EmailRequest,
    ValidationStatus, ValidationVerdict,
};
pub use health::HealthResponse;
