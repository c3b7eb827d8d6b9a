use crate::models::HealthResponse;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns the service status with a timestamp, the number of cached domain
/// entries and the validation counters.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "cache_entries": 4,
///   "metrics": { "validations": 10, "cache_hits": 6, "cache_misses": 4 }
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up(state.cache.len(), state.metrics.snapshot()))
}

/// # Route Configuration
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
