use actix_web::web;

/// Liveness endpoint with cache size and validation counters.
pub mod health;

/// # Email Validation Endpoints
///
/// Single and bulk validation. Both always answer **200 OK** with
/// structured verdicts; only malformed request bodies are rejected.
pub mod email;

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ```text
/// GET  /api/v1/health
/// POST /api/v1/validate-email
/// POST /api/v1/validate-emails-bulk
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes),
    );
}
