use utoipa::OpenApi;

/// OpenAPI document for the REST surface, generated at compile time from the
/// handler annotations.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email,
        crate::routes::email::validate_emails_bulk,
    ),
    components(
        schemas(
            crate::models::HealthResponse,
            crate::metrics::MetricsSnapshot,
            crate::models::EmailRequest,
            crate::models::BulkEmailRequest,
            crate::models::ValidationVerdict,
            crate::models::Checks,
            crate::models::ValidationStatus,
            crate::models::BulkValidationResponse,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email address and domain validation endpoints"),
    ),
    info(
        description = "Email domain validation with batched, cached DNS checks",
        title = "Email Domain Validator API",
        version = "0.11.0",
    )
)]
pub struct ApiDoc;
