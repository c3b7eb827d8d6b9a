use crate::models::{BulkEmailRequest, BulkValidationResponse, EmailRequest, ValidationVerdict};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, post, web};

/// # Email Validation Endpoint
///
/// Validates one address: syntax, domain existence, MX records, disposable
/// provider, role-based local part and alias detection, combined into a
/// score and status.
///
/// Always answers **200 OK** with a verdict; failures of the address are
/// expressed through `status` (`INVALID_FORMAT`, `INVALID_DOMAIN`,
/// `NO_MX_RECORDS`, `DISPOSABLE`, ...).
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Validation verdict", body = ValidationVerdict),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Email Validation"
)]
#[post("/validate-email")]
pub async fn validate_email(
    req: web::Json<EmailRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let verdict = state.validator.validate_email(&req.email).await;
    HttpResponse::Ok().json(verdict)
}

/// # Bulk Email Validation Endpoint
///
/// Validates many addresses at once. Each distinct domain is looked up once
/// no matter how many addresses share it; `results` is aligned one-to-one
/// with the submitted `emails`, duplicates and malformed entries included.
///
/// ## Example Request
/// ```json
/// { "emails": ["user1@example.com", "user2@example.com"] }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-emails-bulk",
    request_body = BulkEmailRequest,
    responses(
        (status = 200, description = "Bulk validation results", body = BulkValidationResponse),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Email Validation"
)]
#[post("/validate-emails-bulk")]
pub async fn validate_emails_bulk(
    req: web::Json<BulkEmailRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let verdicts = state.validator.validate_emails(&req.emails).await;
    HttpResponse::Ok().json(BulkValidationResponse::from_verdicts(verdicts))
}

/// Configures email validation routes under /api/v1
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email).service(validate_emails_bulk);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::test_support::StaticResolver;
    use crate::validation::cache::DomainCache;
    use crate::validation::disposable::DisposableDomains;
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn test_state() -> AppState {
        let resolver = StaticResolver::new()
            .with_domain("example.com", &["mx.example.com."])
            .with_domain("example.org", &["mx.example.org."])
            .with_domain("nomx.example", &[])
            .with_domain("mailinator.com", &["mx.mailinator.com."]);
        let settings = Settings::default();
        AppState::with_parts(
            &settings,
            Arc::new(resolver),
            Arc::new(DomainCache::new(settings.cache_ttl)),
            Arc::new(DisposableDomains::default()),
        )
    }

    async fn create_test_app() -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await
    }

    async fn post_json(uri: &str, body: Value) -> (u16, Value) {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[actix_web::test]
    async fn test_valid_email() {
        let (status, body) = post_json("/validate-email", json!({ "email": "jane@example.com" })).await;

        assert_eq!(status, 200);
        assert_eq!(body["status"], "VALID");
        assert_eq!(body["score"], 100);
        assert_eq!(body["email"], "jane@example.com");
    }

    #[actix_web::test]
    async fn test_invalid_syntax_is_still_200() {
        let (status, body) = post_json("/validate-email", json!({ "email": "invalid-email" })).await;

        assert_eq!(status, 200);
        assert_eq!(body["status"], "INVALID_FORMAT");
        assert_eq!(body["score"], 0);
    }

    #[actix_web::test]
    async fn test_missing_email() {
        let (status, body) = post_json("/validate-email", json!({ "email": "" })).await;

        assert_eq!(status, 200);
        assert_eq!(body["status"], "MISSING_EMAIL");
    }

    #[actix_web::test]
    async fn test_invalid_domain() {
        let (_, body) = post_json("/validate-email", json!({ "email": "test@nonexistent.invalid" })).await;

        assert_eq!(body["status"], "INVALID_DOMAIN");
        assert_eq!(body["validations"]["domain_exists"], false);
    }

    #[actix_web::test]
    async fn test_no_mx_records() {
        let (_, body) = post_json("/validate-email", json!({ "email": "user@nomx.example" })).await;

        assert_eq!(body["status"], "NO_MX_RECORDS");
        assert_eq!(body["score"], 40);
    }

    #[actix_web::test]
    async fn test_disposable_email_detection() {
        let (_, body) = post_json("/validate-email", json!({ "email": "user@mailinator.com" })).await;

        assert_eq!(body["status"], "DISPOSABLE");
        assert_eq!(body["validations"]["is_disposable"], true);
    }

    #[actix_web::test]
    async fn test_alias_is_reported() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new({
                    let settings = Settings::default();
                    AppState::with_parts(
                        &settings,
                        Arc::new(StaticResolver::new().with_domain("gmail.com", &["gmail-smtp-in.l.google.com."])),
                        Arc::new(DomainCache::new(settings.cache_ttl)),
                        Arc::new(DisposableDomains::default()),
                    )
                }))
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/validate-email")
            .set_json(json!({ "email": "j.doe+news@gmail.com" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["alias_of"], "jdoe@gmail.com");
    }

    #[actix_web::test]
    async fn test_malformed_body_is_rejected() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/validate-email")
            .set_json(json!({ "address": "user@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_mixed_results() {
        let (status, body) = post_json(
            "/validate-emails-bulk",
            json!({
                "emails": ["valid@example.com", "invalid-email", "user@nonexistent.invalid", "valid@example.com"]
            }),
        )
        .await;

        assert_eq!(status, 200);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0]["email"], "valid@example.com");
        assert_eq!(results[1]["status"], "INVALID_FORMAT");
        assert_eq!(results[2]["status"], "INVALID_DOMAIN");
        assert_eq!(results[3], results[0]);
        assert_eq!(body["valid_count"], 2);
        assert_eq!(body["invalid_count"], 2);
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_empty_array() {
        let (status, body) = post_json("/validate-emails-bulk", json!({ "emails": [] })).await;

        assert_eq!(status, 200);
        assert_eq!(body["results"].as_array().unwrap().len(), 0);
        assert_eq!(body["valid_count"], 0);
        assert_eq!(body["invalid_count"], 0);
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_disposable_emails() {
        let (_, body) = post_json(
            "/validate-emails-bulk",
            json!({ "emails": ["user@mailinator.com", "test@example.org"] }),
        )
        .await;

        let results = body["results"].as_array().unwrap();
        assert_eq!(results[0]["status"], "DISPOSABLE");
        assert_eq!(results[1]["status"], "VALID");
    }
}
