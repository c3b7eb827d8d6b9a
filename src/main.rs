use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use email_domain_validator::config::Settings;
use email_domain_validator::openapi::ApiDoc;
use email_domain_validator::state::AppState;
use email_domain_validator::validation::cache::spawn_cache_sweeper;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Domain Validator Service Entry Point
///
/// Loads `.env`, reads [`Settings`] from the environment, installs the
/// tracing subscriber and starts the Actix-web server with:
/// - REST endpoints under `/api/v1`
/// - Swagger UI at `/swagger-ui/`, OpenAPI spec at `/api-docs/openapi.json`
/// - an optional background sweep of expired domain cache entries
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let settings = Settings::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    email_domain_validator::logging::init(settings.log_format);

    let state = Data::new(AppState::from_settings(&settings));
    let sweeper = settings
        .sweep_interval
        .map(|every| spawn_cache_sweeper(Arc::clone(&state.cache), every));

    info!(
        address = %settings.bind_address,
        port = settings.port,
        cache_ttl_secs = settings.cache_ttl.as_secs(),
        dns_timeout_ms = u64::try_from(settings.dns_timeout.as_millis()).unwrap_or(u64::MAX),
        "starting email domain validator"
    );

    let server_state = state.clone();
    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(server_state.clone())
            .configure(email_domain_validator::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((settings.bind_address.as_str(), settings.port))?
    .run()
    .await;

    if let Some(cancel) = sweeper {
        cancel.cancel();
    }
    result
}
