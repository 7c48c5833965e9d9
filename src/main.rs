use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web::Data};
use global_ip_status::config::AppConfig;
use global_ip_status::lookup::{IpEchoClient, IpLookup};
use global_ip_status::openapi::ApiDoc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Global IP Status Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - `GET /` reporting the host's global IP and a UTC timestamp
/// - `GET /health` liveness probe
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Swagger UI: `/docs/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// See [`AppConfig`]. Log verbosity follows `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // One client for every worker so connections are pooled
    let lookup: Arc<dyn IpLookup> = Arc::new(IpEchoClient::from_config(&config)?);
    let lookup = Data::from(lookup);
    let config_data = Data::new(config.clone());

    info!(
        "Starting server on {}:{} (IP echo: {}, timeout: {:?})",
        config.bind_address, config.port, config.ip_echo_url, config.ip_echo_timeout
    );

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(middleware::Logger::default())
            .app_data(lookup.clone())
            .app_data(config_data.clone())
            .configure(global_ip_status::routes::configure)
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
