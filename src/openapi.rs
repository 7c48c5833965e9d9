use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers. Served as JSON at `/api-docs/openapi.json` and browsable
/// through Swagger UI at `/docs/`.
///
/// # Endpoints
/// - Global IP status: `GET /`
/// - Health Check: `GET /health`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::status::global_ip_status,
        crate::routes::health::liveness,
    ),
    components(
        schemas(
            crate::models::status::StatusResponse,
            crate::models::health::HealthResponse,
            crate::error::ErrorResponse
        )
    ),
    tags(
        (name = "Global IP", description = "Public IP address of this host as seen by an IP echo service"),
        (name = "Health Check", description = "Liveness probe reporting the configured IP echo endpoint")
    ),
    info(
        description = "Reports the host's global IP address together with a UTC timestamp",
        title = "Global IP Status API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
