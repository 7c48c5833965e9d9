use actix_web::web;

/// # Global IP Status Endpoint
///
/// `GET /` returns `{"timestamp": ..., "global_ip": ...}` built from one call
/// to the IP echo service.
pub mod status;

/// # Health Check Endpoint
///
/// `GET /health` reports liveness and the configured IP echo endpoint.
pub mod health;

/// # Route Configuration
///
/// Mounts every endpoint at the root of the service.
///
/// ```text
/// GET /        - Global IP status
/// GET /health  - Service health status
/// ```
///
/// Expects a `web::Data<dyn IpLookup>` and a `web::Data<AppConfig>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(status::configure_routes)
        .configure(health::configure_routes);
}
