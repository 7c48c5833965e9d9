use crate::config::AppConfig;
use crate::models::health::HealthResponse;
use actix_web::{HttpResponse, Responder, get, web};

/// Liveness probe. Reports the configured IP echo endpoint and timeout but
/// never calls it, so an upstream outage does not fail the probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is accepting requests", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn liveness(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::for_config(&config))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(liveness);
}
