use crate::error::{AppError, ErrorResponse};
use crate::lookup::IpLookup;
use crate::models::status::StatusResponse;
use actix_web::{HttpResponse, Responder, get, web};
use tracing::debug;

/// # Global IP Status Endpoint
///
/// Asks the IP echo service for this host's public address and returns it
/// together with the UTC time the response was assembled.
///
/// ## Responses
///
/// - **200 OK**: Body is a [`StatusResponse`]
/// - **500 Internal Server Error**: The IP echo service was unreachable, timed
///   out, answered with a non-2xx status, or sent a non UTF-8 body. Body is an
///   [`ErrorResponse`]
///
/// ## Example Response
///
/// ```json
/// {
///   "timestamp": "2024-01-01T00:00:00.000000",
///   "global_ip": "203.0.113.7"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Current global IP address", body = StatusResponse),
        (status = 500, description = "IP echo service failed", body = ErrorResponse)
    ),
    tag = "Global IP"
)]
#[get("/")]
pub async fn global_ip_status(
    lookup: web::Data<dyn IpLookup>,
) -> Result<impl Responder, AppError> {
    let global_ip = lookup.fetch_global_ip().await?;

    // Stamped after the lookup returns
    let response = StatusResponse::now(global_ip);
    debug!("Responding with {:?}", response);

    Ok(HttpResponse::Ok().json(response))
}

/// # Route Configuration
///
/// - `GET /`: Global IP status
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(global_ip_status);
}
