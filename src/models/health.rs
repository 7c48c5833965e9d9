use crate::config::AppConfig;
use crate::models::status::TIMESTAMP_FORMAT;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Liveness Report
///
/// Confirms the service is accepting requests and echoes which IP echo
/// endpoint `GET /` would query. Built without contacting that endpoint.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-01-01T00:00:00.000000",
///   "ip_echo_url": "http://ifconfig.me",
///   "ip_echo_timeout_secs": 5
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "UP")]
    pub status: String,
    #[schema(example = "2024-01-01T00:00:00.000000")]
    pub timestamp: String,
    #[schema(example = "http://ifconfig.me")]
    pub ip_echo_url: String,
    #[schema(example = 5)]
    pub ip_echo_timeout_secs: u64,
}

impl HealthResponse {
    pub fn for_config(config: &AppConfig) -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            ip_echo_url: config.ip_echo_url.clone(),
            ip_echo_timeout_secs: config.ip_echo_timeout.as_secs(),
        }
    }
}
