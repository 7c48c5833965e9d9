use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Failures of the outbound IP echo lookup.
///
/// Both variants surface to the caller as `500 Internal Server Error` with an
/// [`ErrorResponse`] body. No partial status payload is ever returned.
#[derive(Error, Debug)]
pub enum AppError {
    /// The IP echo service could not be reached, timed out, or the connection
    /// broke while the body was being read.
    #[error("IP echo service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The IP echo service answered, but with a non-2xx status or a body that
    /// is not valid UTF-8.
    #[error("IP echo service returned a bad response: {0}")]
    UpstreamBadResponse(String),
}

impl AppError {
    /// Machine-readable code placed in the `error` field of the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            AppError::UpstreamBadResponse(_) => "UPSTREAM_BAD_RESPONSE",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamUnavailable(err.to_string())
    }
}

/// # Error Response
///
/// Body sent with every failed lookup.
///
/// ## Example JSON
/// ```json
/// {
///   "error": "UPSTREAM_UNAVAILABLE",
///   "message": "IP echo service unavailable: operation timed out"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
        })
    }
}
