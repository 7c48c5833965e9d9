use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// ISO-8601 rendering used for `timestamp`: UTC, microsecond precision, no offset suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// # Global IP Status Response
///
/// Built fresh for every request from the IP echo lookup result and the
/// moment the response is assembled. Never cached.
///
/// ## Fields
/// - `timestamp`: ISO-8601 UTC time at which the response was assembled
/// - `global_ip`: raw text body returned by the IP echo service
///
/// ## Example JSON
/// ```json
/// {
///   "timestamp": "2024-01-01T00:00:00.000000",
///   "global_ip": "203.0.113.7"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "2024-01-01T00:00:00.000000")]
    pub timestamp: String,
    #[schema(example = "203.0.113.7")]
    pub global_ip: String,
}

impl StatusResponse {
    /// Stamps `global_ip` with the current UTC time.
    pub fn now(global_ip: String) -> Self {
        Self::at(Utc::now(), global_ip)
    }

    pub fn at(time: DateTime<Utc>, global_ip: String) -> Self {
        Self {
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
            global_ip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn test_status_response_at_fixed_time() {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let response = StatusResponse::at(time, "203.0.113.7".to_string());

        assert_eq!(response.timestamp, "2024-01-01T00:00:00.000000");
        assert_eq!(response.global_ip, "203.0.113.7");
    }

    #[test]
    fn test_status_response_now_is_parseable() {
        let response = StatusResponse::now("198.51.100.1".to_string());

        let parsed = NaiveDateTime::parse_from_str(&response.timestamp, TIMESTAMP_FORMAT);
        assert!(parsed.is_ok(), "Timestamp should be ISO 8601 without offset");
    }

    #[test]
    fn test_status_response_keeps_empty_ip() {
        let response = StatusResponse::now(String::new());

        assert_eq!(response.global_ip, "");
        assert!(!response.timestamp.is_empty());
    }

    #[test]
    fn test_status_response_serializes_exactly_two_keys() {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_value(StatusResponse::at(time, "203.0.113.7".to_string()))
            .expect("Should serialize to JSON");

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["timestamp"], "2024-01-01T12:30:00.000000");
        assert_eq!(object["global_ip"], "203.0.113.7");
    }
}
