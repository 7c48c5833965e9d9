/// Liveness payload returned by `GET /health`.
pub mod health;

/// # Global IP Status
///
/// The `{timestamp, global_ip}` payload returned by `GET /`.
pub mod status;
