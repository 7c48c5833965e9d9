use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_IP_ECHO_URL: &str = "http://ifconfig.me";
pub const DEFAULT_IP_ECHO_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("IP_ECHO_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

/// # Service Configuration
///
/// Read once at startup. Every variable is optional and falls back to a
/// default; a variable that is present but unparsable is an error.
///
/// ## Variables
/// - `BIND_ADDRESS`: listen address (default `127.0.0.1`)
/// - `PORT`: listen port (default `8080`)
/// - `IP_ECHO_URL`: IP echo endpoint (default `http://ifconfig.me`)
/// - `IP_ECHO_TIMEOUT_SECS`: outbound call timeout in seconds (default `5`)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_address: String,
    pub port: u16,
    pub ip_echo_url: String,
    pub ip_echo_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            ip_echo_url: DEFAULT_IP_ECHO_URL.to_string(),
            ip_echo_timeout: Duration::from_secs(DEFAULT_IP_ECHO_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the process environment.
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout_secs = parse_or(&lookup, "IP_ECHO_TIMEOUT_SECS", DEFAULT_IP_ECHO_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            ip_echo_url: lookup("IP_ECHO_URL").unwrap_or(defaults.ip_echo_url),
            ip_echo_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
