use crate::config::AppConfig;
use crate::error::AppError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error};

/// Source of the caller's public ("global") IP address.
///
/// Implementations perform exactly one outbound request per call and never
/// cache the result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IpLookup: Send + Sync {
    /// Returns the raw text body of the IP echo service.
    ///
    /// # Errors
    /// - [`AppError::UpstreamUnavailable`] on connect failure, timeout or a
    ///   broken transfer
    /// - [`AppError::UpstreamBadResponse`] on a non-2xx status or a body that
    ///   is not valid UTF-8
    async fn fetch_global_ip(&self) -> Result<String, AppError>;
}

/// # IP Echo Client
///
/// Queries a plain-text "what is my IP" endpoint (by default
/// `http://ifconfig.me`) with a bounded timeout. The underlying
/// `reqwest::Client` pools connections and is cheap to share between
/// workers.
#[derive(Clone, Debug)]
pub struct IpEchoClient {
    client: reqwest::Client,
    url: String,
}

impl IpEchoClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        Self::new(config.ip_echo_url.clone(), config.ip_echo_timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl IpLookup for IpEchoClient {
    async fn fetch_global_ip(&self) -> Result<String, AppError> {
        debug!("Fetching global IP from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .inspect_err(|e| error!("IP echo request to {} failed: {}", self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            error!("IP echo service {} answered with {}", self.url, status);
            return Err(AppError::UpstreamBadResponse(format!("status {}", status)));
        }

        let body = response
            .bytes()
            .await
            .inspect_err(|e| error!("Reading IP echo body from {} failed: {}", self.url, e))?;

        let global_ip = String::from_utf8(body.to_vec()).map_err(|e| {
            error!("IP echo service {} sent a non UTF-8 body", self.url);
            AppError::UpstreamBadResponse(format!("body is not valid UTF-8: {}", e))
        })?;

        debug!("Global IP fetched successfully: {:?}", global_ip);
        Ok(global_ip)
    }
}
