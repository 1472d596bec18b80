//! Centralized configuration for secfetch

use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.sec.gov/Archives/edgar/data";
const DEFAULT_USER_AGENT: &str = "secfetch/0.1.0";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// HTTP client configuration, passed explicitly to the client rather than
/// read from globals.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the EDGAR archive
    pub base_url: String,
    /// User agent string sent with every request (required by SEC)
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("SECFETCH_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let user_agent = std::env::var("SECFETCH_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let timeout_seconds = parse_env_var("SECFETCH_HTTP_TIMEOUT_SECONDS")?
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Ok(Self {
            base_url,
            user_agent,
            timeout_seconds,
        })
    }

    /// Get HTTP timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}
