//! Client configuration.

use std::time::Duration;

use crate::domain::error::ConfigError;

/// Default client-wide request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 1500;

/// Everything needed to talk to the platform API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub token: String,
    /// Log every request line and payload.
    pub debug: bool,
    pub timeout: Duration,
}

impl ClientConfig {
    /// # Errors
    ///
    /// Fails when `host` or `token` is empty.
    pub fn new(
        host: impl Into<String>,
        token: impl Into<String>,
        debug: bool,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let host = host.into();
        let token = token.into();
        if host.trim().is_empty() {
            return Err(ConfigError::MissingHost);
        }
        if token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            token,
            debug,
            timeout,
        })
    }
}
