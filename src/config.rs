//! Configuration for ankirpc
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

use reqwest::Url;

use crate::error::{AnkiError, Result};

/// Default AnkiConnect listen address
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8765";

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Endpoint Configuration
    // -------------------------------------------------------------------------
    /// Base URL of the AnkiConnect service
    pub endpoint: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    // -------------------------------------------------------------------------
    // Timeout Configuration
    // -------------------------------------------------------------------------
    /// Whole-request timeout applied when a call has no deadline of its own
    /// (milliseconds, 0 disables)
    pub timeout_ms: u64,

    /// TCP connect timeout (milliseconds, 0 disables)
    pub connect_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: format!("ankirpc/{}", crate::VERSION),
            timeout_ms: 30_000,
            connect_timeout_ms: 5_000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default request timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        (self.connect_timeout_ms > 0).then(|| Duration::from_millis(self.connect_timeout_ms))
    }

    /// Check the endpoint is a usable plain-HTTP URL
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(self.endpoint.trim()).map_err(|e| {
            AnkiError::Config(format!("invalid endpoint {:?}: {}", self.endpoint, e))
        })?;
        if url.scheme() != "http" {
            return Err(AnkiError::Config(format!(
                "endpoint must start with http://, got {:?}",
                self.endpoint
            )));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(AnkiError::Config(format!(
                "endpoint has no host: {:?}",
                self.endpoint
            )));
        }
        if self.user_agent.is_empty() {
            return Err(AnkiError::Config("user agent must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the AnkiConnect base URL
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the default request timeout (in milliseconds)
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Validate and return the config
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
