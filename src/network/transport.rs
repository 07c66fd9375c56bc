//! Transport
//!
//! Moves an encoded request to the service and returns the raw response body.

use std::io::Read;
use std::time::Duration;

use bytes::Bytes;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::config::Config;
use crate::error::{AnkiError, Result};
use crate::protocol::MAX_RESPONSE_SIZE;

/// Blocking request/response channel to the remote service
///
/// Implementations must be safe to share between threads; the client adds
/// no locking of its own. A `deadline` bounds the whole exchange and an
/// expired deadline is reported as `AnkiError::Transport`.
pub trait Transport: Send + Sync {
    fn send(&self, body: Vec<u8>, deadline: Option<Duration>) -> Result<Bytes>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, body: Vec<u8>, deadline: Option<Duration>) -> Result<Bytes> {
        (**self).send(body, deadline)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, body: Vec<u8>, deadline: Option<Duration>) -> Result<Bytes> {
        (**self).send(body, deadline)
    }
}

/// HTTP transport over a pooled `reqwest` blocking client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Reusable, connection-pooled client
    client: Client,

    /// Service URL every request is posted to
    endpoint: String,
}

impl HttpTransport {
    /// Build the HTTP client from config
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AnkiError::Config(format!("HTTP client build failed: {}", e)))?;

        Ok(Self::with_client(client, config.endpoint.trim()))
    }

    /// Use an existing client (shares its connection pool)
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn send(&self, body: Vec<u8>, deadline: Option<Duration>) -> Result<Bytes> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(deadline) = deadline {
            request = request.timeout(deadline);
        }

        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnkiError::Transport(format!(
                "{} returned HTTP {}",
                self.endpoint, status
            )));
        }

        if let Some(len) = response.content_length() {
            if len > MAX_RESPONSE_SIZE as u64 {
                return Err(AnkiError::Transport(format!(
                    "Response too large: {} bytes (max {})",
                    len, MAX_RESPONSE_SIZE
                )));
            }
        }

        // Bodies without a Content-Length are capped while reading
        let mut body = Vec::new();
        response
            .take(MAX_RESPONSE_SIZE as u64 + 1)
            .read_to_end(&mut body)
            .map_err(|e| AnkiError::Transport(format!("failed to read response body: {}", e)))?;
        if body.len() > MAX_RESPONSE_SIZE {
            return Err(AnkiError::Transport(format!(
                "Response too large: more than {} bytes (max {})",
                MAX_RESPONSE_SIZE, MAX_RESPONSE_SIZE
            )));
        }

        Ok(Bytes::from(body))
    }
}
