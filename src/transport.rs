//! HTTP transport abstraction.
//!
//! The dispatcher talks to the network through the [`Transport`] trait so
//! that tests can verify URL assembly and pre-flight error paths with a
//! spy instead of a live server. [`ReqwestTransport`] is the production
//! implementation: one round trip per call, no retries.
//!
//! A response with a non-2xx status but a parseable JSON body is returned
//! like any other; the dispatcher treats only connection failures and
//! non-JSON bodies as transport failures.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::{debug, error};

/// A fully assembled request handed to the transport.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method, already validated by the dispatcher.
    pub method: Method,
    /// Final URL including query string.
    pub url: String,
    /// Headers, including `Authorization` and an optional `nonce`.
    pub headers: HeaderMap,
    /// Optional JSON request body.
    pub body: Option<Value>,
}

/// Transport-level failure.
///
/// These never reach the caller directly; the dispatcher normalizes them
/// into [`Error::Remote`](crate::error::Error::Remote) after logging.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be sent or the connection dropped mid-flight.
    #[error("connection failed: {0}")]
    Connection(String),
    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Generic HTTP transport: send one request, return the parsed JSON body.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Performs exactly one network round trip.
    async fn send(&self, request: TransportRequest) -> std::result::Result<Value, TransportError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> std::result::Result<Value, TransportError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!(error = %e, url = %request.url, "request send failed");
            TransportError::Connection(e.to_string())
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            error!(error = %e, url = %request.url, "failed to read response body");
            TransportError::Connection(e.to_string())
        })?;

        debug!(
            status = status.as_u16(),
            body_length = bytes.len(),
            "response received"
        );

        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_build_transport_from_default_config() {
        let config = ClientConfig::default();
        assert!(ReqwestTransport::new(&config).is_ok());
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Connection("refused".to_string());
        assert_eq!(err.to_string(), "connection failed: refused");
        let err = TransportError::Decode("expected value".to_string());
        assert_eq!(err.to_string(), "invalid response body: expected value");
    }
}
