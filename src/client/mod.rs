//! Cobinhood client and request dispatcher.
//!
//! [`Cobinhood`] owns an immutable configuration, a transport handle and a
//! nonce factory. Every endpoint operation resolves to one call of
//! [`Cobinhood::dispatch`]: a pure pass-through of endpoint descriptor,
//! path substitutions, query parameters and optional body into a single
//! network round trip.

mod chart;
mod market;
mod system;
mod trading;
mod wallet;

use crate::config::{ClientConfig, ClientConfigBuilder};
use crate::endpoint::{self, Endpoint};
use crate::error::{Error, Result};
use crate::params::Params;
use crate::response::ApiResponse;
use crate::time::NonceFactory;
use crate::transport::{ReqwestTransport, Transport, TransportRequest};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Name of the replay-protection header on private mutating requests.
const NONCE_HEADER: &str = "nonce";

/// Cobinhood exchange client.
///
/// # Example
///
/// ```rust,no_run
/// use cobinhood::Cobinhood;
///
/// # async fn example() -> cobinhood::Result<()> {
/// let client = Cobinhood::builder().api_key("your-token").build()?;
/// let response = client.fetch_system_time().await?;
/// assert!(response.success);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Cobinhood {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    nonce: NonceFactory,
}

impl Cobinhood {
    /// Creates a new client using the builder pattern.
    pub fn builder() -> CobinhoodBuilder {
        CobinhoodBuilder::new()
    }

    /// Creates a new client with the production transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a new client with a caller-supplied transport.
    ///
    /// Mainly useful for tests that need a transport mock/spy.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            nonce: NonceFactory::new(),
        }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the exchange identifier.
    pub fn id(&self) -> &str {
        "cobinhood"
    }

    /// Returns the exchange display name.
    pub fn name(&self) -> &str {
        "Cobinhood"
    }

    /// Dispatches a request against a registered operation name.
    ///
    /// Fails with a configuration error before any I/O when the name is
    /// not in the endpoint registry.
    pub async fn call(
        &self,
        operation: &str,
        substitutions: &[(&str, &str)],
        params: Option<&Params>,
    ) -> Result<ApiResponse> {
        let descriptor = endpoint::find(operation)
            .ok_or_else(|| Error::configuration("incorrect method call"))?;
        self.dispatch(descriptor, substitutions, params, None).await
    }

    /// Dispatches one request: builds the URL from the endpoint descriptor,
    /// attaches headers, performs exactly one network round trip and
    /// decodes the envelope.
    ///
    /// Each call is a pure function of its inputs; no state is shared
    /// across calls apart from the monotonic nonce.
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] when the endpoint version does not match
    ///   the configured one or the path template cannot be resolved
    ///   (before any I/O).
    /// - [`Error::UnsupportedVerb`] for verbs other than
    ///   GET/PUT/POST/DELETE (before any I/O).
    /// - [`Error::Remote`] for any transport or decode failure, carrying
    ///   the normalized `resource_not_found` payload.
    pub async fn dispatch(
        &self,
        descriptor: &Endpoint,
        substitutions: &[(&str, &str)],
        params: Option<&Params>,
        body: Option<Value>,
    ) -> Result<ApiResponse> {
        if descriptor.version != self.config.api_version {
            return Err(Error::configuration("incorrect method call"));
        }
        let path = descriptor.resolve_path(substitutions)?;
        let method = parse_verb(descriptor.verb)?;

        let mut url = format!(
            "{}/{}/{}",
            self.config.base_url, descriptor.version, path
        );
        if let Some(p) = params {
            if !p.is_empty() {
                url = format!("{}?{}", url, p.encode());
            }
        }

        let headers = self.build_headers(descriptor, &method)?;

        if self.config.verbose {
            debug!(
                operation = descriptor.name,
                verb = %method,
                url = %url,
                has_body = body.is_some(),
                "dispatching request"
            );
        }

        let request = TransportRequest {
            method,
            url,
            headers,
            body,
        };

        let value = self.transport.send(request).await.map_err(|e| {
            // Lossy by contract: callers always see the same payload.
            warn!(
                operation = descriptor.name,
                cause = %e,
                "transport failure normalized to resource_not_found"
            );
            Error::remote()
        })?;

        serde_json::from_value(value).map_err(|e| {
            warn!(
                operation = descriptor.name,
                cause = %e,
                "malformed envelope normalized to resource_not_found"
            );
            Error::remote()
        })
    }

    fn build_headers(&self, descriptor: &Endpoint, method: &Method) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let token = HeaderValue::from_str(self.config.credential.expose_token())
            .map_err(|_| Error::configuration("credential contains invalid header characters"))?;
        headers.insert(AUTHORIZATION, token);

        // Replay protection on private mutating endpoints.
        if descriptor.scope.is_private() && *method != Method::GET {
            let nonce = self.nonce.next();
            let value = HeaderValue::from_str(&nonce.to_string())
                .map_err(|_| Error::configuration("invalid nonce value"))?;
            headers.insert(NONCE_HEADER, value);
        }

        Ok(headers)
    }
}

/// Maps an endpoint table verb onto an HTTP method.
///
/// Fails with an unsupported-verb error for anything outside
/// GET/PUT/POST/DELETE, before any network call is attempted.
fn parse_verb(verb: &str) -> Result<Method> {
    match verb.to_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "PUT" => Ok(Method::PUT),
        "POST" => Ok(Method::POST),
        "DELETE" => Ok(Method::DELETE),
        _ => Err(Error::unsupported_verb("invalid request type")),
    }
}

/// Builder for [`Cobinhood`].
///
/// # Example
///
/// ```rust,no_run
/// use cobinhood::Cobinhood;
/// use std::time::Duration;
///
/// let client = Cobinhood::builder()
///     .api_key("your-token")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CobinhoodBuilder {
    config: ClientConfigBuilder,
}

impl CobinhoodBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token used for private endpoints.
    pub fn api_key(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.api_key(token);
        self
    }

    /// Overrides the REST base URL (for mocking/testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.base_url(url);
        self
    }

    /// Sets the total request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Enables or disables verbose logging.
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.config = self.config.verbose(enabled);
        self
    }

    /// Builds the client with the production transport.
    pub fn build(self) -> Result<Cobinhood> {
        Cobinhood::new(self.config.build())
    }
}
