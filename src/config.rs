//! Client configuration structures and builder.
//!
//! All state the client carries lives in an explicit [`ClientConfig`] passed
//! at construction time. There is no module-level default credential or
//! transport.

use crate::credentials::Credential;
use crate::endpoint::ApiVersion;
use std::time::Duration;

/// Production REST base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.cobinhood.com";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST base URL, overridable for mocking/testing.
    pub base_url: String,
    /// API version requests are dispatched against.
    pub api_version: ApiVersion,
    /// Authorization token (anonymous when empty).
    pub credential: Credential,
    /// Total request timeout (default: 30 seconds).
    pub timeout: Duration,
    /// TCP connection timeout (default: 10 seconds).
    pub connect_timeout: Duration,
    /// User agent string sent with every request.
    pub user_agent: String,
    /// Enables verbose request/response logging.
    pub verbose: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: ApiVersion::default(),
            credential: Credential::anonymous(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("cobinhood-rs/{}", env!("CARGO_PKG_VERSION")),
            verbose: false,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration builder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cobinhood::config::ClientConfig;
    ///
    /// let config = ClientConfig::builder()
    ///     .api_key("your-token")
    ///     .verbose(true)
    ///     .build();
    /// assert!(!config.credential.is_anonymous());
    /// ```
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token used for private endpoints.
    pub fn api_key(mut self, token: impl Into<String>) -> Self {
        self.config.credential = Credential::new(token);
        self
    }

    /// Sets the credential directly.
    pub fn credential(mut self, credential: Credential) -> Self {
        self.config.credential = credential;
        self
    }

    /// Sets the API version.
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.config.api_version = version;
        self
    }

    /// Overrides the REST base URL (for mocking/testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Sets the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sets the TCP connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enables or disables verbose logging.
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.config.verbose = enabled;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_version, ApiVersion::V1);
        assert!(config.credential.is_anonymous());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("cobinhood-rs/"));
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = ClientConfig::builder()
            .api_key("token-123")
            .base_url("http://localhost:8080")
            .timeout(Duration::from_secs(5))
            .verbose(true)
            .build();
        assert_eq!(config.credential.expose_token(), "token-123");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.verbose);
    }
}
