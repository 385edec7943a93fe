//! Cobinhood REST API client
//!
//! A stateless client library for the Cobinhood cryptocurrency exchange.
//! Every operation is a one-shot request/response round trip: the URL is
//! built from a static endpoint table, query parameters are URL-encoded in
//! insertion order, exactly one HTTP request is issued with an optional
//! `Authorization` header, and the JSON body is decoded into a
//! `{success, result, error}` envelope.
//!
//! # Features
//!
//! - **Explicit state**: credential and transport live in a client struct,
//!   no module-level globals
//! - **Typed failures**: `thiserror`-based error taxonomy with three kinds,
//!   two of which fire before any network I/O
//! - **Async/Await**: built on tokio and reqwest
//! - **Testable**: the transport is a trait, so URL assembly and pre-flight
//!   errors are verifiable with a spy
//!
//! # Example
//!
//! ```rust,no_run
//! use cobinhood::Cobinhood;
//!
//! # async fn example() -> cobinhood::Result<()> {
//! let client = Cobinhood::builder().api_key("your-token").build()?;
//!
//! let book = client.fetch_order_book("COB-USDT", Some(50)).await?;
//! if book.success {
//!     println!("{:?}", book.result_field("orderbook"));
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

// Re-exports of external dependencies
pub use serde;
pub use serde_json;

// Core modules
pub mod client;
pub mod config;
pub mod credentials;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod params;
pub mod response;
pub mod time;
pub mod transport;
pub mod types;

// Re-exports of core types for convenience
pub use client::{Cobinhood, CobinhoodBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
pub use credentials::Credential;
pub use endpoint::{ApiVersion, Endpoint, Scope};
pub use error::{Error, Result};
pub use params::Params;
pub use response::{ApiErrorBody, ApiResponse};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportRequest};
pub use types::{OrderPatch, OrderRequest, OrderSide, OrderType};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```rust
/// use cobinhood::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{Cobinhood, CobinhoodBuilder};
    pub use crate::config::{ClientConfig, ClientConfigBuilder};
    pub use crate::credentials::Credential;
    pub use crate::endpoint::{ApiVersion, Endpoint, Scope};
    pub use crate::error::{Error, Result};
    pub use crate::logging::{LogConfig, LogFormat, LogLevel, init_logging, try_init_logging};
    pub use crate::params::Params;
    pub use crate::response::{ApiErrorBody, ApiResponse};
    pub use crate::time::milliseconds;
    pub use crate::transport::{Transport, TransportError, TransportRequest};
    pub use crate::types::{OrderPatch, OrderRequest, OrderSide, OrderType};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "cobinhood");
    }
}
