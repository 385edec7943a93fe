//! Error handling for the Cobinhood client.
//!
//! Three failure kinds cover the whole library:
//!
//! ```text
//! Error
//! ├── Configuration   - endpoint/version not registered; fails before any I/O
//! ├── UnsupportedVerb - HTTP verb not recognized; fails before any I/O
//! └── Remote          - transport or decode failure, normalized payload
//! ```
//!
//! `Remote` deliberately collapses every transport-level cause (connection
//! refused, DNS failure, non-JSON body) into one fixed payload:
//! `{"success": false, "error": {"error_code": "resource_not_found"}}`.
//! The original cause is logged before being discarded, never surfaced.
//!
//! # Example
//!
//! ```rust
//! use cobinhood::error::Error;
//!
//! let err = Error::configuration("incorrect method call");
//! assert!(err.to_string().contains("incorrect method call"));
//! ```

use serde_json::{Value, json};
use std::borrow::Cow;
use thiserror::Error;

/// Result type alias for all Cobinhood operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error code carried by the normalized remote-failure payload.
pub const RESOURCE_NOT_FOUND: &str = "resource_not_found";

/// The primary error type for the `cobinhood` library.
///
/// Uses `Cow<'static, str>` for zero-allocation static messages, in the
/// same spirit as the rest of the API surface.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The caller requested an endpoint/version combination that is not
    /// registered, or a path template that cannot be resolved. Raised
    /// before any network I/O is attempted.
    #[error("Configuration error: {0}")]
    Configuration(Cow<'static, str>),

    /// The requested HTTP verb is not one of GET/PUT/POST/DELETE. Raised
    /// before any network I/O is attempted.
    #[error("Unsupported verb: {0}")]
    UnsupportedVerb(Cow<'static, str>),

    /// A failure during the network call or response decoding, normalized
    /// to a fixed payload regardless of the underlying cause.
    #[error("Remote error: {payload}")]
    Remote {
        /// The synthesized error payload.
        payload: Value,
    },
}

impl Error {
    /// Creates a configuration error.
    /// Accepts both `&'static str` (zero allocation) and `String`.
    pub fn configuration(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates an unsupported-verb error.
    /// Accepts both `&'static str` (zero allocation) and `String`.
    pub fn unsupported_verb(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::UnsupportedVerb(msg.into())
    }

    /// Creates a remote error carrying the normalized payload.
    ///
    /// The payload is always exactly
    /// `{"success": false, "error": {"error_code": "resource_not_found"}}`.
    pub fn remote() -> Self {
        Self::Remote {
            payload: json!({
                "success": false,
                "error": {
                    "error_code": RESOURCE_NOT_FOUND,
                },
            }),
        }
    }

    /// Returns the normalized payload if this is a remote error.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Remote { payload } => Some(payload),
            _ => None,
        }
    }

    /// Returns `true` if this error was raised before any network I/O.
    pub fn is_pre_flight(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::UnsupportedVerb(_))
    }

    /// Returns `true` if this is a remote (transport/decode) error.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err = Error::configuration("incorrect method call");
        assert_eq!(
            err.to_string(),
            "Configuration error: incorrect method call"
        );
        assert!(err.is_pre_flight());
        assert!(!err.is_remote());
    }

    #[test]
    fn test_unsupported_verb_display() {
        let err = Error::unsupported_verb("invalid request type");
        assert_eq!(err.to_string(), "Unsupported verb: invalid request type");
        assert!(err.is_pre_flight());
    }

    #[test]
    fn test_remote_payload_shape() {
        let err = Error::remote();
        let payload = err.payload().expect("remote error carries a payload");
        assert_eq!(
            payload,
            &json!({
                "success": false,
                "error": {"error_code": "resource_not_found"},
            })
        );
        assert!(err.is_remote());
        assert!(!err.is_pre_flight());
    }

    #[test]
    fn test_payload_absent_on_pre_flight_errors() {
        assert!(Error::configuration("x").payload().is_none());
        assert!(Error::unsupported_verb("x").payload().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Error>();
    }
}
