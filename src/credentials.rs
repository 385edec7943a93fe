//! Credential type with automatic memory zeroization.
//!
//! The Cobinhood API authenticates with a single opaque token passed in the
//! `Authorization` header. Anonymous (public) access sends an empty string.
//! The token is cleared from memory when dropped and redacted in `Debug`
//! and `Display` output to prevent accidental logging.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An authorization token for the Cobinhood API.
///
/// Immutable once constructed. An empty token means anonymous access:
/// public endpoints work, private ones are rejected server-side.
///
/// # Example
///
/// ```rust
/// use cobinhood::credentials::Credential;
///
/// let cred = Credential::new("my-api-token");
/// assert_eq!(cred.expose_token(), "my-api-token");
/// assert!(!cred.is_anonymous());
///
/// // Debug output is redacted
/// assert_eq!(format!("{:?}", cred), "[REDACTED]");
///
/// let anon = Credential::anonymous();
/// assert_eq!(anon.expose_token(), "");
/// ```
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Creates a credential from an API token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Creates an anonymous credential (empty token).
    pub fn anonymous() -> Self {
        Self(String::new())
    }

    /// Returns the raw token.
    ///
    /// Use the returned reference immediately; do not persist it.
    #[inline]
    pub fn expose_token(&self) -> &str {
        &self.0
    }

    /// Returns `true` if no token is set.
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.0.is_empty()
    }
}

// Prevent accidental logging of the token
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for Credential {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Credential {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacted() {
        let cred = Credential::new("secret-token");
        assert_eq!(format!("{:?}", cred), "[REDACTED]");
    }

    #[test]
    fn test_display_redacted() {
        let cred = Credential::new("secret-token");
        assert_eq!(format!("{}", cred), "[REDACTED]");
    }

    #[test]
    fn test_expose_token() {
        let cred = Credential::new("secret-token");
        assert_eq!(cred.expose_token(), "secret-token");
    }

    #[test]
    fn test_anonymous() {
        let cred = Credential::anonymous();
        assert!(cred.is_anonymous());
        assert_eq!(cred.expose_token(), "");
    }

    #[test]
    fn test_default_is_anonymous() {
        assert!(Credential::default().is_anonymous());
    }

    #[test]
    fn test_from_conversions() {
        let a: Credential = "tok".into();
        let b: Credential = String::from("tok").into();
        assert_eq!(a, b);
    }
}
