//! Query parameter handling.
//!
//! Parameters keep their insertion order so that the serialized query string
//! is deterministic. The server does not care about ordering; tests do.

use std::fmt;

/// An insertion-ordered list of query parameters.
///
/// # Example
///
/// ```rust
/// use cobinhood::params::Params;
///
/// let mut params = Params::new();
/// params.push("limit", 50);
/// params.push("currency", "BTC");
/// assert_eq!(params.encode(), "limit=50&currency=BTC");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter. Values are stringified with `Display`.
    pub fn push(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        self.pairs.push((name.into(), value.to_string()));
    }

    /// Builder-style variant of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.push(name, value);
        self
    }

    /// Returns `true` if no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over the `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes the parameters into a URL query string.
    ///
    /// Values are percent-encoded; names are fixed API identifiers and
    /// passed through as-is.
    pub fn encode(&self) -> String {
        let pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        pairs.join("&")
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_encodes_to_empty_string() {
        assert_eq!(Params::new().encode(), "");
        assert!(Params::new().is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let params = Params::new()
            .with("b", 2)
            .with("a", 1)
            .with("c", 3);
        assert_eq!(params.encode(), "b=2&a=1&c=3");
    }

    #[test]
    fn test_values_are_url_encoded() {
        let params = Params::new().with("pair", "COB/USDT & more");
        assert_eq!(params.encode(), "pair=COB%2FUSDT%20%26%20more");
    }

    #[test]
    fn test_duplicate_names_kept() {
        let params = Params::new().with("id", "a").with("id", "b");
        assert_eq!(params.encode(), "id=a&id=b");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let params: Params = vec![("limit", 50), ("page", 2)].into_iter().collect();
        assert_eq!(params.encode(), "limit=50&page=2");
    }
}
