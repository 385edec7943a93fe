//! Response envelope types.
//!
//! Every Cobinhood endpoint answers with the same JSON envelope:
//!
//! ```json
//! {"success": true,  "result": { ... }}
//! {"success": false, "error": {"error_code": "..."}}
//! ```
//!
//! The envelope is decoded as-is; `result` stays an untyped JSON value since
//! its shape varies per endpoint. A `success: false` envelope is a normal
//! return value, not an error: callers inspect the flag.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body carried by a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code, e.g. `resource_not_found`.
    pub error_code: String,
}

/// Decoded response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the server reported success.
    pub success: bool,
    /// Endpoint-specific result payload, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error body, present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

impl ApiResponse {
    /// Returns a field of the result payload, if present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cobinhood::response::ApiResponse;
    ///
    /// let response: ApiResponse = serde_json::from_str(
    ///     r#"{"success": true, "result": {"time": 1520288666216}}"#,
    /// ).unwrap();
    /// assert_eq!(response.result_field("time").and_then(|v| v.as_i64()),
    ///            Some(1520288666216));
    /// ```
    pub fn result_field(&self, key: &str) -> Option<&Value> {
        self.result.as_ref().and_then(|r| r.get(key))
    }

    /// Returns the error code if the server reported a failure.
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.error_code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_success_envelope() {
        let response: ApiResponse =
            serde_json::from_value(json!({"success": true, "result": {"time": 1520288666216_i64}}))
                .unwrap();
        assert!(response.success);
        assert_eq!(
            response.result_field("time"),
            Some(&json!(1520288666216_i64))
        );
        assert!(response.error.is_none());
    }

    #[test]
    fn test_decode_failure_envelope() {
        let response: ApiResponse = serde_json::from_value(
            json!({"success": false, "error": {"error_code": "resource_not_found"}}),
        )
        .unwrap();
        assert!(!response.success);
        assert_eq!(response.error_code(), Some("resource_not_found"));
        assert!(response.result.is_none());
    }

    #[test]
    fn test_decode_requires_success_flag() {
        let result: Result<ApiResponse, _> = serde_json::from_value(json!({"result": {}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let response = ApiResponse {
            success: true,
            result: Some(json!({"time": 1})),
            error: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"success": true, "result": {"time": 1}}));
    }
}
