//! System endpoints.

use super::Cobinhood;
use crate::endpoint;
use crate::error::Result;
use crate::response::ApiResponse;

impl Cobinhood {
    /// Fetches the current system time as a Unix timestamp in milliseconds.
    ///
    /// `GET /v1/system/time`
    ///
    /// On success the result carries `{"time": <integer>}`.
    pub async fn fetch_system_time(&self) -> Result<ApiResponse> {
        self.dispatch(&endpoint::SYSTEM_TIME, &[], None, None).await
    }

    /// Fetches the system information (deployment phase and revision).
    ///
    /// `GET /v1/system/info`
    pub async fn fetch_system_info(&self) -> Result<ApiResponse> {
        self.dispatch(&endpoint::SYSTEM_INFO, &[], None, None).await
    }
}
