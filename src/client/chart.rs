//! Chart endpoints.

use super::Cobinhood;
use crate::endpoint;
use crate::error::Result;
use crate::response::ApiResponse;

impl Cobinhood {
    /// Fetches charting candles for a trading pair.
    ///
    /// `GET /v1/chart/candles/<trading_pair_id>`
    pub async fn fetch_candles(&self, trading_pair_id: &str) -> Result<ApiResponse> {
        self.dispatch(
            &endpoint::CHART_CANDLES,
            &[("trading_pair_id", trading_pair_id)],
            None,
            None,
        )
        .await
    }
}
