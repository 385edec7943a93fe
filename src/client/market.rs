//! Public market data endpoints.

use super::Cobinhood;
use crate::endpoint;
use crate::error::Result;
use crate::params::Params;
use crate::response::ApiResponse;

impl Cobinhood {
    /// Fetches info of all currencies available for trading.
    ///
    /// `GET /v1/market/currencies`
    pub async fn fetch_currencies(&self) -> Result<ApiResponse> {
        self.dispatch(&endpoint::MARKET_CURRENCIES, &[], None, None)
            .await
    }

    /// Fetches info for all trading pairs available.
    ///
    /// `GET /v1/market/trading_pairs`
    pub async fn fetch_trading_pairs(&self) -> Result<ApiResponse> {
        self.dispatch(&endpoint::MARKET_TRADING_PAIRS, &[], None, None)
            .await
    }

    /// Fetches the order book for a trading pair.
    ///
    /// `GET /v1/market/orderbooks/<trading_pair_id>?limit=N`
    ///
    /// The result's `orderbook` contains `bids`/`asks` arrays of
    /// `[price, count, size]` triples. The limit counts entries per side,
    /// starting from the best price; it defaults to 50.
    pub async fn fetch_order_book(
        &self,
        trading_pair_id: &str,
        limit: Option<u32>,
    ) -> Result<ApiResponse> {
        let params = Params::new().with("limit", limit.unwrap_or(50));
        self.dispatch(
            &endpoint::MARKET_ORDER_BOOK,
            &[("trading_pair_id", trading_pair_id)],
            Some(&params),
            None,
        )
        .await
    }

    /// Fetches 24h trading statistics for all pairs.
    ///
    /// `GET /v1/market/stats`
    pub async fn fetch_trading_stats(&self) -> Result<ApiResponse> {
        self.dispatch(&endpoint::MARKET_STATS, &[], None, None).await
    }

    /// Fetches the ticker for a trading pair.
    ///
    /// `GET /v1/market/tickers/<trading_pair_id>`
    pub async fn fetch_ticker(&self, trading_pair_id: &str) -> Result<ApiResponse> {
        self.dispatch(
            &endpoint::MARKET_TICKER,
            &[("trading_pair_id", trading_pair_id)],
            None,
            None,
        )
        .await
    }

    /// Fetches the most recent public trades for a trading pair.
    ///
    /// `GET /v1/market/trades/<trading_pair_id>?limit=N`
    ///
    /// The limit counts trades starting from the most recent; it defaults
    /// to 20.
    pub async fn fetch_trades(
        &self,
        trading_pair_id: &str,
        limit: Option<u32>,
    ) -> Result<ApiResponse> {
        let params = Params::new().with("limit", limit.unwrap_or(20));
        self.dispatch(
            &endpoint::MARKET_TRADES,
            &[("trading_pair_id", trading_pair_id)],
            Some(&params),
            None,
        )
        .await
    }
}
