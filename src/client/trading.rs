//! Trading endpoints (authenticated).

use super::Cobinhood;
use crate::endpoint;
use crate::error::{Error, Result};
use crate::params::Params;
use crate::response::ApiResponse;
use crate::types::{OrderPatch, OrderRequest};

impl Cobinhood {
    /// Fetches a single order of the current user.
    ///
    /// `GET /v1/trading/orders/<order_id>`
    pub async fn fetch_order(&self, order_id: &str) -> Result<ApiResponse> {
        self.dispatch(&endpoint::TRADING_ORDER, &[("order_id", order_id)], None, None)
            .await
    }

    /// Fetches all trades originating from a specific order.
    ///
    /// `GET /v1/trading/orders/<order_id>/trades`
    pub async fn fetch_order_trades(&self, order_id: &str) -> Result<ApiResponse> {
        self.dispatch(
            &endpoint::TRADING_ORDER_TRADES,
            &[("order_id", order_id)],
            None,
            None,
        )
        .await
    }

    /// Fetches all open orders of the current user.
    ///
    /// `GET /v1/trading/orders?limit=N` (default 20 per page)
    pub async fn fetch_orders(&self, limit: Option<u32>) -> Result<ApiResponse> {
        let params = Params::new().with("limit", limit.unwrap_or(20));
        self.dispatch(&endpoint::TRADING_ORDERS, &[], Some(&params), None)
            .await
    }

    /// Places a new order.
    ///
    /// `POST /v1/trading/orders`
    pub async fn place_order(&self, order: &OrderRequest) -> Result<ApiResponse> {
        let body = serde_json::to_value(order)
            .map_err(|e| Error::configuration(format!("unserializable order payload: {e}")))?;
        self.dispatch(&endpoint::TRADING_PLACE_ORDER, &[], None, Some(body))
            .await
    }

    /// Modifies price and size of an open order.
    ///
    /// `PUT /v1/trading/orders/<order_id>`
    pub async fn modify_order(&self, order_id: &str, patch: &OrderPatch) -> Result<ApiResponse> {
        let body = serde_json::to_value(patch)
            .map_err(|e| Error::configuration(format!("unserializable order patch: {e}")))?;
        self.dispatch(
            &endpoint::TRADING_MODIFY_ORDER,
            &[("order_id", order_id)],
            None,
            Some(body),
        )
        .await
    }

    /// Cancels a single order.
    ///
    /// `DELETE /v1/trading/orders/<order_id>`
    pub async fn cancel_order(&self, order_id: &str) -> Result<ApiResponse> {
        self.dispatch(
            &endpoint::TRADING_CANCEL_ORDER,
            &[("order_id", order_id)],
            None,
            None,
        )
        .await
    }

    /// Fetches the order history of the current user.
    ///
    /// `GET /v1/trading/order_history?limit=N` (default 50 per page)
    pub async fn fetch_order_history(&self, limit: Option<u32>) -> Result<ApiResponse> {
        let params = Params::new().with("limit", limit.unwrap_or(50));
        self.dispatch(&endpoint::TRADING_ORDER_HISTORY, &[], Some(&params), None)
            .await
    }

    /// Fetches a single trade of the current user.
    ///
    /// `GET /v1/trading/trades/<trade_id>`
    pub async fn fetch_trade(&self, trade_id: &str) -> Result<ApiResponse> {
        self.dispatch(&endpoint::TRADING_TRADE, &[("trade_id", trade_id)], None, None)
            .await
    }

    /// Fetches the trade history of the current user.
    ///
    /// `GET /v1/trading/trades`
    pub async fn fetch_my_trades(&self) -> Result<ApiResponse> {
        self.dispatch(&endpoint::TRADING_TRADES, &[], None, None).await
    }
}
