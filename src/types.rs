//! Typed request payloads for order placement and modification.
//!
//! The wire payload for placing an order:
//!
//! ```json
//! {
//!     "trading_pair_id": "BTC-USDT",
//!     "side": "bid",
//!     "type": "limit",
//!     "price": "5000.11000001",
//!     "size": "1.0101"
//! }
//! ```
//!
//! Prices and sizes travel as strings, as the exchange expects.

use serde::{Deserialize, Serialize};

/// Order side. Cobinhood uses order-book terminology (bid/ask) rather
/// than buy/sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSide {
    /// Buy side.
    Bid,
    /// Sell side.
    Ask,
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Limit order at a fixed price.
    Limit,
    /// Market order, executed immediately at the best price.
    Market,
    /// Stop order.
    Stop,
    /// Stop-limit order.
    StopLimit,
}

/// Payload for placing a new order (`POST trading/orders`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Trading pair identifier, e.g. `BTC-USDT`.
    pub trading_pair_id: String,
    /// Order side.
    pub side: OrderSide,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Limit price as a decimal string; omitted for market orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Order size as a decimal string.
    pub size: String,
}

impl OrderRequest {
    /// Creates a limit order payload.
    pub fn limit(
        trading_pair_id: impl Into<String>,
        side: OrderSide,
        price: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            trading_pair_id: trading_pair_id.into(),
            side,
            order_type: OrderType::Limit,
            price: Some(price.into()),
            size: size.into(),
        }
    }

    /// Creates a market order payload.
    pub fn market(
        trading_pair_id: impl Into<String>,
        side: OrderSide,
        size: impl Into<String>,
    ) -> Self {
        Self {
            trading_pair_id: trading_pair_id.into(),
            side,
            order_type: OrderType::Market,
            price: None,
            size: size.into(),
        }
    }
}

/// Payload for modifying an open order (`PUT trading/orders/<order_id>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPatch {
    /// New limit price as a decimal string.
    pub price: String,
    /// New order size as a decimal string.
    pub size: String,
}

impl OrderPatch {
    /// Creates an order modification payload.
    pub fn new(price: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            size: size.into(),
        }
    }
}
