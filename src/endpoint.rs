//! Static endpoint table for the Cobinhood REST API.
//!
//! Every public operation of the client maps to one [`Endpoint`] descriptor:
//! an API version, a path template, an HTTP verb and a scope. Descriptors
//! are leaf data, defined at compile time and never mutated.
//!
//! Path templates use `{placeholder}` segments that are substituted at
//! dispatch time, e.g. `market/orderbooks/{trading_pair_id}`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Cobinhood REST API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ApiVersion {
    /// Version 1, the only version the exchange ever shipped.
    #[default]
    V1,
}

impl ApiVersion {
    /// Returns the version as it appears in URLs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoint scope, distinguishing public market data from authenticated
/// account operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Scope {
    /// No authentication required (system, market and chart data).
    #[default]
    Public,
    /// Requires an authorization token (trading and wallet data).
    Private,
}

impl Scope {
    /// Returns `true` for public endpoints.
    #[inline]
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Returns `true` for private endpoints.
    #[inline]
    pub const fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Static record naming a path template and HTTP verb for one exchange
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Logical operation name, used for registry lookup.
    pub name: &'static str,
    /// API version the path belongs to.
    pub version: ApiVersion,
    /// Path template relative to the versioned base URL.
    pub path: &'static str,
    /// HTTP verb as the endpoint table declares it.
    pub verb: &'static str,
    /// Whether the endpoint requires authentication.
    pub scope: Scope,
}

impl Endpoint {
    const fn get(name: &'static str, path: &'static str, scope: Scope) -> Self {
        Self {
            name,
            version: ApiVersion::V1,
            path,
            verb: "GET",
            scope,
        }
    }

    /// Resolves the path template against the given substitutions.
    ///
    /// Fails with a configuration error when the template is empty, when a
    /// placeholder is left unresolved, or when a substitution names no
    /// placeholder in the template.
    pub fn resolve_path(&self, substitutions: &[(&str, &str)]) -> Result<String> {
        if self.path.is_empty() {
            return Err(Error::configuration("incorrect method call"));
        }

        let mut resolved = self.path.to_string();
        for (name, value) in substitutions {
            let placeholder = format!("{{{name}}}");
            if !resolved.contains(&placeholder) {
                return Err(Error::configuration(format!(
                    "no placeholder {{{name}}} in template {}",
                    self.path
                )));
            }
            resolved = resolved.replace(&placeholder, value);
        }

        if resolved.contains('{') {
            return Err(Error::configuration(format!(
                "unresolved placeholder in template {}",
                self.path
            )));
        }

        Ok(resolved)
    }
}

// System
/// Current server time, Unix milliseconds.
pub const SYSTEM_TIME: Endpoint = Endpoint::get("system_time", "system/time", Scope::Public);
/// Deployment phase and revision.
pub const SYSTEM_INFO: Endpoint = Endpoint::get("system_info", "system/info", Scope::Public);

// Market
/// All currencies available for trading.
pub const MARKET_CURRENCIES: Endpoint =
    Endpoint::get("market_currencies", "market/currencies", Scope::Public);
/// All trading pairs and their size/increment limits.
pub const MARKET_TRADING_PAIRS: Endpoint =
    Endpoint::get("market_trading_pairs", "market/trading_pairs", Scope::Public);
/// Order book for one trading pair.
pub const MARKET_ORDER_BOOK: Endpoint = Endpoint::get(
    "market_order_book",
    "market/orderbooks/{trading_pair_id}",
    Scope::Public,
);
/// 24h trading statistics for all pairs.
pub const MARKET_STATS: Endpoint = Endpoint::get("market_stats", "market/stats", Scope::Public);
/// Ticker for one trading pair.
pub const MARKET_TICKER: Endpoint = Endpoint::get(
    "market_ticker",
    "market/tickers/{trading_pair_id}",
    Scope::Public,
);
/// Most recent public trades for one trading pair.
pub const MARKET_TRADES: Endpoint = Endpoint::get(
    "market_trades",
    "market/trades/{trading_pair_id}",
    Scope::Public,
);

// Chart
/// Charting candles for one trading pair.
pub const CHART_CANDLES: Endpoint = Endpoint::get(
    "chart_candles",
    "chart/candles/{trading_pair_id}",
    Scope::Public,
);

// Trading
/// A single order of the current user.
pub const TRADING_ORDER: Endpoint =
    Endpoint::get("trading_order", "trading/orders/{order_id}", Scope::Private);
/// Trades originating from one order.
pub const TRADING_ORDER_TRADES: Endpoint = Endpoint::get(
    "trading_order_trades",
    "trading/orders/{order_id}/trades",
    Scope::Private,
);
/// All open orders of the current user.
pub const TRADING_ORDERS: Endpoint =
    Endpoint::get("trading_orders", "trading/orders", Scope::Private);
/// Place a new order.
pub const TRADING_PLACE_ORDER: Endpoint = Endpoint {
    name: "trading_place_order",
    version: ApiVersion::V1,
    path: "trading/orders",
    verb: "POST",
    scope: Scope::Private,
};
/// Modify price/size of an open order.
pub const TRADING_MODIFY_ORDER: Endpoint = Endpoint {
    name: "trading_modify_order",
    version: ApiVersion::V1,
    path: "trading/orders/{order_id}",
    verb: "PUT",
    scope: Scope::Private,
};
/// Cancel an open order.
pub const TRADING_CANCEL_ORDER: Endpoint = Endpoint {
    name: "trading_cancel_order",
    version: ApiVersion::V1,
    path: "trading/orders/{order_id}",
    verb: "DELETE",
    scope: Scope::Private,
};
/// Closed orders of the current user.
pub const TRADING_ORDER_HISTORY: Endpoint = Endpoint::get(
    "trading_order_history",
    "trading/order_history",
    Scope::Private,
);
/// A single trade of the current user.
pub const TRADING_TRADE: Endpoint =
    Endpoint::get("trading_trade", "trading/trades/{trade_id}", Scope::Private);
/// Trade history of the current user.
pub const TRADING_TRADES: Endpoint =
    Endpoint::get("trading_trades", "trading/trades", Scope::Private);

// Wallet
/// Balances of the current user.
pub const WALLET_BALANCES: Endpoint =
    Endpoint::get("wallet_balances", "wallet/balances", Scope::Private);
/// Balance change ledger of the current user.
pub const WALLET_LEDGER: Endpoint =
    Endpoint::get("wallet_ledger", "wallet/ledger", Scope::Private);
/// Deposit addresses.
pub const WALLET_DEPOSIT_ADDRESSES: Endpoint = Endpoint::get(
    "wallet_deposit_addresses",
    "wallet/deposit_addresses",
    Scope::Private,
);
/// Withdrawal addresses.
pub const WALLET_WITHDRAWAL_ADDRESSES: Endpoint = Endpoint::get(
    "wallet_withdrawal_addresses",
    "wallet/withdrawal_addresses",
    Scope::Private,
);
/// A single withdrawal.
pub const WALLET_WITHDRAWAL: Endpoint = Endpoint::get(
    "wallet_withdrawal",
    "wallet/withdrawals/{withdrawal_id}",
    Scope::Private,
);
/// All withdrawals of the current user.
pub const WALLET_WITHDRAWALS: Endpoint =
    Endpoint::get("wallet_withdrawals", "wallet/withdrawals", Scope::Private);
/// A single deposit.
pub const WALLET_DEPOSIT: Endpoint = Endpoint::get(
    "wallet_deposit",
    "wallet/deposits/{deposit_id}",
    Scope::Private,
);
/// All deposits of the current user.
pub const WALLET_DEPOSITS: Endpoint =
    Endpoint::get("wallet_deposits", "wallet/deposits", Scope::Private);

/// Every registered endpoint, for lookup by logical name.
pub const ENDPOINTS: &[Endpoint] = &[
    SYSTEM_TIME,
    SYSTEM_INFO,
    MARKET_CURRENCIES,
    MARKET_TRADING_PAIRS,
    MARKET_ORDER_BOOK,
    MARKET_STATS,
    MARKET_TICKER,
    MARKET_TRADES,
    CHART_CANDLES,
    TRADING_ORDER,
    TRADING_ORDER_TRADES,
    TRADING_ORDERS,
    TRADING_PLACE_ORDER,
    TRADING_MODIFY_ORDER,
    TRADING_CANCEL_ORDER,
    TRADING_ORDER_HISTORY,
    TRADING_TRADE,
    TRADING_TRADES,
    WALLET_BALANCES,
    WALLET_LEDGER,
    WALLET_DEPOSIT_ADDRESSES,
    WALLET_WITHDRAWAL_ADDRESSES,
    WALLET_WITHDRAWAL,
    WALLET_WITHDRAWALS,
    WALLET_DEPOSIT,
    WALLET_DEPOSITS,
];

/// Looks up an endpoint descriptor by logical operation name.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.name == name)
}
