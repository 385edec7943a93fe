//! Wallet endpoints (authenticated).

use super::Cobinhood;
use crate::endpoint;
use crate::error::Result;
use crate::params::Params;
use crate::response::ApiResponse;

impl Cobinhood {
    /// Fetches balances of the current user.
    ///
    /// `GET /v1/wallet/balances`
    pub async fn fetch_balances(&self) -> Result<ApiResponse> {
        self.dispatch(&endpoint::WALLET_BALANCES, &[], None, None).await
    }

    /// Fetches the balance change ledger of the current user.
    ///
    /// `GET /v1/wallet/ledger?currency=C&limit=N` (default 20 per page)
    pub async fn fetch_ledger(
        &self,
        currency: Option<&str>,
        limit: Option<u32>,
    ) -> Result<ApiResponse> {
        let mut params = Params::new();
        if let Some(currency) = currency {
            params.push("currency", currency);
        }
        params.push("limit", limit.unwrap_or(20));
        self.dispatch(&endpoint::WALLET_LEDGER, &[], Some(&params), None)
            .await
    }

    /// Fetches wallet deposit addresses.
    ///
    /// `GET /v1/wallet/deposit_addresses?currency=C`
    pub async fn fetch_deposit_addresses(&self, currency: Option<&str>) -> Result<ApiResponse> {
        let mut params = Params::new();
        if let Some(currency) = currency {
            params.push("currency", currency);
        }
        let params = if params.is_empty() { None } else { Some(&params) };
        self.dispatch(&endpoint::WALLET_DEPOSIT_ADDRESSES, &[], params, None)
            .await
    }

    /// Fetches wallet withdrawal addresses.
    ///
    /// `GET /v1/wallet/withdrawal_addresses?currency=C`
    pub async fn fetch_withdrawal_addresses(&self, currency: Option<&str>) -> Result<ApiResponse> {
        let mut params = Params::new();
        if let Some(currency) = currency {
            params.push("currency", currency);
        }
        let params = if params.is_empty() { None } else { Some(&params) };
        self.dispatch(&endpoint::WALLET_WITHDRAWAL_ADDRESSES, &[], params, None)
            .await
    }

    /// Fetches a single withdrawal.
    ///
    /// `GET /v1/wallet/withdrawals/<withdrawal_id>`
    pub async fn fetch_withdrawal(&self, withdrawal_id: &str) -> Result<ApiResponse> {
        self.dispatch(
            &endpoint::WALLET_WITHDRAWAL,
            &[("withdrawal_id", withdrawal_id)],
            None,
            None,
        )
        .await
    }

    /// Fetches all withdrawals of the current user.
    ///
    /// `GET /v1/wallet/withdrawals`
    pub async fn fetch_withdrawals(&self) -> Result<ApiResponse> {
        self.dispatch(&endpoint::WALLET_WITHDRAWALS, &[], None, None)
            .await
    }

    /// Fetches a single deposit.
    ///
    /// `GET /v1/wallet/deposits/<deposit_id>`
    pub async fn fetch_deposit(&self, deposit_id: &str) -> Result<ApiResponse> {
        self.dispatch(
            &endpoint::WALLET_DEPOSIT,
            &[("deposit_id", deposit_id)],
            None,
            None,
        )
        .await
    }

    /// Fetches all deposits of the current user.
    ///
    /// `GET /v1/wallet/deposits`
    pub async fn fetch_deposits(&self) -> Result<ApiResponse> {
        self.dispatch(&endpoint::WALLET_DEPOSITS, &[], None, None).await
    }
}
