//! Exchange Info Client
//!
//! Abstraction over the Hyperliquid read-only info API. One method per
//! query kind; every method returns the API payload as raw JSON, never
//! reshaped.

mod http;
mod mock;

pub use http::{HttpInfoClient, MAINNET_API_URL, TESTNET_API_URL};
pub use mock::MockInfoClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Info client trait (Strategy pattern)
///
/// Implemented by the HTTP client for live queries and by the mock for
/// tests. All queries are read-only; no method mutates client state, so a
/// single instance is shared across all tools for the process lifetime.
#[async_trait]
pub trait InfoClient: Send + Sync {
    /// Perpetuals account state: positions, margin, withdrawable balance
    async fn user_state(&self, address: &str) -> Result<Value>;

    /// Spot account state: token balances
    async fn spot_user_state(&self, address: &str) -> Result<Value>;

    /// Open orders for an account
    async fn open_orders(&self, address: &str) -> Result<Value>;

    /// Mid prices for all trading pairs
    async fn all_mids(&self) -> Result<Value>;

    /// Trade fill history for an account
    async fn user_fills(&self, address: &str) -> Result<Value>;

    /// Perpetual-market metadata
    async fn meta(&self) -> Result<Value>;

    /// Perpetual-market metadata plus per-asset contexts
    async fn meta_and_asset_ctxs(&self) -> Result<Value>;

    /// Spot-market metadata
    async fn spot_meta(&self) -> Result<Value>;

    /// Spot-market metadata plus per-asset contexts
    async fn spot_meta_and_asset_ctxs(&self) -> Result<Value>;

    /// Funding-rate history for a coin over [start_ms, end_ms]
    async fn funding_history(&self, coin: &str, start_ms: i64, end_ms: i64) -> Result<Value>;

    /// Funding payments for an account over [start_ms, end_ms]
    async fn user_funding_history(
        &self,
        address: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Value>;

    /// Level 2 order-book snapshot for a coin
    async fn l2_snapshot(&self, coin: &str) -> Result<Value>;

    /// Candlestick snapshot for a coin over [start_ms, end_ms]
    async fn candles_snapshot(
        &self,
        coin: &str,
        interval: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Value>;

    /// Fee schedule for an account
    async fn user_fees(&self, address: &str) -> Result<Value>;

    /// Staking summary for an account
    async fn user_staking_summary(&self, address: &str) -> Result<Value>;

    /// Staking reward history for an account
    async fn user_staking_rewards(&self, address: &str) -> Result<Value>;

    /// Order lookup by numeric order id
    async fn query_order_by_oid(&self, address: &str, oid: i64) -> Result<Value>;

    /// Order lookup by client order id
    async fn query_order_by_cloid(&self, address: &str, cloid: &str) -> Result<Value>;

    /// Sub-accounts of an account
    async fn query_sub_accounts(&self, address: &str) -> Result<Value>;

    /// Client name (for logs)
    fn name(&self) -> &str;
}
