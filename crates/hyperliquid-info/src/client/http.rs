//! HTTP Info Client
//!
//! Live implementation against the public Hyperliquid info endpoint. Every
//! query is a POST of a typed request body to `{base_url}/info`.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::InfoClient;
use crate::error::{InfoError, Result};

/// Mainnet info API base URL
pub const MAINNET_API_URL: &str = "https://api.hyperliquid.xyz";

/// Testnet info API base URL
pub const TESTNET_API_URL: &str = "https://api.hyperliquid-testnet.xyz";

/// HTTP client for the Hyperliquid info API
///
/// Constructed once at startup and shared read-only across all tools.
pub struct HttpInfoClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpInfoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn mainnet() -> Self {
        Self::new(MAINNET_API_URL)
    }

    pub fn testnet() -> Self {
        Self::new(TESTNET_API_URL)
    }

    /// POST a request body to the info endpoint and return the raw payload.
    async fn post(&self, body: Value) -> Result<Value> {
        let url = format!("{}/info", self.base_url);

        tracing::debug!(%url, request_type = %body["type"], "info query");

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(InfoError::Api(format!(
                "info endpoint returned {}: {}",
                status,
                text.trim()
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl InfoClient for HttpInfoClient {
    async fn user_state(&self, address: &str) -> Result<Value> {
        self.post(json!({"type": "clearinghouseState", "user": address}))
            .await
    }

    async fn spot_user_state(&self, address: &str) -> Result<Value> {
        self.post(json!({"type": "spotClearinghouseState", "user": address}))
            .await
    }

    async fn open_orders(&self, address: &str) -> Result<Value> {
        self.post(json!({"type": "openOrders", "user": address}))
            .await
    }

    async fn all_mids(&self) -> Result<Value> {
        self.post(json!({"type": "allMids"})).await
    }

    async fn user_fills(&self, address: &str) -> Result<Value> {
        self.post(json!({"type": "userFills", "user": address}))
            .await
    }

    async fn meta(&self) -> Result<Value> {
        self.post(json!({"type": "meta"})).await
    }

    async fn meta_and_asset_ctxs(&self) -> Result<Value> {
        self.post(json!({"type": "metaAndAssetCtxs"})).await
    }

    async fn spot_meta(&self) -> Result<Value> {
        self.post(json!({"type": "spotMeta"})).await
    }

    async fn spot_meta_and_asset_ctxs(&self) -> Result<Value> {
        self.post(json!({"type": "spotMetaAndAssetCtxs"})).await
    }

    async fn funding_history(&self, coin: &str, start_ms: i64, end_ms: i64) -> Result<Value> {
        self.post(json!({
            "type": "fundingHistory",
            "coin": coin,
            "startTime": start_ms,
            "endTime": end_ms,
        }))
        .await
    }

    async fn user_funding_history(
        &self,
        address: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Value> {
        self.post(json!({
            "type": "userFunding",
            "user": address,
            "startTime": start_ms,
            "endTime": end_ms,
        }))
        .await
    }

    async fn l2_snapshot(&self, coin: &str) -> Result<Value> {
        self.post(json!({"type": "l2Book", "coin": coin})).await
    }

    async fn candles_snapshot(
        &self,
        coin: &str,
        interval: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Value> {
        self.post(json!({
            "type": "candleSnapshot",
            "req": {
                "coin": coin,
                "interval": interval,
                "startTime": start_ms,
                "endTime": end_ms,
            },
        }))
        .await
    }

    async fn user_fees(&self, address: &str) -> Result<Value> {
        self.post(json!({"type": "userFees", "user": address}))
            .await
    }

    async fn user_staking_summary(&self, address: &str) -> Result<Value> {
        self.post(json!({"type": "delegatorSummary", "user": address}))
            .await
    }

    async fn user_staking_rewards(&self, address: &str) -> Result<Value> {
        self.post(json!({"type": "delegatorRewards", "user": address}))
            .await
    }

    async fn query_order_by_oid(&self, address: &str, oid: i64) -> Result<Value> {
        self.post(json!({"type": "orderStatus", "user": address, "oid": oid}))
            .await
    }

    async fn query_order_by_cloid(&self, address: &str, cloid: &str) -> Result<Value> {
        self.post(json!({"type": "orderStatus", "user": address, "oid": cloid}))
            .await
    }

    async fn query_sub_accounts(&self, address: &str) -> Result<Value> {
        self.post(json!({"type": "subAccounts", "user": address}))
            .await
    }

    fn name(&self) -> &str {
        "HyperliquidInfo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_name() {
        let client = HttpInfoClient::mainnet();
        assert_eq!(client.name(), "HyperliquidInfo");
    }
}
