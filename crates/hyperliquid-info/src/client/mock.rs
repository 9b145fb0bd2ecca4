//! Mock Info Client
//!
//! For tests. Returns canned payloads per method, can be forced to fail,
//! and records every method invocation so tests can assert which downstream
//! query a tool selected.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::InfoClient;
use crate::error::{InfoError, Result};

/// Mock info client with canned responses and a call log
#[derive(Default)]
pub struct MockInfoClient {
    responses: HashMap<&'static str, Value>,
    fail_with: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockInfoClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose every method fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Set the canned payload for a method (keyed by trait method name)
    pub fn with_response(mut self, method: &'static str, value: Value) -> Self {
        self.responses.insert(method, value);
        self
    }

    /// Method invocations so far, as "method arg1 arg2 ..." entries
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    fn respond(&self, method: &'static str, entry: String) -> Result<Value> {
        self.calls.lock().expect("call log poisoned").push(entry);

        if let Some(message) = &self.fail_with {
            return Err(InfoError::Api(message.clone()));
        }

        Ok(self.responses.get(method).cloned().unwrap_or_else(|| json!({})))
    }
}

#[async_trait]
impl InfoClient for MockInfoClient {
    async fn user_state(&self, address: &str) -> Result<Value> {
        self.respond("user_state", format!("user_state {}", address))
    }

    async fn spot_user_state(&self, address: &str) -> Result<Value> {
        self.respond("spot_user_state", format!("spot_user_state {}", address))
    }

    async fn open_orders(&self, address: &str) -> Result<Value> {
        self.respond("open_orders", format!("open_orders {}", address))
    }

    async fn all_mids(&self) -> Result<Value> {
        self.respond("all_mids", "all_mids".into())
    }

    async fn user_fills(&self, address: &str) -> Result<Value> {
        self.respond("user_fills", format!("user_fills {}", address))
    }

    async fn meta(&self) -> Result<Value> {
        self.respond("meta", "meta".into())
    }

    async fn meta_and_asset_ctxs(&self) -> Result<Value> {
        self.respond("meta_and_asset_ctxs", "meta_and_asset_ctxs".into())
    }

    async fn spot_meta(&self) -> Result<Value> {
        self.respond("spot_meta", "spot_meta".into())
    }

    async fn spot_meta_and_asset_ctxs(&self) -> Result<Value> {
        self.respond("spot_meta_and_asset_ctxs", "spot_meta_and_asset_ctxs".into())
    }

    async fn funding_history(&self, coin: &str, start_ms: i64, end_ms: i64) -> Result<Value> {
        self.respond(
            "funding_history",
            format!("funding_history {} {} {}", coin, start_ms, end_ms),
        )
    }

    async fn user_funding_history(
        &self,
        address: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Value> {
        self.respond(
            "user_funding_history",
            format!("user_funding_history {} {} {}", address, start_ms, end_ms),
        )
    }

    async fn l2_snapshot(&self, coin: &str) -> Result<Value> {
        self.respond("l2_snapshot", format!("l2_snapshot {}", coin))
    }

    async fn candles_snapshot(
        &self,
        coin: &str,
        interval: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Value> {
        self.respond(
            "candles_snapshot",
            format!("candles_snapshot {} {} {} {}", coin, interval, start_ms, end_ms),
        )
    }

    async fn user_fees(&self, address: &str) -> Result<Value> {
        self.respond("user_fees", format!("user_fees {}", address))
    }

    async fn user_staking_summary(&self, address: &str) -> Result<Value> {
        self.respond(
            "user_staking_summary",
            format!("user_staking_summary {}", address),
        )
    }

    async fn user_staking_rewards(&self, address: &str) -> Result<Value> {
        self.respond(
            "user_staking_rewards",
            format!("user_staking_rewards {}", address),
        )
    }

    async fn query_order_by_oid(&self, address: &str, oid: i64) -> Result<Value> {
        self.respond(
            "query_order_by_oid",
            format!("query_order_by_oid {} {}", address, oid),
        )
    }

    async fn query_order_by_cloid(&self, address: &str, cloid: &str) -> Result<Value> {
        self.respond(
            "query_order_by_cloid",
            format!("query_order_by_cloid {} {}", address, cloid),
        )
    }

    async fn query_sub_accounts(&self, address: &str) -> Result<Value> {
        self.respond(
            "query_sub_accounts",
            format!("query_sub_accounts {}", address),
        )
    }

    fn name(&self) -> &str {
        "MockInfo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_response_and_call_log() {
        let client = MockInfoClient::new()
            .with_response("all_mids", json!({"BTC": "50000.0"}));

        let mids = client.all_mids().await.unwrap();
        assert_eq!(mids, json!({"BTC": "50000.0"}));
        assert_eq!(client.calls(), vec!["all_mids".to_string()]);
        assert_eq!(client.name(), "MockInfo");
    }

    #[tokio::test]
    async fn test_failing_client() {
        let client = MockInfoClient::failing("connection refused");
        let err = client.meta().await.unwrap_err();
        assert!(matches!(err, InfoError::Api(_)));
        // The failed call is still logged
        assert_eq!(client.calls(), vec!["meta".to_string()]);
    }
}
