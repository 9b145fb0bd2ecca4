//! Funding History Tools
//!
//! Funding-rate history per coin and funding-payment history per account.
//! Both take an ISO-8601 time range that is normalized to epoch millis
//! before the downstream call.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};

use super::{query_result, required_str};
use crate::client::InfoClient;
use crate::error::Result;
use crate::time::parse_time_range;

const START_DESC: &str =
    "The start time for the funding history in ISO 8601 format (e.g., '2025-01-01T00:00:00Z')";
const END_DESC: &str =
    "The end time for the funding history in ISO 8601 format (e.g., '2025-12-31T23:59:59Z')";

/// Fetch the funding rate history for a specific coin.
pub struct CoinFundingHistoryTool {
    client: Arc<dyn InfoClient>,
}

impl CoinFundingHistoryTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }

    async fn fetch(&self, call: &ToolCall) -> Result<serde_json::Value> {
        let coin = required_str(call, "coin_name")?;
        let start = required_str(call, "start_time")?;
        let end = required_str(call, "end_time")?;

        let (start_ms, end_ms) = parse_time_range(start, end)?;
        self.client.funding_history(coin, start_ms, end_ms).await
    }
}

#[async_trait]
impl Tool for CoinFundingHistoryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_coin_funding_history".into(),
            description: "Fetch the funding rate history for a specific coin.".into(),
            parameters: vec![
                ParameterSchema::required(
                    "coin_name",
                    "string",
                    "The trading symbol (e.g., 'BTC', 'ETH')",
                ),
                ParameterSchema::required("start_time", "string", START_DESC),
                ParameterSchema::required("end_time", "string", END_DESC),
            ],
            category: Some("funding".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = self.fetch(call).await;
        Ok(query_result(
            "get_coin_funding_history",
            "Failed to fetch coin funding history",
            outcome,
        ))
    }
}

/// Fetch the funding payment history for a specific user account.
pub struct UserFundingHistoryTool {
    client: Arc<dyn InfoClient>,
}

impl UserFundingHistoryTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }

    async fn fetch(&self, call: &ToolCall) -> Result<serde_json::Value> {
        let address = required_str(call, "account_address")?;
        let start = required_str(call, "start_time")?;
        let end = required_str(call, "end_time")?;

        let (start_ms, end_ms) = parse_time_range(start, end)?;
        self.client
            .user_funding_history(address, start_ms, end_ms)
            .await
    }
}

#[async_trait]
impl Tool for UserFundingHistoryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_user_funding_history".into(),
            description: "Fetch the funding payment history for a specific user account.".into(),
            parameters: vec![
                ParameterSchema::required(
                    "account_address",
                    "string",
                    "The Hyperliquid account address (e.g., '0xcd5051944f780a621ee62e39e493c489668acf4d')",
                ),
                ParameterSchema::required("start_time", "string", START_DESC),
                ParameterSchema::required("end_time", "string", END_DESC),
            ],
            category: Some("funding".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = self.fetch(call).await;
        Ok(query_result(
            "get_user_funding_history",
            "Failed to fetch user funding history",
            outcome,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockInfoClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_coin_funding_normalizes_range() {
        let client = Arc::new(MockInfoClient::new());
        let tool = CoinFundingHistoryTool::new(client.clone());

        let call = ToolCall::new("get_coin_funding_history")
            .with_arg("coin_name", json!("BTC"))
            .with_arg("start_time", json!("2025-01-01T00:00:00Z"))
            .with_arg("end_time", json!("2025-01-31T00:00:00Z"));

        let result = tool.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(
            client.calls(),
            vec!["funding_history BTC 1735689600000 1738281600000".to_string()]
        );
    }

    #[tokio::test]
    async fn test_coin_funding_malformed_start_is_enveloped() {
        let client = Arc::new(MockInfoClient::new());
        let tool = CoinFundingHistoryTool::new(client.clone());

        let call = ToolCall::new("get_coin_funding_history")
            .with_arg("coin_name", json!("BTC"))
            .with_arg("start_time", json!("not-a-date"))
            .with_arg("end_time", json!("2025-01-31T00:00:00Z"));

        let result = tool.execute(&call).await.unwrap();
        assert!(!result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(
            value,
            json!({"error": "Failed to fetch coin funding history: Invalid ISO-8601 timestamp: 'not-a-date'"})
        );
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_user_funding_inverted_range_passes_through() {
        // Ordering is not validated locally; the API decides.
        let client = Arc::new(MockInfoClient::new());
        let tool = UserFundingHistoryTool::new(client.clone());

        let call = ToolCall::new("get_user_funding_history")
            .with_arg("account_address", json!("0xabc"))
            .with_arg("start_time", json!("2025-01-31T00:00:00Z"))
            .with_arg("end_time", json!("2025-01-01T00:00:00Z"));

        let result = tool.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(
            client.calls(),
            vec!["user_funding_history 0xabc 1738281600000 1735689600000".to_string()]
        );
    }

    #[tokio::test]
    async fn test_user_funding_downstream_failure() {
        let client = Arc::new(MockInfoClient::failing("rate limited"));
        let tool = UserFundingHistoryTool::new(client);

        let call = ToolCall::new("get_user_funding_history")
            .with_arg("account_address", json!("0xabc"))
            .with_arg("start_time", json!("2025-01-01T00:00:00Z"))
            .with_arg("end_time", json!("2025-01-31T00:00:00Z"));

        let result = tool.execute(&call).await.unwrap();
        assert!(!result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(
            value,
            json!({"error": "Failed to fetch user funding history: API error: rate limited"})
        );
    }
}
