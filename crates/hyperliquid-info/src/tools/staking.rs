//! Staking Tools

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};

use super::{query_result, required_str};
use crate::client::InfoClient;

const ADDRESS_DESC: &str =
    "The Hyperliquid account address (e.g., '0xcd5051944f780a621ee62e39e493c489668acf4d')";

/// Fetch the staking summary for a specific user account.
pub struct StakingSummaryTool {
    client: Arc<dyn InfoClient>,
}

impl StakingSummaryTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for StakingSummaryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_user_staking_summary".into(),
            description: "Fetch the staking summary for a specific user account.".into(),
            parameters: vec![ParameterSchema::required(
                "account_address",
                "string",
                ADDRESS_DESC,
            )],
            category: Some("staking".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = match required_str(call, "account_address") {
            Ok(address) => self.client.user_staking_summary(address).await,
            Err(err) => Err(err),
        };
        Ok(query_result(
            "get_user_staking_summary",
            "Failed to fetch user staking summary",
            outcome,
        ))
    }
}

/// Fetch the staking rewards history for a specific user account.
pub struct StakingRewardsTool {
    client: Arc<dyn InfoClient>,
}

impl StakingRewardsTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for StakingRewardsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_user_staking_rewards".into(),
            description: "Fetch the staking rewards history for a specific user account.".into(),
            parameters: vec![ParameterSchema::required(
                "account_address",
                "string",
                ADDRESS_DESC,
            )],
            category: Some("staking".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = match required_str(call, "account_address") {
            Ok(address) => self.client.user_staking_rewards(address).await,
            Err(err) => Err(err),
        };
        Ok(query_result(
            "get_user_staking_rewards",
            "Failed to fetch user staking rewards",
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
    async fn test_staking_summary_passthrough() {
        let summary = json!({"delegated": "100.0", "undelegated": "0.0"});
        let client = Arc::new(
            MockInfoClient::new().with_response("user_staking_summary", summary.clone()),
        );
        let tool = StakingSummaryTool::new(client);

        let call =
            ToolCall::new("get_user_staking_summary").with_arg("account_address", json!("0xabc"));
        let result = tool.execute(&call).await.unwrap();
        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(value, summary);
    }

    #[tokio::test]
    async fn test_staking_rewards_failure_envelope() {
        let client = Arc::new(MockInfoClient::failing("unknown user"));
        let tool = StakingRewardsTool::new(client);

        let call =
            ToolCall::new("get_user_staking_rewards").with_arg("account_address", json!("0xabc"));
        let result = tool.execute(&call).await.unwrap();
        assert!(!result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(
            value,
            json!({"error": "Failed to fetch user staking rewards: API error: unknown user"})
        );
    }
}
