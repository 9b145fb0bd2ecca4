//! Account Query Tools
//!
//! Read-only lookups keyed by account address: state, open orders, fills,
//! fee schedule, and sub-accounts.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};

use super::{query_result, required_str};
use crate::client::InfoClient;
use crate::error::Result;

const ADDRESS_DESC: &str =
    "The Hyperliquid account address (e.g., '0xcd5051944f780a621ee62e39e493c489668acf4d')";

/// Query user state: positions, margin summary, withdrawable balance.
///
/// With `check_spot` set, queries the spot account state instead of the
/// perpetuals clearinghouse state.
pub struct UserStateTool {
    client: Arc<dyn InfoClient>,
}

impl UserStateTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }

    async fn fetch(&self, call: &ToolCall) -> Result<serde_json::Value> {
        let address = required_str(call, "account_address")?;
        let check_spot = call.bool_arg("check_spot").unwrap_or(false);

        if check_spot {
            self.client.spot_user_state(address).await
        } else {
            self.client.user_state(address).await
        }
    }
}

#[async_trait]
impl Tool for UserStateTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_user_state".into(),
            description:
                "Query user state including trading positions, margin, and withdrawable balance."
                    .into(),
            parameters: vec![
                ParameterSchema::required("account_address", "string", ADDRESS_DESC),
                ParameterSchema::optional(
                    "check_spot",
                    "boolean",
                    "If true, queries spot user state; otherwise, queries perpetuals state",
                    json!(false),
                ),
            ],
            category: Some("account".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = self.fetch(call).await;
        Ok(query_result(
            "get_user_state",
            "Failed to fetch user state",
            outcome,
        ))
    }
}

/// Fetch all open orders for an account.
pub struct OpenOrdersTool {
    client: Arc<dyn InfoClient>,
}

impl OpenOrdersTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for OpenOrdersTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_user_open_orders".into(),
            description: "Fetch all open orders for a specific user account.".into(),
            parameters: vec![ParameterSchema::required(
                "account_address",
                "string",
                ADDRESS_DESC,
            )],
            category: Some("account".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = match required_str(call, "account_address") {
            Ok(address) => self.client.open_orders(address).await,
            Err(err) => Err(err),
        };
        Ok(query_result(
            "get_user_open_orders",
            "Failed to fetch user open orders",
            outcome,
        ))
    }
}

/// Fetch the trade fill history for an account.
pub struct TradeHistoryTool {
    client: Arc<dyn InfoClient>,
}

impl TradeHistoryTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TradeHistoryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_user_trade_history".into(),
            description: "Fetch the trade fill history for a specific user account.".into(),
            parameters: vec![ParameterSchema::required(
                "account_address",
                "string",
                ADDRESS_DESC,
            )],
            category: Some("account".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = match required_str(call, "account_address") {
            Ok(address) => self.client.user_fills(address).await,
            Err(err) => Err(err),
        };
        Ok(query_result(
            "get_user_trade_history",
            "Failed to fetch user fills",
            outcome,
        ))
    }
}

/// Fetch the fee structure and rates for an account.
pub struct UserFeesTool {
    client: Arc<dyn InfoClient>,
}

impl UserFeesTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for UserFeesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_user_fees".into(),
            description: "Fetch the fee structure and rates for a specific user account.".into(),
            parameters: vec![ParameterSchema::required(
                "account_address",
                "string",
                ADDRESS_DESC,
            )],
            category: Some("account".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = match required_str(call, "account_address") {
            Ok(address) => self.client.user_fees(address).await,
            Err(err) => Err(err),
        };
        Ok(query_result(
            "get_user_fees",
            "Failed to fetch user fees",
            outcome,
        ))
    }
}

/// Fetch the sub-accounts associated with an account.
pub struct SubAccountsTool {
    client: Arc<dyn InfoClient>,
}

impl SubAccountsTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SubAccountsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_user_sub_accounts".into(),
            description: "Fetch the sub-accounts associated with a specific user account.".into(),
            parameters: vec![ParameterSchema::required(
                "account_address",
                "string",
                ADDRESS_DESC,
            )],
            category: Some("account".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = match required_str(call, "account_address") {
            Ok(address) => self.client.query_sub_accounts(address).await,
            Err(err) => Err(err),
        };
        Ok(query_result(
            "get_user_sub_accounts",
            "Failed to fetch user sub accounts",
            outcome,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockInfoClient;

    const ADDR: &str = "0xcd5051944f780a621ee62e39e493c489668acf4d";

    fn call_for(name: &str) -> ToolCall {
        ToolCall::new(name).with_arg("account_address", json!(ADDR))
    }

    #[tokio::test]
    async fn test_user_state_defaults_to_perps() {
        let client = Arc::new(MockInfoClient::new());
        let tool = UserStateTool::new(client.clone());

        let result = tool.execute(&call_for("get_user_state")).await.unwrap();
        assert!(result.success);
        assert_eq!(client.calls(), vec![format!("user_state {}", ADDR)]);
    }

    #[tokio::test]
    async fn test_user_state_spot_branch() {
        let client = Arc::new(MockInfoClient::new());
        let tool = UserStateTool::new(client.clone());

        let call = call_for("get_user_state").with_arg("check_spot", json!(true));
        tool.execute(&call).await.unwrap();
        assert_eq!(client.calls(), vec![format!("spot_user_state {}", ADDR)]);
    }

    #[tokio::test]
    async fn test_user_state_failure_envelope() {
        let client = Arc::new(MockInfoClient::failing("timeout"));
        let tool = UserStateTool::new(client);

        let result = tool.execute(&call_for("get_user_state")).await.unwrap();
        assert!(!result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(
            value,
            json!({"error": "Failed to fetch user state: API error: timeout"})
        );
    }

    #[tokio::test]
    async fn test_open_orders_passthrough() {
        let orders = json!([{"oid": 1, "coin": "BTC", "sz": "0.1"}]);
        let client = Arc::new(MockInfoClient::new().with_response("open_orders", orders.clone()));
        let tool = OpenOrdersTool::new(client);

        let result = tool
            .execute(&call_for("get_user_open_orders"))
            .await
            .unwrap();
        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(value, orders);
    }

    #[tokio::test]
    async fn test_missing_address_is_enveloped() {
        let client = Arc::new(MockInfoClient::new());
        let tool = UserFeesTool::new(client.clone());

        let result = tool
            .execute(&ToolCall::new("get_user_fees"))
            .await
            .unwrap();
        assert!(!result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(
            value,
            json!({"error": "Failed to fetch user fees: Missing parameter: account_address"})
        );
        // No downstream call was made
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_sub_accounts_routes_to_client() {
        let client = Arc::new(MockInfoClient::new());
        let tool = SubAccountsTool::new(client.clone());

        tool.execute(&call_for("get_user_sub_accounts")).await.unwrap();
        assert_eq!(client.calls(), vec![format!("query_sub_accounts {}", ADDR)]);
    }
}
