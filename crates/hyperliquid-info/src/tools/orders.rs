//! Order Lookup Tools
//!
//! Single-order lookups by exchange order id or client order id.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};

use super::{query_result, required_int, required_str};
use crate::client::InfoClient;
use crate::error::Result;

const ADDRESS_DESC: &str =
    "The Hyperliquid account address (e.g., '0xcd5051944f780a621ee62e39e493c489668acf4d')";

/// Fetch details of a specific order by its numeric order ID.
pub struct OrderByOidTool {
    client: Arc<dyn InfoClient>,
}

impl OrderByOidTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }

    async fn fetch(&self, call: &ToolCall) -> Result<serde_json::Value> {
        let address = required_str(call, "account_address")?;
        let oid = required_int(call, "oid")?;
        self.client.query_order_by_oid(address, oid).await
    }
}

#[async_trait]
impl Tool for OrderByOidTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_user_order_by_oid".into(),
            description:
                "Fetch details of a specific order by its order ID for a user account.".into(),
            parameters: vec![
                ParameterSchema::required("account_address", "string", ADDRESS_DESC),
                ParameterSchema::required("oid", "integer", "The order ID to query"),
            ],
            category: Some("orders".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = self.fetch(call).await;
        Ok(query_result(
            "get_user_order_by_oid",
            "Failed to fetch user order by oid",
            outcome,
        ))
    }
}

/// Fetch details of a specific order by its client order ID.
pub struct OrderByCloidTool {
    client: Arc<dyn InfoClient>,
}

impl OrderByCloidTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }

    async fn fetch(&self, call: &ToolCall) -> Result<serde_json::Value> {
        let address = required_str(call, "account_address")?;
        let cloid = required_str(call, "cloid")?;
        self.client.query_order_by_cloid(address, cloid).await
    }
}

#[async_trait]
impl Tool for OrderByCloidTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_user_order_by_cloid".into(),
            description:
                "Fetch details of a specific order by its client order ID for a user account."
                    .into(),
            parameters: vec![
                ParameterSchema::required("account_address", "string", ADDRESS_DESC),
                ParameterSchema::required("cloid", "string", "The client order ID to query"),
            ],
            category: Some("orders".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = self.fetch(call).await;
        Ok(query_result(
            "get_user_order_by_cloid",
            "Failed to fetch user order by cloid",
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
    async fn test_order_by_oid_routes_arguments() {
        let client = Arc::new(MockInfoClient::new());
        let tool = OrderByOidTool::new(client.clone());

        let call = ToolCall::new("get_user_order_by_oid")
            .with_arg("account_address", json!("0xabc"))
            .with_arg("oid", json!(12345));
        let result = tool.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(
            client.calls(),
            vec!["query_order_by_oid 0xabc 12345".to_string()]
        );
    }

    #[tokio::test]
    async fn test_order_by_oid_missing_oid_is_enveloped() {
        let client = Arc::new(MockInfoClient::new());
        let tool = OrderByOidTool::new(client.clone());

        let call =
            ToolCall::new("get_user_order_by_oid").with_arg("account_address", json!("0xabc"));
        let result = tool.execute(&call).await.unwrap();
        assert!(!result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(
            value,
            json!({"error": "Failed to fetch user order by oid: Missing parameter: oid"})
        );
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_order_by_cloid_passthrough() {
        let status = json!({"status": "filled", "order": {"oid": 7}});
        let client = Arc::new(
            MockInfoClient::new().with_response("query_order_by_cloid", status.clone()),
        );
        let tool = OrderByCloidTool::new(client.clone());

        let call = ToolCall::new("get_user_order_by_cloid")
            .with_arg("account_address", json!("0xabc"))
            .with_arg("cloid", json!("0x1234abcd"));
        let result = tool.execute(&call).await.unwrap();
        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(value, status);
        assert_eq!(
            client.calls(),
            vec!["query_order_by_cloid 0xabc 0x1234abcd".to_string()]
        );
    }
}
