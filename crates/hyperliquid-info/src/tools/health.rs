//! Health Probe
//!
//! Fixed status payload plus the current timestamp. Makes no downstream
//! call and never produces a failure envelope.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use agent_core::{Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};

/// Server name reported by the health probe
pub const SERVER_NAME: &str = "Hyperliquid Info";

/// Simple health check tool for monitoring.
pub struct HealthCheckTool;

#[async_trait]
impl Tool for HealthCheckTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "health_check".into(),
            description: "Simple health check endpoint to verify the server is running.".into(),
            parameters: vec![],
            category: Some("monitoring".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let payload = json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339(),
            "server": SERVER_NAME,
        });
        Ok(ToolResult::success("health_check", payload.to_string()))
    }
}
