//! # hyperliquid-info
//!
//! Read-only query tools over the Hyperliquid market-data and account-info
//! API. Each supported query kind is exposed as an `agent_core::Tool` that
//! is a one-to-one passthrough to the info client:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌───────────────────┐
//! │ Hosting layer│───▶│   Query tool      │───▶│  InfoClient       │
//! │ (by name)    │    │ normalize + call  │    │  (one HTTP query) │
//! └──────────────┘    └──────────────────┘    └───────────────────┘
//!                              │
//!                              ▼
//!                     Response envelope (JSON text):
//!                     payload verbatim, or {"error": "<prefix>: <cause>"}
//! ```
//!
//! There is no orchestration between tools, no caching, and no retry
//! logic. The only shared resource is a single `InfoClient`, constructed
//! at startup and shared read-only for the process lifetime.

pub mod client;
pub mod envelope;
pub mod error;
pub mod prompts;
pub mod time;
pub mod tools;

pub use client::{HttpInfoClient, InfoClient, MockInfoClient, MAINNET_API_URL, TESTNET_API_URL};
pub use error::{InfoError, Result};

use std::sync::Arc;

use agent_core::ToolRegistry;

/// Register every info query tool against a shared client.
pub fn register_tools(registry: &mut ToolRegistry, client: Arc<dyn InfoClient>) {
    registry.register(tools::UserStateTool::new(client.clone()));
    registry.register(tools::OpenOrdersTool::new(client.clone()));
    registry.register(tools::AllMidsTool::new(client.clone()));
    registry.register(tools::TradeHistoryTool::new(client.clone()));
    registry.register(tools::PerpDexsTool::new(client.clone()));
    registry.register(tools::CoinFundingHistoryTool::new(client.clone()));
    registry.register(tools::UserFundingHistoryTool::new(client.clone()));
    registry.register(tools::L2SnapshotTool::new(client.clone()));
    registry.register(tools::CandlesSnapshotTool::new(client.clone()));
    registry.register(tools::UserFeesTool::new(client.clone()));
    registry.register(tools::StakingSummaryTool::new(client.clone()));
    registry.register(tools::StakingRewardsTool::new(client.clone()));
    registry.register(tools::OrderByOidTool::new(client.clone()));
    registry.register(tools::OrderByCloidTool::new(client.clone()));
    registry.register(tools::SubAccountsTool::new(client.clone()));
    registry.register(tools::PerpMetadataTool::new(client.clone()));
    registry.register(tools::SpotMetadataTool::new(client));
    registry.register(tools::HealthCheckTool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::ToolCall;

    #[tokio::test]
    async fn test_register_tools_exposes_every_query_kind() {
        let mut registry = ToolRegistry::new();
        register_tools(&mut registry, Arc::new(MockInfoClient::new()));

        assert_eq!(registry.len(), 18);
        for name in [
            "get_user_state",
            "get_user_open_orders",
            "get_all_mids",
            "get_user_trade_history",
            "get_perp_dexs",
            "get_coin_funding_history",
            "get_user_funding_history",
            "get_l2_snapshot",
            "get_candles_snapshot",
            "get_user_fees",
            "get_user_staking_summary",
            "get_user_staking_rewards",
            "get_user_order_by_oid",
            "get_user_order_by_cloid",
            "get_user_sub_accounts",
            "get_perp_metadata",
            "get_spot_metadata",
            "health_check",
        ] {
            assert!(registry.get(name).is_some(), "missing tool {}", name);
        }
    }

    #[tokio::test]
    async fn test_end_to_end_all_mids_via_registry() {
        let mids = serde_json::json!({"BTC": "50000.0", "ETH": "3000.0"});
        let client = Arc::new(MockInfoClient::new().with_response("all_mids", mids.clone()));

        let mut registry = ToolRegistry::new();
        register_tools(&mut registry, client);

        let result = registry
            .execute(&ToolCall::new("get_all_mids"))
            .await
            .unwrap();
        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(value, mids);
    }
}
