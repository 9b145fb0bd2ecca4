//! Market Data Tools
//!
//! Exchange-wide queries: mid prices, market metadata, order-book depth,
//! and candlesticks.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};

use super::{query_result, required_str};
use crate::client::InfoClient;
use crate::error::Result;
use crate::time::parse_time_range;

const COIN_DESC: &str = "The trading symbol (e.g., 'BTC', 'ETH')";
const START_DESC: &str = "Start time in ISO 8601 format (e.g., '2025-01-01T00:00:00Z')";
const END_DESC: &str = "End time in ISO 8601 format (e.g., '2025-12-31T23:59:59Z')";

/// Retrieve the mid prices for all trading pairs on the exchange.
pub struct AllMidsTool {
    client: Arc<dyn InfoClient>,
}

impl AllMidsTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for AllMidsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_all_mids".into(),
            description: "Retrieve the mid prices for all trading pairs available on the exchange."
                .into(),
            parameters: vec![],
            category: Some("market_data".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = self.client.all_mids().await;
        Ok(query_result(
            "get_all_mids",
            "Failed to fetch all mids",
            outcome,
        ))
    }
}

/// Retrieve perpetual-market metadata under the legacy "perp DEXs" name.
///
/// Returns the same payload as `get_perp_metadata` without asset contexts;
/// kept as a separate operation for callers that already use this name.
pub struct PerpDexsTool {
    client: Arc<dyn InfoClient>,
}

impl PerpDexsTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for PerpDexsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_perp_dexs".into(),
            description:
                "Retrieve metadata about perpetual markets available on the Hyperliquid decentralized exchange."
                    .into(),
            parameters: vec![],
            category: Some("market_data".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = self.client.meta().await;
        Ok(query_result(
            "get_perp_dexs",
            "Failed to fetch perpetual DEXs",
            outcome,
        ))
    }
}

/// Fetch perpetual-market metadata, optionally with per-asset contexts.
pub struct PerpMetadataTool {
    client: Arc<dyn InfoClient>,
}

impl PerpMetadataTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for PerpMetadataTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_perp_metadata".into(),
            description: "Fetch metadata about perpetual markets on the Hyperliquid exchange."
                .into(),
            parameters: vec![ParameterSchema::optional(
                "include_asset_ctxs",
                "boolean",
                "If true, includes asset contexts with metadata",
                json!(false),
            )],
            category: Some("market_data".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let include_ctxs = call.bool_arg("include_asset_ctxs").unwrap_or(false);

        let outcome = if include_ctxs {
            self.client.meta_and_asset_ctxs().await
        } else {
            self.client.meta().await
        };
        Ok(query_result(
            "get_perp_metadata",
            "Failed to fetch perpetual metadata",
            outcome,
        ))
    }
}

/// Fetch spot-market metadata, optionally with per-asset contexts.
pub struct SpotMetadataTool {
    client: Arc<dyn InfoClient>,
}

impl SpotMetadataTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SpotMetadataTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_spot_metadata".into(),
            description: "Fetch metadata about spot markets on the Hyperliquid exchange.".into(),
            parameters: vec![ParameterSchema::optional(
                "include_asset_ctxs",
                "boolean",
                "If true, includes asset contexts with metadata",
                json!(false),
            )],
            category: Some("market_data".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let include_ctxs = call.bool_arg("include_asset_ctxs").unwrap_or(false);

        let outcome = if include_ctxs {
            self.client.spot_meta_and_asset_ctxs().await
        } else {
            self.client.spot_meta().await
        };
        Ok(query_result(
            "get_spot_metadata",
            "Failed to fetch spot metadata",
            outcome,
        ))
    }
}

/// Fetch the Level 2 order book snapshot for a coin.
pub struct L2SnapshotTool {
    client: Arc<dyn InfoClient>,
}

impl L2SnapshotTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for L2SnapshotTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_l2_snapshot".into(),
            description: "Fetch the Level 2 order book snapshot for a specific coin.".into(),
            parameters: vec![ParameterSchema::required("coin_name", "string", COIN_DESC)],
            category: Some("market_data".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = match required_str(call, "coin_name") {
            Ok(coin) => self.client.l2_snapshot(coin).await,
            Err(err) => Err(err),
        };
        Ok(query_result(
            "get_l2_snapshot",
            "Failed to fetch L2 snapshot",
            outcome,
        ))
    }
}

/// Fetch the candlestick data snapshot for a coin over a time range.
pub struct CandlesSnapshotTool {
    client: Arc<dyn InfoClient>,
}

impl CandlesSnapshotTool {
    pub fn new(client: Arc<dyn InfoClient>) -> Self {
        Self { client }
    }

    async fn fetch(&self, call: &ToolCall) -> Result<serde_json::Value> {
        let coin = required_str(call, "coin_name")?;
        let interval = required_str(call, "interval")?;
        let start = required_str(call, "start_time")?;
        let end = required_str(call, "end_time")?;

        let (start_ms, end_ms) = parse_time_range(start, end)?;
        self.client
            .candles_snapshot(coin, interval, start_ms, end_ms)
            .await
    }
}

#[async_trait]
impl Tool for CandlesSnapshotTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_candles_snapshot".into(),
            description: "Fetch the candlestick data snapshot for a specific coin.".into(),
            parameters: vec![
                ParameterSchema::required("coin_name", "string", COIN_DESC),
                ParameterSchema::required(
                    "interval",
                    "string",
                    "The candlestick interval (e.g., '1m', '5m', '1h')",
                ),
                ParameterSchema::required("start_time", "string", START_DESC),
                ParameterSchema::required("end_time", "string", END_DESC),
            ],
            category: Some("market_data".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let outcome = self.fetch(call).await;
        Ok(query_result(
            "get_candles_snapshot",
            "Failed to fetch candles snapshot",
            outcome,
        ))
    }
}
