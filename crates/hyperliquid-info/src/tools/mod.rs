//! Query Tools
//!
//! One `agent_core::Tool` per supported query kind. Every tool follows the
//! same contract: normalize scalar arguments, make exactly one info-client
//! call, and return the response envelope as JSON text. Failures of any
//! kind are converted to the failure envelope at the tool boundary; no tool
//! lets a downstream or parse error escape as `Err`.

mod account;
mod funding;
mod health;
mod market;
mod orders;
mod staking;

pub use account::{
    OpenOrdersTool, SubAccountsTool, TradeHistoryTool, UserFeesTool, UserStateTool,
};
pub use funding::{CoinFundingHistoryTool, UserFundingHistoryTool};
pub use health::HealthCheckTool;
pub use market::{
    AllMidsTool, CandlesSnapshotTool, L2SnapshotTool, PerpDexsTool, PerpMetadataTool,
    SpotMetadataTool,
};
pub use orders::{OrderByCloidTool, OrderByOidTool};
pub use staking::{StakingRewardsTool, StakingSummaryTool};

use agent_core::{ToolCall, ToolResult};
use serde_json::Value;

use crate::envelope;
use crate::error::{InfoError, Result};

/// Convert a query outcome into the tool's envelope result.
pub(crate) fn query_result(
    name: &'static str,
    prefix: &'static str,
    outcome: Result<Value>,
) -> ToolResult {
    match outcome {
        Ok(value) => ToolResult::success(name, envelope::success(&value)),
        Err(err) => ToolResult::failure(name, envelope::failure(prefix, &err)),
    }
}

/// Extract a required string argument.
pub(crate) fn required_str<'a>(call: &'a ToolCall, key: &str) -> Result<&'a str> {
    call.str_arg(key)
        .ok_or_else(|| InfoError::MissingParameter(key.to_string()))
}

/// Extract a required integer argument.
pub(crate) fn required_int(call: &ToolCall, key: &str) -> Result<i64> {
    call.int_arg(key)
        .ok_or_else(|| InfoError::MissingParameter(key.to_string()))
}
