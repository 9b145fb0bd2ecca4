//! Prompt Templates
//!
//! Guided-analysis template: a fixed sequence of conversational turns,
//! keyed only by the account address, that points a caller at the account
//! query tools.

use std::collections::HashMap;

use agent_core::{
    prompt::PromptSchema, AgentError, Prompt, PromptMessage, Result as CoreResult,
};

/// Analyze the trading positions and activity of an account.
pub struct AnalyzePositionsPrompt;

impl Prompt for AnalyzePositionsPrompt {
    fn schema(&self) -> PromptSchema {
        PromptSchema {
            name: "analyze_positions".into(),
            description: "Analyze the user's trading positions and trading activity.".into(),
            arguments: vec!["account_address".into()],
        }
    }

    fn render(&self, arguments: &HashMap<String, String>) -> CoreResult<Vec<PromptMessage>> {
        let address = arguments
            .get("account_address")
            .ok_or_else(|| AgentError::Prompt("Missing argument: account_address".into()))?;

        Ok(vec![
            PromptMessage::user(format!(
                "Please analyze the trading positions for account {}:",
                address
            )),
            PromptMessage::user(
                "Use the get_user_state, get_user_open_orders, get_user_trade_history, \
                 get_user_funding_history, and get_user_fees tools to fetch data.",
            ),
            PromptMessage::assistant(
                "I'll analyze the user's trading positions, open orders, trade history, \
                 funding payments, and fees to provide insights on risk and performance.",
            ),
        ])
    }
}
