//! Application State

use std::sync::Arc;

use agent_core::{PromptRegistry, ToolRegistry};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Tool registry with all available query tools
    pub tools: Arc<ToolRegistry>,

    /// Prompt registry with guided-analysis templates
    pub prompts: Arc<PromptRegistry>,
}
