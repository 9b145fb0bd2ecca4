//! HTTP Handlers

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use agent_core::{AgentError, PromptMessage, PromptSchema, ToolCall, ToolSchema};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub tools: usize,
    pub prompts: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct CallToolRequest {
    /// Tool arguments as a JSON object
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResponse {
    pub name: String,
    pub call_id: String,
    pub success: bool,
    /// The tool's response envelope, as JSON text
    pub output: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderPromptRequest {
    #[serde(default)]
    pub arguments: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct RenderPromptResponse {
    pub name: String,
    pub messages: Vec<PromptMessage>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

fn error_response(err: &AgentError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match err {
        AgentError::ToolNotFound(_) => (StatusCode::NOT_FOUND, "TOOL_NOT_FOUND"),
        AgentError::PromptNotFound(_) => (StatusCode::NOT_FOUND, "PROMPT_NOT_FOUND"),
        AgentError::ToolValidation(_) => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENTS"),
        AgentError::Prompt(_) => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENTS"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };
    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        tools: state.tools.len(),
        prompts: state.prompts.len(),
    })
}

/// List the schemas of all registered tools
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolSchema>> {
    Json(state.tools.schemas())
}

/// Invoke a tool by name
pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<CallToolRequest>,
) -> Result<Json<CallToolResponse>, (StatusCode, Json<ErrorResponse>)> {
    let call_id = uuid::Uuid::new_v4().to_string();

    let call = ToolCall {
        name: name.clone(),
        arguments: payload.arguments,
        id: Some(call_id.clone()),
    };

    let result = state.tools.execute(&call).await.map_err(|e| {
        tracing::warn!(tool = %name, error = %e, "tool call rejected");
        error_response(&e)
    })?;

    Ok(Json(CallToolResponse {
        name: result.name,
        call_id,
        success: result.success,
        output: result.output,
    }))
}

/// List the schemas of all registered prompts
pub async fn list_prompts(State(state): State<AppState>) -> Json<Vec<PromptSchema>> {
    Json(state.prompts.schemas())
}

/// Render a prompt template by name
pub async fn render_prompt(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<RenderPromptRequest>,
) -> Result<Json<RenderPromptResponse>, (StatusCode, Json<ErrorResponse>)> {
    let messages = state
        .prompts
        .render(&name, &payload.arguments)
        .map_err(|e| {
            tracing::warn!(prompt = %name, error = %e, "prompt render rejected");
            error_response(&e)
        })?;

    Ok(Json(RenderPromptResponse { name, messages }))
}
