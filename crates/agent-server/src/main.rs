//! Hyperliquid Info Hosting Server
//!
//! Axum-based server that discovers the info query tools by name, lists
//! their schemas, and fans incoming calls out to them. The downstream info
//! client is constructed once here and shared read-only across all tools.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_core::{PromptRegistry, ToolRegistry};
use hyperliquid_info::{prompts::AnalyzePositionsPrompt, HttpInfoClient, InfoClient};

use crate::handlers::{call_tool, health_check, list_prompts, list_tools, render_prompt};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Single info client for the process lifetime
    let api_url = std::env::var("HYPERLIQUID_API_URL")
        .unwrap_or_else(|_| hyperliquid_info::MAINNET_API_URL.into());
    let client: Arc<dyn InfoClient> = Arc::new(HttpInfoClient::new(&api_url));
    tracing::info!("Info client: {} ({})", client.name(), api_url);

    // Register query tools
    let mut tools = ToolRegistry::new();
    hyperliquid_info::register_tools(&mut tools, client);

    tracing::info!("Registered {} tools:", tools.len());
    for name in tools.names() {
        tracing::info!("  • {}", name);
    }

    // Register prompt templates
    let mut prompts = PromptRegistry::new();
    prompts.register(AnalyzePositionsPrompt);

    // Build application state
    let state = AppState {
        tools: Arc::new(tools),
        prompts: Arc::new(prompts),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/tools", get(list_tools))
        .route("/api/tools/{name}", post(call_tool))
        .route("/api/prompts", get(list_prompts))
        .route("/api/prompts/{name}", post(render_prompt))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Bind host/port from environment, read once at startup
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid PORT: {}", e))?;
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Hyperliquid info server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
