//! # agent-core
//!
//! Core tool and prompt framework with registry-based dispatch.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Hosting Layer                            │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │  Discovery  │  │    Tools    │  │   Prompts           │  │
//! │  │  (schemas)  │──│   Registry  │──│   Registry          │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Tool` trait enables registering independent, stateless operations
//! that the hosting layer discovers by name and invokes concurrently.

pub mod error;
pub mod prompt;
pub mod tool;

pub use error::{AgentError, Result};
pub use prompt::{Prompt, PromptMessage, PromptRegistry, PromptSchema};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult, ToolSchema};
