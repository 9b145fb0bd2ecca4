//! Prompt Templates
//!
//! Static, parameterized conversation templates. A prompt holds no state
//! and performs no computation: rendering substitutes arguments into a
//! fixed sequence of messages.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AgentError, Result};

/// Role of a prompt message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User turn
    User,
    /// Assistant turn
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message in a rendered prompt
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PromptMessage {
    /// Message role
    pub role: Role,

    /// Text content
    pub content: String,
}

impl PromptMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Prompt definition schema (for discovery by the hosting layer)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PromptSchema {
    /// Unique prompt identifier
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Names of arguments the template substitutes
    pub arguments: Vec<String>,
}

/// Prompt trait - implement to add a new template
pub trait Prompt: Send + Sync {
    /// Get the prompt's schema for discovery
    fn schema(&self) -> PromptSchema;

    /// Render the template with given arguments
    fn render(&self, arguments: &HashMap<String, String>) -> Result<Vec<PromptMessage>>;
}

/// Registry for available prompts
pub struct PromptRegistry {
    prompts: HashMap<String, Arc<dyn Prompt>>,
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptRegistry {
    pub fn new() -> Self {
        Self {
            prompts: HashMap::new(),
        }
    }

    /// Register a new prompt
    pub fn register<P: Prompt + 'static>(&mut self, prompt: P) {
        let schema = prompt.schema();
        self.prompts.insert(schema.name.clone(), Arc::new(prompt));
    }

    /// Render a prompt by name
    pub fn render(
        &self,
        name: &str,
        arguments: &HashMap<String, String>,
    ) -> Result<Vec<PromptMessage>> {
        let prompt = self
            .prompts
            .get(name)
            .ok_or_else(|| AgentError::PromptNotFound(name.to_string()))?;
        prompt.render(arguments)
    }

    /// Get all prompt schemas (for the discovery endpoint)
    pub fn schemas(&self) -> Vec<PromptSchema> {
        self.prompts.values().map(|p| p.schema()).collect()
    }

    /// Number of registered prompts
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct GreetPrompt;

    impl Prompt for GreetPrompt {
        fn schema(&self) -> PromptSchema {
            PromptSchema {
                name: "greet".into(),
                description: "Greet someone by name".into(),
                arguments: vec!["name".into()],
            }
        }

        fn render(&self, arguments: &HashMap<String, String>) -> Result<Vec<PromptMessage>> {
            let name = arguments
                .get("name")
                .ok_or_else(|| AgentError::Prompt("Missing argument: name".into()))?;
            Ok(vec![PromptMessage::user(format!("Hello, {}!", name))])
        }
    }

    #[test]
    fn test_prompt_registry() {
        let mut registry = PromptRegistry::new();
        registry.register(GreetPrompt);

        let mut args = HashMap::new();
        args.insert("name".to_string(), "world".to_string());

        let messages = registry.render("greet", &args).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "Hello, world!");
    }

    #[test]
    fn test_unknown_prompt() {
        let registry = PromptRegistry::new();
        let err = registry.render("nope", &HashMap::new()).unwrap_err();
        assert!(matches!(err, AgentError::PromptNotFound(_)));
    }

    #[test]
    fn test_missing_argument() {
        let mut registry = PromptRegistry::new();
        registry.register(GreetPrompt);

        let err = registry.render("greet", &HashMap::new()).unwrap_err();
        assert!(matches!(err, AgentError::Prompt(_)));
    }
}
