//! Prompt service implementation.
//!
//! Lists the static prompt catalog and resolves a prompt by name. Prompts
//! take no arguments; their text is returned as a single message.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::{PromptEntry, get_all_prompts};

/// Service for listing and resolving prompts.
#[derive(Debug, Clone)]
pub struct PromptService {
    prompts: Vec<PromptEntry>,
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptService {
    /// Create a PromptService over the registered catalog.
    pub fn new() -> Self {
        let prompts = get_all_prompts();
        info!("Initializing PromptService with {} prompts", prompts.len());
        Self { prompts }
    }

    /// List all available prompts in registration order.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .iter()
            .map(|entry| Prompt {
                name: entry.name.to_string(),
                title: None,
                description: Some(entry.description.to_string()),
                arguments: None,
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Resolve a prompt by name.
    pub async fn get_prompt(&self, name: &str) -> Result<GetPromptResult, PromptError> {
        let entry = self
            .prompts
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| PromptError::not_found(name))?;

        debug!("Resolved prompt {}", entry.name);

        // MCP prompt messages only carry user/assistant roles; instructions go as user.
        Ok(GetPromptResult {
            description: Some(entry.description.to_string()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, entry.text)],
        })
    }
}
