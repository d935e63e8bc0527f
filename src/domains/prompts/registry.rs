//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{EtaExplainPrompt, InvoiceAuditSummaryPrompt, PromptDefinition};

/// A registered prompt: metadata plus its instruction text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

fn entry<P: PromptDefinition>() -> PromptEntry {
    PromptEntry {
        name: P::NAME,
        description: P::DESCRIPTION,
        text: P::TEXT,
    }
}

/// Get all registered prompts, in listing order.
pub fn get_all_prompts() -> Vec<PromptEntry> {
    vec![
        entry::<InvoiceAuditSummaryPrompt>(),
        entry::<EtaExplainPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![InvoiceAuditSummaryPrompt::NAME, EtaExplainPrompt::NAME]
}
