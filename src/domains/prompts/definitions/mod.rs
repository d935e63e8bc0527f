//! Prompt definitions module.
//!
//! Each prompt is a fixed instruction with a name and description.
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod eta_explain;
mod invoice_audit_summary;

pub use eta_explain::EtaExplainPrompt;
pub use invoice_audit_summary::InvoiceAuditSummaryPrompt;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// Instruction text delivered as the single prompt message.
    const TEXT: &'static str;
}
