//! Invoice audit summary prompt definition.

use super::PromptDefinition;

/// Bilingual one-line summary of an invoice audit.
pub struct InvoiceAuditSummaryPrompt;

impl PromptDefinition for InvoiceAuditSummaryPrompt {
    const NAME: &'static str = "invoice_audit_summary";
    const DESCRIPTION: &'static str = "Summarize invoice audit (KR+EN, 1 line)";
    const TEXT: &'static str =
        "Provide KR concise summary + EN-KR one line. Include Incoterm/HS/DEM-DET.";
}
