//! ETA explanation prompt definition.

use super::PromptDefinition;

pub struct EtaExplainPrompt;

impl PromptDefinition for EtaExplainPrompt {
    const NAME: &'static str = "eta_explain";
    const DESCRIPTION: &'static str = "Explain ETA drivers (weather, berth, customs)";
    const TEXT: &'static str = "Break down ETA into Weather, Berth, Customs, Trucking.";
}
