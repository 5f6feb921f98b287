//! Shared context for the API layer.

use std::sync::Arc;

use crate::analysis::gemini::GenerativeClient;
use crate::analysis::orchestrator::ReportAnalyzer;
use crate::core_state::CoreState;

/// Shared context for all routes: the state slot, the analyzer, and
/// the generative client (needed again when grounding chat sessions).
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
    pub client: Arc<dyn GenerativeClient>,
    pub analyzer: ReportAnalyzer,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>, client: Arc<dyn GenerativeClient>) -> Self {
        let analyzer = ReportAnalyzer::new(client.clone());
        Self {
            core,
            client,
            analyzer,
        }
    }
}
