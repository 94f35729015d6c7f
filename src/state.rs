// src/state.rs
use std::sync::Arc;

use crate::prompts::PromptTemplateSet;
use crate::services::oracle::CompletionOracle;

pub type SharedState = Arc<AppState>;

/// Nothing here changes after startup; requests share it read-only.
pub struct AppState {
    pub oracle: Arc<dyn CompletionOracle>,
    pub templates: &'static PromptTemplateSet,
}

impl AppState {
    pub fn new(oracle: Arc<dyn CompletionOracle>) -> Self {
        Self {
            oracle,
            templates: PromptTemplateSet::global(),
        }
    }
}
