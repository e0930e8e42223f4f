use std::sync::Arc;

use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::oracle::TextUnderstanding;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Injected text-understanding oracle. Production wires `AnthropicOracle`;
    /// tests substitute a deterministic stub.
    pub oracle: Arc<dyn TextUnderstanding>,
    pub store: CandidateStore,
    pub config: Config,
}
