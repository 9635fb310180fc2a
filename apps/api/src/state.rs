use std::sync::Arc;

use crate::analysis::engine::AnalysisEngine;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless analysis engine. The keyword extraction strategy inside it is
    /// fixed at startup from `config.nlp_backend`.
    pub engine: Arc<AnalysisEngine>,
}
