use std::sync::Arc;

use crate::config::Config;
use crate::generation::extractor::ProfileExtractor;
use crate::generation::ids::IdGenerator;
use crate::intake::IntakeGate;
use crate::store::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record store. Default: in-memory; Redis when REDIS_URL is set.
    pub store: Arc<dyn PortfolioStore>,
    /// Pluggable extraction step. Default: SimulatedExtractor.
    pub extractor: Arc<dyn ProfileExtractor>,
    pub ids: Arc<IdGenerator>,
    /// Single generation slot shared by the upload form and the API.
    pub intake: IntakeGate,
    pub config: Config,
}

impl AppState {
    pub fn new(
        store: Arc<dyn PortfolioStore>,
        extractor: Arc<dyn ProfileExtractor>,
        config: Config,
    ) -> Self {
        Self {
            store,
            extractor,
            ids: Arc::new(IdGenerator::default()),
            intake: IntakeGate::default(),
            config,
        }
    }
}
