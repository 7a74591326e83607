use std::sync::Arc;

use availability_engine::{AvailabilityEngine, AvailabilityStore};
use token_gate::TokenVerifier;

/// Everything a request handler may read. Built once at startup; cloning only
/// bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    engine: AvailabilityEngine,
    verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(store: Arc<dyn AvailabilityStore>, verifier: TokenVerifier) -> Self {
        Self {
            engine: AvailabilityEngine::new(store),
            verifier: Arc::new(verifier),
        }
    }

    pub fn engine(&self) -> &AvailabilityEngine {
        &self.engine
    }

    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }
}
