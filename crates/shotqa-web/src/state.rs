//! Application state.

use shotqa_core::VisionRelay;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<dyn VisionRelay>,
}

impl AppState {
    pub fn new(relay: Arc<dyn VisionRelay>) -> Self {
        Self { relay }
    }
}
