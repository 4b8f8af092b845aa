use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. `LlmClient` in production, a fake in tests.
    pub llm: Arc<dyn TextGenerator>,
}
