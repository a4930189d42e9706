use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::SiteGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Deliberately small: the service is stateless, and the generated site is
/// owned by the client session — nothing here persists across requests.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Default: `LlmSiteGenerator`, which
    /// falls back to the built-in template when no API key is configured.
    pub generator: Arc<dyn SiteGenerator>,
    pub config: Config,
}
