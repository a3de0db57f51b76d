use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::recognition::SkillRecognizer;
use crate::registry::Registry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owned registry state. The mutex is the single-writer boundary: every
    /// mutation and its persistence run inside one lock scope.
    pub registry: Arc<Mutex<Registry>>,
    /// Pluggable skill recognizer. Default: `SubstringRecognizer`.
    pub recognizer: Arc<dyn SkillRecognizer>,
    pub config: Config,
}
