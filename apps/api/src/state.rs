use std::sync::Arc;

use crate::config::Config;
use crate::decode::DocumentDecoder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document decoder. Default: StandardDecoder (pdf-extract + docx-rs).
    pub decoder: Arc<dyn DocumentDecoder>,
}
