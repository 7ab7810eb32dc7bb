use std::sync::Arc;

use killrvideo_core::validation::{RequestGuard, TracingSink};

use crate::backend::Backend;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Validation gate run before any request reaches the backend.
    pub guard: Arc<RequestGuard<TracingSink>>,
    /// Business logic for validated requests.
    pub backend: Arc<dyn Backend>,
}
