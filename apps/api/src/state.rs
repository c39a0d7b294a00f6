use std::sync::Arc;

use crate::config::Config;
use crate::profiles::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable profile persistence. Default: PgProfileStore.
    pub profiles: Arc<dyn ProfileStore>,
}
