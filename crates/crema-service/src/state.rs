//! Application state shared across handlers.

use std::sync::Arc;

use crema_store::ShotStore;

use crate::shots::ShotService;

/// Shared application state.
pub struct AppState {
    /// Query layer over the shot history.
    pub shots: ShotService,
}

impl AppState {
    /// Create new application state around a populated store.
    pub fn new(store: ShotStore) -> Arc<Self> {
        Arc::new(Self {
            shots: ShotService::new(Arc::new(store)),
        })
    }
}
