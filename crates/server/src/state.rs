//! Application state shared across handlers.

use std::sync::Arc;
use treeurls_store::TreeUrlStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Tree URL store.
    pub store: Arc<dyn TreeUrlStore>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(store: Arc<dyn TreeUrlStore>) -> Self {
        Self { store }
    }
}
