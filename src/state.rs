//! Shared application state for request handlers.

use std::sync::Arc;

use crate::services::DispatchService;

/// Application state shared across all request handlers.
///
/// Cloned per request by axum; the dispatch service is behind an Arc so
/// clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Notification dispatch service
    pub dispatcher: Arc<DispatchService>,
}

impl AppState {
    /// Creates new application state wrapping the dispatch service
    pub fn new(dispatcher: DispatchService) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}
