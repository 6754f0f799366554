//! Application state for the web layer.

use std::sync::Arc;

/// Shared application state.
///
/// Generic over the upstream API so handlers can be exercised against a
/// stub.
pub struct AppState<A> {
    /// Upstream transit API client
    pub transit: Arc<A>,
}

impl<A> AppState<A> {
    /// Create a new app state.
    pub fn new(transit: A) -> Self {
        Self {
            transit: Arc::new(transit),
        }
    }
}

// Manual impl: deriving would require `A: Clone`.
impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            transit: Arc::clone(&self.transit),
        }
    }
}
