//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::workspace::Workspace;

/// Shared application state.
///
/// Edits take the write lock; searches run under the read lock so every
/// strategy in a comparison sees the same snapshot.
#[derive(Clone)]
pub struct AppState {
    /// The graph and search settings being edited
    pub workspace: Arc<RwLock<Workspace>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace: Arc::new(RwLock::new(workspace)),
        }
    }
}
