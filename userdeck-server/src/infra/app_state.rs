use std::{fmt, sync::Arc};

use crate::users::store::UserStore;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(UserStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
