//! Application state shared across handlers

use std::sync::Arc;

use crate::store::RecordStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Box<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: impl RecordStore + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Box::new(store),
            }),
        }
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.inner.store.as_ref()
    }
}
