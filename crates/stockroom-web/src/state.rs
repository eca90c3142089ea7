use std::sync::Arc;

use stockroom_core::ItemStore;

/// Shared handler state
///
/// The store is constructed by the caller and injected here; nothing in
/// this crate owns a global instance, so tests build isolated apps freely.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<ItemStore>,
}

impl AppState {
    pub fn new(store: Arc<ItemStore>) -> Self {
        Self { store }
    }
}
