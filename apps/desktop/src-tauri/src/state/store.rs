//! # Store State
//!
//! Tauri-managed handle to the draft store. `DraftStore` is already
//! thread-safe for our access pattern: every operation is a single
//! whole-value read or an atomic replace, so no outer lock is needed.

use fatura_store::DraftStore;

/// Tauri-managed persistence state.
#[derive(Debug)]
pub struct StoreState {
    store: DraftStore,
}

impl StoreState {
    pub fn new(store: DraftStore) -> Self {
        StoreState { store }
    }

    pub fn store(&self) -> &DraftStore {
        &self.store
    }
}
