//! Application state for the Daily Rate Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::config::{ConfigLoader, RateConfigSource, RateStore};

/// Shared application state.
///
/// Holds the live rate table. Clones share the same underlying store.
#[derive(Clone)]
pub struct AppState {
    /// The live rate configuration store.
    store: RateStore,
}

impl AppState {
    /// Creates application state seeded from a loaded rate table.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(RateStore::new(config.snapshot()))
    }

    /// Creates application state around an existing store.
    pub fn with_store(store: RateStore) -> Self {
        Self { store }
    }

    /// Returns the rate configuration store.
    pub fn store(&self) -> &RateStore {
        &self.store
    }
}
