//! Application state management.

use crate::config::Config;
use crate::db::{DocumentStore, StoreError};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Document store handle, absent when no connection string is configured.
    pub store: Option<DocumentStore>,
}

impl AppState {
    /// Creates application state without a document store.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: None,
        }
    }

    /// Creates application state with a document store.
    #[must_use]
    pub fn with_store(config: Config, store: DocumentStore) -> Self {
        Self {
            config,
            store: Some(store),
        }
    }

    /// Borrows the store handle, or reports it as unavailable.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if no store was configured.
    pub fn store(&self) -> Result<&DocumentStore, StoreError> {
        self.store.as_ref().ok_or(StoreError::Unavailable)
    }
}
