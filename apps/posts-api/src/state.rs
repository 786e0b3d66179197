//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::PostService;
use posts_core::error::StoreError;
use posts_infra::InMemoryPostStore;
use posts_infra::store::{self, StoreConfig};

/// Shared application state.
///
/// Built once per process; the store client inside is reused by every request.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state against the configured store.
    pub async fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let store = store::connect(config).await?;

        tracing::info!(backend = ?config.backend, "Application state initialized");

        Ok(Self {
            posts: PostService::new(store),
        })
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            posts: PostService::new(Arc::new(InMemoryPostStore::new())),
        }
    }
}
