use async_trait::async_trait;

use crate::domain::{Post, PostFields};
use crate::error::StoreError;

/// Post store - the narrow key-value interface over the managed database.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Write a post unconditionally (insert or overwrite by key).
    async fn put(&self, post: &Post) -> Result<(), StoreError>;

    /// Read a single post by key.
    async fn get(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// Overwrite the content fields of the post at `id` in one step.
    ///
    /// With `require_exists`, fails with [`StoreError::ConditionFailed`] and
    /// leaves the store untouched when no record is stored under `id`.
    async fn update(
        &self,
        id: &str,
        fields: &PostFields,
        require_exists: bool,
    ) -> Result<(), StoreError>;

    /// Delete by key. Returns whether a record was present.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Scan the table in store order.
    ///
    /// `Some(n)` reads a single page of at most `n` records, `None` reads
    /// everything.
    async fn scan(&self, limit: Option<usize>) -> Result<Vec<Post>, StoreError>;
}
