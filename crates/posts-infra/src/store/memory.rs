//! In-memory post store - used for local runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::domain::{Post, PostFields};
use posts_core::error::StoreError;
use posts_core::ports::PostStore;

/// In-memory store using a HashMap with an async RwLock.
///
/// Scans return posts in map order, which is unspecified, like a real table scan.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn put(&self, post: &Post) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.get(id).cloned())
    }

    async fn update(
        &self,
        id: &str,
        fields: &PostFields,
        require_exists: bool,
    ) -> Result<(), StoreError> {
        // Check and write under one lock so the condition cannot go stale.
        let mut posts = self.posts.write().await;
        match posts.get_mut(id) {
            Some(post) => post.fields = fields.clone(),
            None if require_exists => return Err(StoreError::ConditionFailed),
            None => {
                posts.insert(id.to_string(), Post::with_id(id, fields.clone()));
            }
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut posts = self.posts.write().await;
        Ok(posts.remove(id).is_some())
    }

    async fn scan(&self, limit: Option<usize>) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        let limit = limit.unwrap_or(usize::MAX);
        Ok(posts.values().take(limit).cloned().collect())
    }
}
