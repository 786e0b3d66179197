//! Post operations - create, update, delete and list on top of a [`PostStore`].

use std::sync::Arc;

use crate::domain::Post;
use crate::error::{DomainError, StoreError};
use crate::ports::PostStore;
use crate::validation;

/// Number of posts returned by a list without an explicit limit.
pub const DEFAULT_LIST_LIMIT: usize = 4;

/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "Item Deleted";

/// Post CRUD operations.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Validate a create body and store it under a fresh id.
    pub async fn create(&self, body: Option<&str>) -> Result<Post, DomainError> {
        let fields = validation::validate_create(body)?;
        let post = Post::new(fields);

        self.store.put(&post).await?;
        tracing::info!(post_id = %post.id, "Post created");

        Ok(post)
    }

    /// Overwrite the content of an existing post and return it as stored.
    ///
    /// Never creates a record: an unknown id is reported as not found.
    pub async fn update(&self, body: Option<&str>) -> Result<Post, DomainError> {
        let (id, fields) = validation::validate_update(body)?;

        match self.store.update(&id, &fields, true).await {
            Ok(()) => {}
            Err(StoreError::ConditionFailed) => {
                tracing::info!(post_id = %id, "Update target does not exist");
                return Err(DomainError::NotFound { id });
            }
            Err(e) => return Err(e.into()),
        }

        let post = self
            .store
            .get(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound { id: id.clone() })?;
        tracing::info!(post_id = %post.id, "Post updated");

        Ok(post)
    }

    /// Delete the post with the given id.
    pub async fn delete(&self, id: Option<&str>) -> Result<&'static str, DomainError> {
        let id = id
            .filter(|id| !id.is_empty())
            .ok_or(DomainError::MissingParameter("Posts ID"))?;

        if self.store.delete(id).await? {
            tracing::info!(post_id = %id, "Post deleted");
            Ok(DELETED_MESSAGE)
        } else {
            tracing::info!(post_id = %id, "Delete target does not exist");
            Err(DomainError::NotFound { id: id.to_string() })
        }
    }

    /// Return up to `limit` posts from a single bounded scan, in store order.
    pub async fn list(&self, limit: usize) -> Result<Vec<Post>, DomainError> {
        let posts = self.store.scan(Some(limit)).await?;
        tracing::debug!(limit, returned = posts.len(), "Posts listed");
        Ok(posts)
    }
}

/// Parse the `limit` query parameter, falling back to [`DEFAULT_LIST_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> Result<usize, DomainError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LIST_LIMIT);
    };

    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(DomainError::InvalidParameter {
            name: "limit",
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::domain::PostFields;

    /// Ordered map fake - enough store behaviour for the service rules.
    #[derive(Default)]
    struct FakeStore {
        posts: Mutex<BTreeMap<String, Post>>,
    }

    impl FakeStore {
        fn snapshot(&self) -> BTreeMap<String, Post> {
            self.posts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PostStore for FakeStore {
        async fn put(&self, post: &Post) -> Result<(), StoreError> {
            self.posts
                .lock()
                .unwrap()
                .insert(post.id.clone(), post.clone());
            Ok(())
        }

        async fn get(&self, id: &str) -> Result<Option<Post>, StoreError> {
            Ok(self.posts.lock().unwrap().get(id).cloned())
        }

        async fn update(
            &self,
            id: &str,
            fields: &PostFields,
            require_exists: bool,
        ) -> Result<(), StoreError> {
            let mut posts = self.posts.lock().unwrap();
            if require_exists && !posts.contains_key(id) {
                return Err(StoreError::ConditionFailed);
            }
            posts.insert(id.to_string(), Post::with_id(id, fields.clone()));
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<bool, StoreError> {
            Ok(self.posts.lock().unwrap().remove(id).is_some())
        }

        async fn scan(&self, limit: Option<usize>) -> Result<Vec<Post>, StoreError> {
            let posts = self.posts.lock().unwrap();
            let take = limit.unwrap_or(usize::MAX);
            Ok(posts.values().take(take).cloned().collect())
        }
    }

    fn service() -> (PostService, Arc<FakeStore>) {
        let store = Arc::new(FakeStore::default());
        (PostService::new(store.clone()), store)
    }

    fn body() -> String {
        json!({"title": "t", "body": "b", "category": "c", "likes": 1, "tags": ["x"]}).to_string()
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let (service, store) = service();

        let a = service.create(Some(&body())).await.unwrap();
        let b = service.create(Some(&body())).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.fields, b.fields);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[tokio::test]
    async fn test_create_invalid_writes_nothing() {
        let (service, store) = service();

        let err = service.create(Some(r#"{"title": "t"}"#)).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(ref e) if e.len() == 4));
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_and_rereads() {
        let (service, _store) = service();
        let created = service.create(Some(&body())).await.unwrap();

        let update = json!({
            "id": created.id,
            "title": "new",
            "body": "b2",
            "category": "c2",
            "likes": 5,
            "tags": ["a"]
        });
        let updated = service.update(Some(&update.to_string())).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields.title, "new");
        assert_eq!(updated.fields.likes, 5);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found_and_store_unchanged() {
        let (service, store) = service();
        service.create(Some(&body())).await.unwrap();
        let before = store.snapshot();

        let update = json!({
            "id": "X",
            "title": "new",
            "body": "b2",
            "category": "c2",
            "likes": 5,
            "tags": ["a"]
        });
        let err = service.update(Some(&update.to_string())).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { ref id } if id == "X"));
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_delete() {
        let (service, store) = service();
        let created = service.create(Some(&body())).await.unwrap();

        assert_eq!(service.delete(Some(&created.id)).await.unwrap(), "Item Deleted");
        assert!(store.snapshot().is_empty());

        let err = service.delete(Some(&created.id)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_without_id() {
        let (service, _store) = service();

        for id in [None, Some("")] {
            let err = service.delete(id).await.unwrap_err();
            assert!(matches!(err, DomainError::MissingParameter("Posts ID")));
        }
    }

    #[tokio::test]
    async fn test_list_is_bounded() {
        let (service, _store) = service();
        for _ in 0..6 {
            service.create(Some(&body())).await.unwrap();
        }

        let default_limit = parse_limit(None).unwrap();
        assert_eq!(service.list(default_limit).await.unwrap().len(), 4);
        assert_eq!(service.list(2).await.unwrap().len(), 2);
        assert_eq!(service.list(10).await.unwrap().len(), 6);
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None).unwrap(), DEFAULT_LIST_LIMIT);
        assert_eq!(parse_limit(Some("7")).unwrap(), 7);
        for raw in ["0", "-1", "ten", ""] {
            assert!(matches!(
                parse_limit(Some(raw)),
                Err(DomainError::InvalidParameter { name: "limit", .. })
            ));
        }
    }
}
