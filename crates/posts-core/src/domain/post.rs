use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The five content fields of a post - everything except the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFields {
    pub title: String,
    pub body: String,
    pub category: String,
    pub likes: u64,
    pub tags: Vec<String>,
}

/// Post entity - the single record kept in the store, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(flatten)]
    pub fields: PostFields,
}

impl Post {
    /// Create a new post with a freshly generated id.
    pub fn new(fields: PostFields) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            fields,
        }
    }

    /// Rebuild a post from an existing id, e.g. after reading it back.
    pub fn with_id(id: impl Into<String>, fields: PostFields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}
