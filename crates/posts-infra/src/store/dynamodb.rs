//! DynamoDB post store.
//!
//! Posts live in a single table with `id` (string) as the partition key.
//! Items are converted with `serde_dynamo`; `likes` is stored as a number
//! and `tags` as a list of strings.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, meta::region::RegionProviderChain};
use aws_sdk_dynamodb::{
    Client,
    config::Region,
    error::{DisplayErrorContext, SdkError},
    operation::update_item::UpdateItemError::ConditionalCheckFailedException,
    types::{AttributeValue, ReturnValue},
};
use serde::{Deserialize, Serialize};

use posts_core::domain::{Post, PostFields};
use posts_core::error::StoreError;
use posts_core::ports::PostStore;

use super::StoreConfig;

type Item = HashMap<String, AttributeValue>;

const UPDATE_EXPRESSION: &str =
    "SET #title = :title, #body = :body, #category = :category, #likes = :likes, #tags = :tags";

/// Table row layout.
#[derive(Debug, Serialize, Deserialize)]
struct PostItem {
    id: String,
    title: String,
    body: String,
    category: String,
    likes: u64,
    tags: Vec<String>,
}

impl From<&Post> for PostItem {
    fn from(post: &Post) -> Self {
        let fields = post.fields.clone();
        Self {
            id: post.id.clone(),
            title: fields.title,
            body: fields.body,
            category: fields.category,
            likes: fields.likes,
            tags: fields.tags,
        }
    }
}

impl From<PostItem> for Post {
    fn from(item: PostItem) -> Self {
        Post::with_id(
            item.id,
            PostFields {
                title: item.title,
                body: item.body,
                category: item.category,
                likes: item.likes,
                tags: item.tags,
            },
        )
    }
}

fn to_item(post: &Post) -> Result<Item, StoreError> {
    serde_dynamo::to_item(PostItem::from(post)).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn from_item(item: Item) -> Result<Post, StoreError> {
    let item: PostItem =
        serde_dynamo::from_item(item).map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(item.into())
}

fn key(id: &str) -> AttributeValue {
    AttributeValue::S(id.to_string())
}

fn query_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let err = DisplayErrorContext(err);
    tracing::error!(operation, error = %err, "DynamoDB request failed");
    StoreError::Query(format!("{operation}: {err}"))
}

/// Post store backed by a DynamoDB table.
pub struct DynamoPostStore {
    client: Client,
    table: String,
}

impl DynamoPostStore {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// Build a client from the ambient AWS configuration (credentials chain,
    /// profile) with the configured region and optional endpoint override.
    pub async fn connect(config: &StoreConfig) -> Self {
        let region = RegionProviderChain::first_try(Region::new(config.region.clone()))
            .or_default_provider();
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&shared);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(Client::from_conf(builder.build()), config.table.clone())
    }
}

#[async_trait]
impl PostStore for DynamoPostStore {
    async fn put(&self, post: &Post) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(to_item(post)?))
            .send()
            .await
            .map_err(|e| query_error("put_item", e))?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key("id", key(id))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| query_error("get_item", e))?;

        output.item.map(from_item).transpose()
    }

    async fn update(
        &self,
        id: &str,
        fields: &PostFields,
        require_exists: bool,
    ) -> Result<(), StoreError> {
        let tags = fields
            .tags
            .iter()
            .map(|tag| AttributeValue::S(tag.clone()))
            .collect();

        let mut request = self
            .client
            .update_item()
            .table_name(&self.table)
            .key("id", key(id))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names("#title", "title")
            .expression_attribute_names("#body", "body")
            .expression_attribute_names("#category", "category")
            .expression_attribute_names("#likes", "likes")
            .expression_attribute_names("#tags", "tags")
            .expression_attribute_values(":title", AttributeValue::S(fields.title.clone()))
            .expression_attribute_values(":body", AttributeValue::S(fields.body.clone()))
            .expression_attribute_values(":category", AttributeValue::S(fields.category.clone()))
            .expression_attribute_values(":likes", AttributeValue::N(fields.likes.to_string()))
            .expression_attribute_values(":tags", AttributeValue::L(tags));

        if require_exists {
            request = request.condition_expression("attribute_exists(id)");
        }

        match request.send().await {
            Ok(_) => Ok(()),
            Err(err)
                if matches!(err, SdkError::ServiceError(ref inner)
                    if matches!(inner.err(), ConditionalCheckFailedException(_))) =>
            {
                Err(StoreError::ConditionFailed)
            }
            Err(err) => Err(query_error("update_item", err)),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let output = self
            .client
            .delete_item()
            .table_name(&self.table)
            .key("id", key(id))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| query_error("delete_item", e))?;

        Ok(output.attributes.is_some_and(|old| !old.is_empty()))
    }

    async fn scan(&self, limit: Option<usize>) -> Result<Vec<Post>, StoreError> {
        if let Some(limit) = limit {
            let output = self
                .client
                .scan()
                .table_name(&self.table)
                .limit(i32::try_from(limit).unwrap_or(i32::MAX))
                .send()
                .await
                .map_err(|e| query_error("scan", e))?;

            return output
                .items
                .unwrap_or_default()
                .into_iter()
                .map(from_item)
                .collect();
        }

        let mut posts = Vec::new();
        let mut start_key: Option<Item> = None;
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| query_error("scan", e))?;

            for item in output.items.unwrap_or_default() {
                posts.push(from_item(item)?);
            }

            match output.last_evaluated_key {
                Some(last) if !last.is_empty() => start_key = Some(last),
                _ => break,
            }
        }

        Ok(posts)
    }
}
