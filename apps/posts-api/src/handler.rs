//! Request handler - dispatches one event to a post operation.
//!
//! Every branch answers with the same envelope: a status code, a JSON
//! `Content-Type` header and a string body holding a JSON document.

use serde::Serialize;

use posts_core::PostService;
use posts_core::service::parse_limit;
use posts_shared::{MessageResponse, PostsEvent, ProxyResponse};

use crate::error::AppResult;

/// Reply for methods the handler does not serve.
pub const UNSUPPORTED_METHOD_MESSAGE: &str =
    "Could not understand the HTTP Method. Please Try again with CREATE, UPDATE, DELETE and GET";

/// Handle a single request event.
#[tracing::instrument(skip_all, fields(method = %event.http_method))]
pub async fn dispatch(posts: &PostService, event: &PostsEvent) -> ProxyResponse {
    let result = match event.http_method.as_str() {
        "GET" => list_posts(posts, event).await,
        "POST" => create_post(posts, event).await,
        "PUT" => update_post(posts, event).await,
        "DELETE" => delete_post(posts, event).await,
        other => {
            tracing::info!(method = other, "Unsupported HTTP method");
            ok(&MessageResponse::new(UNSUPPORTED_METHOD_MESSAGE))
        }
    };

    result.unwrap_or_else(|err| err.into_response())
}

fn ok<T: Serialize>(payload: &T) -> AppResult<ProxyResponse> {
    Ok(ProxyResponse::json(200, payload)?)
}

/// GET - bounded scan, `?limit=N` (default 4).
async fn list_posts(posts: &PostService, event: &PostsEvent) -> AppResult<ProxyResponse> {
    let limit = parse_limit(event.query("limit"))?;
    ok(&posts.list(limit).await?)
}

/// POST - create from the JSON body.
async fn create_post(posts: &PostService, event: &PostsEvent) -> AppResult<ProxyResponse> {
    ok(&posts.create(event.body.as_deref()).await?)
}

/// PUT - overwrite an existing post from the JSON body.
async fn update_post(posts: &PostService, event: &PostsEvent) -> AppResult<ProxyResponse> {
    ok(&posts.update(event.body.as_deref()).await?)
}

/// DELETE - `?id=...`.
async fn delete_post(posts: &PostService, event: &PostsEvent) -> AppResult<ProxyResponse> {
    let message = posts.delete(event.query("id")).await?;
    ok(&MessageResponse::new(message))
}
