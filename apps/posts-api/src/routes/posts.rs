//! `/posts` - adapts plain HTTP requests to request events.

use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use posts_shared::{PostsEvent, ProxyResponse};

use crate::handler::dispatch;
use crate::state::AppState;

/// Any method on /posts.
pub async fn posts(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    body: String,
    state: web::Data<AppState>,
) -> HttpResponse {
    let query = query.into_inner();
    let event = PostsEvent {
        http_method: req.method().as_str().to_string(),
        body: (!body.is_empty()).then_some(body),
        query_string_parameters: (!query.is_empty()).then_some(query),
    };

    into_http(dispatch(&state.posts, &event).await)
}

fn into_http(response: ProxyResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = HttpResponse::build(status);
    for (name, value) in &response.headers {
        builder.insert_header((name.as_str(), value.as_str()));
    }
    builder.body(response.body)
}
