//! # Posts Lambda
//!
//! AWS Lambda entry point for API Gateway proxy events.

use lambda_runtime::{Error, LambdaEvent, run, service_fn};

use posts_api::config::AppConfig;
use posts_api::handler::dispatch;
use posts_api::state::AppState;
use posts_api::telemetry::init_telemetry;
use posts_shared::{PostsEvent, ProxyResponse};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AppConfig::from_env()?;
    init_telemetry(&config.telemetry);

    // Store client is built once per cold start and reused by every invocation.
    let state = AppState::new(&config.store).await?;

    run(service_fn(|event: LambdaEvent<PostsEvent>| {
        let state = state.clone();
        async move {
            tracing::debug!(request_id = %event.context.request_id, "Invocation received");
            Ok::<ProxyResponse, Error>(dispatch(&state.posts, &event.payload).await)
        }
    }))
    .await
}
