//! # Posts API
//!
//! The request handler for the posts resource, shared by the Lambda function
//! and the local actix-web server.

pub mod config;
pub mod error;
pub mod handler;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use handler::dispatch;
pub use state::AppState;
