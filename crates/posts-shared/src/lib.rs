//! # Posts Shared
//!
//! Wire types shared by every entry point of the posts service: the
//! API Gateway style request event and the response envelope.

pub mod event;
pub mod response;

pub use event::PostsEvent;
pub use response::{ErrorResponse, MessageResponse, ProxyResponse};
