//! # Posts Infrastructure
//!
//! Concrete implementations of the ports defined in `posts-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `dynamodb` - DynamoDB post store via the AWS SDK

pub mod store;

// Re-exports
pub use store::{InMemoryPostStore, StoreBackend, StoreConfig, connect};

#[cfg(feature = "dynamodb")]
pub use store::DynamoPostStore;
