//! Post store implementations - DynamoDB and in-memory fallback.

mod config;
mod memory;

#[cfg(feature = "dynamodb")]
mod dynamodb;

pub use config::{StoreBackend, StoreConfig, UnknownBackend, connect};
pub use memory::InMemoryPostStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoPostStore;
