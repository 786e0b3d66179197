use std::env;
use std::str::FromStr;
use std::sync::Arc;

use posts_core::error::StoreError;
use posts_core::ports::PostStore;

use super::InMemoryPostStore;

#[cfg(feature = "dynamodb")]
use super::DynamoPostStore;

/// Which store implementation to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    DynamoDb,
}

impl Default for StoreBackend {
    fn default() -> Self {
        if cfg!(feature = "dynamodb") {
            Self::DynamoDb
        } else {
            Self::Memory
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown store backend '{0}' (expected 'memory' or 'dynamodb')")]
pub struct UnknownBackend(String);

impl FromStr for StoreBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "dynamodb" | "dynamo" => Ok(Self::DynamoDb),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}

/// Configuration for the post store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// DynamoDB table holding the posts, keyed by `id`.
    pub table: String,
    pub region: String,
    /// Endpoint override, e.g. `http://localhost:8000` for DynamoDB Local.
    pub endpoint: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            table: "posts".to_string(),
            region: "us-east-1".to_string(),
            endpoint: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, UnknownBackend> {
        let defaults = Self::default();

        let backend = match env::var("POSTS_STORE") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.backend,
        };

        Ok(Self {
            backend,
            table: env::var("POSTS_TABLE").unwrap_or(defaults.table),
            region: env::var("AWS_REGION").unwrap_or(defaults.region),
            endpoint: env::var("DYNAMODB_ENDPOINT").ok().filter(|e| !e.is_empty()),
        })
    }
}

/// Build the configured store. Called once per process.
pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn PostStore>, StoreError> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory post store - data is lost on restart");
            Ok(Arc::new(InMemoryPostStore::new()))
        }
        #[cfg(feature = "dynamodb")]
        StoreBackend::DynamoDb => {
            let store = DynamoPostStore::connect(config).await;
            tracing::info!(
                table = %config.table,
                region = %config.region,
                endpoint = ?config.endpoint,
                "DynamoDB post store ready"
            );
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "dynamodb"))]
        StoreBackend::DynamoDb => Err(StoreError::Connection(
            "built without the dynamodb feature".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend() {
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!("DynamoDB".parse::<StoreBackend>().unwrap(), StoreBackend::DynamoDb);
        assert!("postgres".parse::<StoreBackend>().is_err());
    }

    #[tokio::test]
    async fn test_connect_memory() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
            ..StoreConfig::default()
        };
        let store = connect(&config).await.unwrap();
        assert!(store.scan(None).await.unwrap().is_empty());
    }
}
