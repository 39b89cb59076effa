//! Portfolio store: the key-value repository every other module goes through.
//!
//! Keys are `portfolio-<id>`, values the serialized `ProfileRecord`.
//! `AppState` holds an `Arc<dyn PortfolioStore>`; the backend is picked at
//! startup from `REDIS_URL` and can be swapped without touching generation
//! or rendering.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ProfileRecord;

pub mod memory;
pub mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

const KEY_PREFIX: &str = "portfolio-";

/// Storage key for a portfolio identifier.
pub fn storage_key(id: &str) -> String {
    format!("{KEY_PREFIX}{id}")
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Key already exists: {0}")]
    AlreadyExists(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Stored value under '{key}' is not a valid profile record: {source}")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize profile record: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Exact-match lookup.
    async fn get(&self, id: &str) -> Result<Option<ProfileRecord>, StoreError>;

    /// Inserts a new record. Fails with `AlreadyExists` if the id is taken.
    async fn create(&self, id: &str, record: &ProfileRecord) -> Result<(), StoreError>;

    /// Overwrites whatever is stored under `id` (last write wins).
    async fn put(&self, id: &str, record: &ProfileRecord) -> Result<(), StoreError>;

    /// Removes the record. Returns whether anything was deleted.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Backend label for the health endpoint.
    fn backend(&self) -> &'static str;
}

pub(crate) fn encode(record: &ProfileRecord) -> Result<String, StoreError> {
    Ok(serde_json::to_string(record)?)
}

pub(crate) fn decode(key: &str, raw: &str) -> Result<ProfileRecord, StoreError> {
    serde_json::from_str(raw).map_err(|source| StoreError::Corrupted {
        key: key.to_string(),
        source,
    })
}
