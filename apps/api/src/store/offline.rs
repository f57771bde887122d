use async_trait::async_trait;
use serde_json::Value;

use super::{Collection, Feed, RecordStore, StoreError};

/// Backend used when no database is configured or reachable.
/// Every call fails, so the facade serves demo data and keeps writes local.
pub struct OfflineStore;

#[async_trait]
impl RecordStore for OfflineStore {
    async fn subscribe(&self, _collection: Collection) -> Result<Feed, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn insert(&self, _collection: Collection, _fields: Value) -> Result<String, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn update(
        &self,
        _collection: Collection,
        _id: &str,
        _fields: Value,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
