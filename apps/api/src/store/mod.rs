//! Candidate/job record store.
//!
//! `RecordStore` is the raw document-database capability: live snapshots per
//! collection plus insert and partial update. Handlers never talk to it
//! directly; they go through [`RecordFacade`], which keeps a local view,
//! falls back to demo data and absorbs store failures.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::watch;

pub mod demo;
pub mod facade;
#[cfg(test)]
pub mod memory;
pub mod offline;
pub mod postgres;

pub use facade::{DataSource, RecordFacade};
pub use offline::OfflineStore;
pub use postgres::PgRecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Candidates,
    Jobs,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Candidates, Collection::Jobs];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Candidates => "candidates",
            Collection::Jobs => "jobs",
        }
    }

    /// Timestamp field snapshots are ordered by, newest first.
    pub fn order_field(self) -> &'static str {
        match self {
            Collection::Candidates => "timestamp",
            Collection::Jobs => "postedDate",
        }
    }
}

/// One record as the store sees it: server id plus free-form fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Value,
}

/// Ordered snapshots of one collection, replaced wholesale on every change.
pub type Feed = watch::Receiver<Vec<StoredDocument>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store is unavailable")]
    Unavailable,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("no {collection} record with id {id}")]
    NotFound { collection: &'static str, id: String },

    #[error("record fields must be a JSON object")]
    InvalidFields,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn subscribe(&self, collection: Collection) -> Result<Feed, StoreError>;

    /// Returns the store-assigned id. Any `id` inside `fields` is ignored.
    async fn insert(&self, collection: Collection, fields: Value) -> Result<String, StoreError>;

    /// Merges `fields` into the record; absent keys keep their stored value.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Value,
    ) -> Result<(), StoreError>;
}

/// Drops the `id` key so it is never written as a field.
pub fn without_id(mut fields: Value) -> Result<Value, StoreError> {
    let map = fields.as_object_mut().ok_or(StoreError::InvalidFields)?;
    map.remove("id");
    Ok(fields)
}
