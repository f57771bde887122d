use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::watch;

use super::{without_id, Collection, Feed, RecordStore, StoreError, StoredDocument};

/// In-process store with the same ordering and feed semantics as Postgres.
/// The `fail_*` switches make every matching call return `Unavailable`.
pub struct MemoryRecordStore {
    records: Mutex<HashMap<Collection, Vec<StoredDocument>>>,
    feeds: HashMap<Collection, watch::Sender<Vec<StoredDocument>>>,
    next_id: AtomicU64,
    pub fail_subscribe: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            feeds: Collection::ALL
                .into_iter()
                .map(|c| (c, watch::Sender::new(Vec::new())))
                .collect(),
            next_id: AtomicU64::new(1),
            fail_subscribe: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }
}

fn order_key(doc: &StoredDocument, field: &str) -> Option<DateTime<Utc>> {
    doc.fields
        .get(field)?
        .as_str()?
        .parse::<DateTime<Utc>>()
        .ok()
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_writes_failing() -> Self {
        let store = Self::default();
        store.fail_writes.store(true, Ordering::SeqCst);
        store
    }

    pub fn with_subscribe_failing() -> Self {
        let store = Self::default();
        store.fail_subscribe.store(true, Ordering::SeqCst);
        store
    }

    /// Current ordered contents of a collection.
    pub fn snapshot(&self, collection: Collection) -> Vec<StoredDocument> {
        self.records
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    fn publish(&self, collection: Collection, docs: &mut Vec<StoredDocument>) {
        let field = collection.order_field();
        docs.sort_by(|a, b| order_key(b, field).cmp(&order_key(a, field)));
        self.feeds[&collection].send_replace(docs.clone());
    }

    fn check_writes(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn subscribe(&self, collection: Collection) -> Result<Feed, StoreError> {
        if self.fail_subscribe.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        Ok(self.feeds[&collection].subscribe())
    }

    async fn insert(&self, collection: Collection, fields: Value) -> Result<String, StoreError> {
        self.check_writes()?;
        let fields = without_id(fields)?;
        let id = format!("mem-{}", self.next_id.fetch_add(1, Ordering::SeqCst));

        let mut records = self.records.lock().unwrap();
        let docs = records.entry(collection).or_default();
        docs.push(StoredDocument {
            id: id.clone(),
            fields,
        });
        self.publish(collection, docs);
        Ok(id)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Value,
    ) -> Result<(), StoreError> {
        self.check_writes()?;
        let fields = without_id(fields)?;

        let mut records = self.records.lock().unwrap();
        let docs = records.entry(collection).or_default();
        let doc = docs
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.name(),
                id: id.to_string(),
            })?;
        if let (Some(target), Value::Object(patch)) = (doc.fields.as_object_mut(), fields) {
            target.extend(patch);
        }
        self.publish(collection, docs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_feed_orders_newest_first() {
        let store = MemoryRecordStore::new();
        let feed = store.subscribe(Collection::Jobs).await.unwrap();
        store
            .insert(Collection::Jobs, json!({"title": "old", "postedDate": "2024-01-01T00:00:00Z"}))
            .await
            .unwrap();
        store
            .insert(Collection::Jobs, json!({"title": "new", "postedDate": "2025-01-01T00:00:00Z"}))
            .await
            .unwrap();

        let titles: Vec<_> = feed
            .borrow()
            .iter()
            .map(|d| d.fields["title"].clone())
            .collect();
        assert_eq!(titles, vec![json!("new"), json!("old")]);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = MemoryRecordStore::new();
        let id = store
            .insert(Collection::Candidates, json!({"name": "Grace", "status": "PENDING"}))
            .await
            .unwrap();
        store
            .update(Collection::Candidates, &id, json!({"id": "ignored", "status": "VERIFIED"}))
            .await
            .unwrap();

        let docs = store.snapshot(Collection::Candidates);
        assert_eq!(docs[0].id, id);
        assert_eq!(docs[0].fields, json!({"name": "Grace", "status": "VERIFIED"}));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryRecordStore::new();
        let err = store
            .update(Collection::Candidates, "missing", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
