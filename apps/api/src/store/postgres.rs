use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgListener;
use sqlx::PgPool;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{without_id, Collection, Feed, RecordStore, StoreError, StoredDocument};

/// Row shape shared by every collection table.
#[derive(Debug, sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    doc: Value,
}

/// Postgres-backed store. Each collection is a JSONB table; a trigger
/// publishes `<collection>_changed` and a listener task reloads that
/// collection into its watch channel.
pub struct PgRecordStore {
    inner: Arc<Inner>,
}

struct Inner {
    pool: PgPool,
    feeds: HashMap<Collection, watch::Sender<Vec<StoredDocument>>>,
}

impl PgRecordStore {
    /// Applies pending migrations and starts the change listener.
    pub async fn start(pool: PgPool) -> Result<Self, StoreError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Record store migrations applied");

        let feeds = Collection::ALL
            .into_iter()
            .map(|c| (c, watch::Sender::new(Vec::new())))
            .collect();
        let inner = Arc::new(Inner { pool, feeds });

        tokio::spawn(run_listener(inner.clone()));
        Ok(Self { inner })
    }
}

fn channel_name(collection: Collection) -> String {
    format!("{}_changed", collection.name())
}

fn collection_for_channel(channel: &str) -> Option<Collection> {
    Collection::ALL
        .into_iter()
        .find(|c| channel_name(*c) == channel)
}

impl Inner {
    fn feed(&self, collection: Collection) -> &watch::Sender<Vec<StoredDocument>> {
        // Built from Collection::ALL in `start`, so every key is present.
        &self.feeds[&collection]
    }

    async fn load(&self, collection: Collection) -> Result<Vec<StoredDocument>, StoreError> {
        let sql = format!(
            "SELECT id, doc FROM {table} ORDER BY (doc->>'{order}')::timestamptz DESC NULLS LAST",
            table = collection.name(),
            order = collection.order_field(),
        );
        let rows = sqlx::query_as::<_, DocumentRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| StoredDocument {
                id: row.id.to_string(),
                fields: row.doc,
            })
            .collect())
    }

    async fn refresh(&self, collection: Collection) -> Result<(), StoreError> {
        let docs = self.load(collection).await?;
        debug!("Reloaded {} {} record(s)", docs.len(), collection.name());
        self.feed(collection).send_replace(docs);
        Ok(())
    }
}

async fn run_listener(inner: Arc<Inner>) {
    loop {
        if let Err(e) = listen(&inner).await {
            warn!("Record store listener failed: {e}; reconnecting");
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }
}

async fn listen(inner: &Inner) -> Result<(), StoreError> {
    let mut listener = PgListener::connect_with(&inner.pool).await?;
    let channels: Vec<String> = Collection::ALL.into_iter().map(channel_name).collect();
    listener
        .listen_all(channels.iter().map(String::as_str))
        .await?;

    // Changes made while disconnected would otherwise be missed.
    for collection in Collection::ALL {
        inner.refresh(collection).await?;
    }

    loop {
        let notification = listener.recv().await?;
        let Some(collection) = collection_for_channel(notification.channel()) else {
            continue;
        };
        if let Err(e) = inner.refresh(collection).await {
            warn!("Failed to reload {}: {e}", collection.name());
        }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn subscribe(&self, collection: Collection) -> Result<Feed, StoreError> {
        self.inner.refresh(collection).await?;
        Ok(self.inner.feed(collection).subscribe())
    }

    async fn insert(&self, collection: Collection, fields: Value) -> Result<String, StoreError> {
        let fields = without_id(fields)?;
        let sql = format!("INSERT INTO {} (doc) VALUES ($1) RETURNING id", collection.name());
        let id: Uuid = sqlx::query_scalar(&sql)
            .bind(&fields)
            .fetch_one(&self.inner.pool)
            .await?;

        info!("Inserted {} record {id}", collection.name());
        Ok(id.to_string())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Value,
    ) -> Result<(), StoreError> {
        let not_found = || StoreError::NotFound {
            collection: collection.name(),
            id: id.to_string(),
        };
        let uuid = Uuid::parse_str(id).map_err(|_| not_found())?;
        let fields = without_id(fields)?;

        let sql = format!("UPDATE {} SET doc = doc || $2 WHERE id = $1", collection.name());
        let result = sqlx::query(&sql)
            .bind(uuid)
            .bind(&fields)
            .execute(&self.inner.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        debug!("Updated {} record {id}", collection.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_map_back_to_collections() {
        assert_eq!(channel_name(Collection::Jobs), "jobs_changed");
        assert_eq!(
            collection_for_channel("candidates_changed"),
            Some(Collection::Candidates)
        );
        assert_eq!(collection_for_channel("users_changed"), None);
    }
}
