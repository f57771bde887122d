use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::store::{OfflineStore, PgRecordStore, RecordStore};

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Picks the record store backend. Falls back to the offline store when no
/// database is configured or it cannot be reached.
pub async fn connect_record_store(database_url: Option<&str>) -> Arc<dyn RecordStore> {
    let Some(url) = database_url else {
        warn!("DATABASE_URL not set; running on demo data");
        return Arc::new(OfflineStore);
    };

    let pool = match create_pool(url).await {
        Ok(pool) => pool,
        Err(e) => {
            warn!("PostgreSQL unreachable ({e}); running on demo data");
            return Arc::new(OfflineStore);
        }
    };

    match PgRecordStore::start(pool).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!("Record store setup failed ({e}); running on demo data");
            Arc::new(OfflineStore)
        }
    }
}
