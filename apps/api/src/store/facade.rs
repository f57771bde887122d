use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::demo::{demo_candidates, demo_jobs};
use super::{without_id, Collection, Feed, RecordStore, StoreError, StoredDocument};
use crate::models::{Candidate, Job};

/// Where the records currently visible in a collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSource {
    Live,
    Demo,
}

/// A record type the facade can hold.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn demo() -> Vec<Self>;
}

impl Record for Candidate {
    const COLLECTION: Collection = Collection::Candidates;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn demo() -> Vec<Self> {
        demo_candidates()
    }
}

impl Record for Job {
    const COLLECTION: Collection = Collection::Jobs;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn demo() -> Vec<Self> {
        demo_jobs()
    }
}

#[derive(Debug, Clone)]
pub struct CollectionView<T> {
    pub source: DataSource,
    pub records: Vec<T>,
}

impl<T> CollectionView<T> {
    pub fn is_demo(&self) -> bool {
        self.source == DataSource::Demo
    }
}

/// What a local write does when the view has no record with its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Missing {
    Prepend,
    Skip,
}

struct LiveCollection<T> {
    view: RwLock<CollectionView<T>>,
    feed: OnceLock<Feed>,
}

fn decode<T: Record>(doc: StoredDocument) -> Option<T> {
    let StoredDocument { id, mut fields } = doc;
    if let Value::Object(map) = &mut fields {
        map.insert("id".to_string(), Value::String(id.clone()));
    }
    match serde_json::from_value::<T>(fields) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Skipping malformed {} record {id}: {e}", T::COLLECTION.name());
            None
        }
    }
}

fn encode<T: Record>(record: &T) -> Result<Value, StoreError> {
    let fields = serde_json::to_value(record).map_err(|_| StoreError::InvalidFields)?;
    without_id(fields)
}

impl<T: Record> LiveCollection<T> {
    fn new() -> Self {
        Self {
            view: RwLock::new(CollectionView {
                source: DataSource::Demo,
                records: T::demo(),
            }),
            feed: OnceLock::new(),
        }
    }

    async fn snapshot(&self) -> CollectionView<T> {
        self.view.read().await.clone()
    }

    /// Replaces the whole view. An empty snapshot means "show demo data".
    async fn apply_snapshot(&self, docs: Vec<StoredDocument>) {
        let next = if docs.is_empty() {
            CollectionView {
                source: DataSource::Demo,
                records: T::demo(),
            }
        } else {
            CollectionView {
                source: DataSource::Live,
                records: docs.into_iter().filter_map(decode::<T>).collect(),
            }
        };
        debug!(
            "{} view: {:?} with {} record(s)",
            T::COLLECTION.name(),
            next.source,
            next.records.len()
        );
        *self.view.write().await = next;
    }

    /// Replaces the record with the same id. Creates prepend when there is
    /// none; updates never add a record.
    async fn apply_local(&self, record: T, missing: Missing) {
        let mut view = self.view.write().await;
        match view.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record,
            None if missing == Missing::Prepend => view.records.insert(0, record),
            None => debug!(
                "{} record {} not in view; local update dropped",
                T::COLLECTION.name(),
                record.id()
            ),
        }
    }

    /// Reflects a write the store accepted. The latest feed snapshot is the
    /// base so demo records never mix into a live view.
    async fn apply_written(&self, record: T, missing: Missing) {
        let Some(feed) = self.feed.get() else {
            self.apply_local(record, missing).await;
            return;
        };
        let fields = match encode(&record) {
            Ok(fields) => fields,
            Err(_) => {
                self.apply_local(record, missing).await;
                return;
            }
        };

        let mut docs = feed.borrow().clone();
        match docs.iter_mut().find(|d| d.id == record.id()) {
            Some(doc) => doc.fields = fields,
            None if missing == Missing::Prepend => docs.insert(
                0,
                StoredDocument {
                    id: record.id().to_string(),
                    fields,
                },
            ),
            // The feed brings the record in once the store publishes it.
            None => {}
        }
        self.apply_snapshot(docs).await;
    }

    async fn attach(self: &Arc<Self>, store: &dyn RecordStore) {
        let collection = T::COLLECTION.name();
        let mut feed = match store.subscribe(T::COLLECTION).await {
            Ok(feed) => feed,
            Err(e) => {
                warn!("Subscription to {collection} failed ({e}); serving demo data");
                self.apply_snapshot(Vec::new()).await;
                return;
            }
        };

        let initial = feed.borrow_and_update().clone();
        info!("Subscribed to {collection}: {} live record(s)", initial.len());
        self.apply_snapshot(initial).await;
        let _ = self.feed.set(feed.clone());

        let this = Arc::clone(self);
        tokio::spawn(async move {
            while feed.changed().await.is_ok() {
                let docs = feed.borrow_and_update().clone();
                this.apply_snapshot(docs).await;
            }
            debug!("{collection} feed closed");
        });
    }

    async fn create(&self, store: &dyn RecordStore, mut record: T) -> T {
        if record.id().is_empty() {
            record.set_id(Uuid::new_v4().to_string());
        }

        let written = match encode(&record) {
            Ok(fields) => store.insert(T::COLLECTION, fields).await,
            Err(e) => Err(e),
        };
        match written {
            Ok(id) => {
                record.set_id(id);
                self.apply_written(record.clone(), Missing::Prepend).await;
            }
            Err(e) => {
                warn!(
                    "Saving {} record {} failed ({e}); kept locally",
                    T::COLLECTION.name(),
                    record.id()
                );
                self.apply_local(record.clone(), Missing::Prepend).await;
            }
        }
        record
    }

    async fn update(&self, store: &dyn RecordStore, record: T) {
        let written = match encode(&record) {
            Ok(fields) => store.update(T::COLLECTION, record.id(), fields).await,
            Err(e) => Err(e),
        };
        match written {
            Ok(()) => self.apply_written(record, Missing::Skip).await,
            Err(e) => {
                warn!(
                    "Updating {} record {} failed ({e}); applied locally",
                    T::COLLECTION.name(),
                    record.id()
                );
                self.apply_local(record, Missing::Skip).await;
            }
        }
    }
}

/// What handlers read and write candidates and jobs through.
///
/// Reads are served from an in-memory view kept current by the store's feed.
/// Store failures are logged and absorbed: reads fall back to demo data and
/// writes are applied to the local view only.
pub struct RecordFacade {
    store: Arc<dyn RecordStore>,
    candidates: Arc<LiveCollection<Candidate>>,
    jobs: Arc<LiveCollection<Job>>,
    ready: AtomicBool,
}

impl RecordFacade {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            candidates: Arc::new(LiveCollection::new()),
            jobs: Arc::new(LiveCollection::new()),
            ready: AtomicBool::new(false),
        }
    }

    /// Subscribes both collections. Always leaves the facade ready.
    pub async fn attach(&self) {
        self.candidates.attach(self.store.as_ref()).await;
        self.jobs.attach(self.store.as_ref()).await;
        self.ready.store(true, Ordering::SeqCst);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub async fn candidates(&self) -> CollectionView<Candidate> {
        self.candidates.snapshot().await
    }

    pub async fn jobs(&self) -> CollectionView<Job> {
        self.jobs.snapshot().await
    }

    pub async fn candidate(&self, id: &str) -> Option<Candidate> {
        let view = self.candidates.view.read().await;
        view.records.iter().find(|c| c.id == id).cloned()
    }

    pub async fn job(&self, id: &str) -> Option<Job> {
        let view = self.jobs.view.read().await;
        view.records.iter().find(|j| j.id == id).cloned()
    }

    /// Returns the record as stored, carrying the store id when the write succeeded.
    pub async fn create_candidate(&self, candidate: Candidate) -> Candidate {
        self.candidates.create(self.store.as_ref(), candidate).await
    }

    pub async fn update_candidate(&self, candidate: Candidate) {
        self.candidates.update(self.store.as_ref(), candidate).await
    }

    pub async fn create_job(&self, job: Job) -> Job {
        self.jobs.create(self.store.as_ref(), job).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateStatus, RiskLevel};
    use crate::store::memory::MemoryRecordStore;
    use crate::store::OfflineStore;
    use crate::testing::{candidate, job, with_risk};

    async fn attached(store: Arc<dyn RecordStore>) -> RecordFacade {
        let facade = RecordFacade::new(store);
        facade.attach().await;
        facade
    }

    fn names(view: &CollectionView<Candidate>) -> Vec<&str> {
        view.records.iter().map(|c| c.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_empty_subscription_shows_exact_demo_dataset() {
        let facade = attached(Arc::new(MemoryRecordStore::new())).await;
        assert!(facade.is_ready());

        let view = facade.candidates().await;
        assert_eq!(view.source, DataSource::Demo);
        assert_eq!(
            names(&view),
            vec!["John Baptist Okello", "Sarah Namukasa", "David K. Muwonge"]
        );
        let statuses: Vec<_> = view.records.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![
                CandidateStatus::Verified,
                CandidateStatus::Rejected,
                CandidateStatus::Pending
            ]
        );
        assert_eq!(facade.jobs().await.records.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_subscription_is_still_ready() {
        let facade = attached(Arc::new(MemoryRecordStore::with_subscribe_failing())).await;
        assert!(facade.is_ready());
        assert!(facade.candidates().await.is_demo());
        assert!(facade.jobs().await.is_demo());
    }

    #[tokio::test]
    async fn test_created_candidate_replaces_demo_with_live() {
        let store = Arc::new(MemoryRecordStore::new());
        let facade = attached(store.clone()).await;

        let mut draft = candidate("Grace Atim", CandidateStatus::Verified, 0);
        draft.id = "client-side".into();
        let saved = facade.create_candidate(draft).await;

        assert!(saved.id.starts_with("mem-"));
        let view = facade.candidates().await;
        assert_eq!(view.source, DataSource::Live);
        assert_eq!(names(&view), vec!["Grace Atim"]);
        assert_eq!(store.snapshot(Collection::Candidates).len(), 1);
    }

    #[tokio::test]
    async fn test_failed_create_prepends_locally() {
        let facade = attached(Arc::new(MemoryRecordStore::with_writes_failing())).await;

        let saved = facade
            .create_candidate(candidate("Grace Atim", CandidateStatus::Pending, 0))
            .await;

        assert!(!saved.id.is_empty());
        let view = facade.candidates().await;
        assert_eq!(view.records[0].name, "Grace Atim");
        assert_eq!(view.records.len(), 4);
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let store = Arc::new(MemoryRecordStore::new());
        let facade = attached(store.clone()).await;
        let saved = facade
            .create_candidate(with_risk(
                candidate("Grace Atim", CandidateStatus::Pending, 0),
                RiskLevel::Low,
            ))
            .await;

        let mut changed = saved.clone();
        changed.status = CandidateStatus::Verified;
        facade.update_candidate(changed.clone()).await;
        let once = facade.candidates().await.records;
        let stored_once = store.snapshot(Collection::Candidates);

        facade.update_candidate(changed.clone()).await;
        assert_eq!(facade.candidates().await.records, once);
        assert_eq!(store.snapshot(Collection::Candidates), stored_once);
        assert_eq!(facade.candidate(&saved.id).await, Some(changed));
    }

    #[tokio::test]
    async fn test_failed_update_applies_locally() {
        let facade = attached(Arc::new(OfflineStore)).await;
        let mut sarah = facade.candidate("demo-2").await.unwrap();
        sarah.status = CandidateStatus::Verified;

        facade.update_candidate(sarah).await;

        let view = facade.candidates().await;
        assert_eq!(view.records.len(), 3);
        assert_eq!(view.records[1].status, CandidateStatus::Verified);
    }

    #[tokio::test]
    async fn test_failed_update_of_unknown_record_adds_nothing() {
        let facade = attached(Arc::new(OfflineStore)).await;
        let mut stranger = candidate("Grace Atim", CandidateStatus::Verified, 0);
        stranger.id = "not-in-view".into();

        facade.update_candidate(stranger).await;

        let view = facade.candidates().await;
        assert_eq!(
            names(&view),
            vec!["John Baptist Okello", "Sarah Namukasa", "David K. Muwonge"]
        );
        assert_eq!(facade.candidate("not-in-view").await, None);
    }

    #[tokio::test]
    async fn test_feed_changes_reach_the_view() {
        let store = Arc::new(MemoryRecordStore::new());
        let facade = attached(store.clone()).await;

        store
            .insert(
                Collection::Jobs,
                encode(&job("Rig Welder", "3 years offshore")).unwrap(),
            )
            .await
            .unwrap();

        for _ in 0..50 {
            if !facade.jobs().await.is_demo() {
                break;
            }
            tokio::task::yield_now().await;
        }
        let view = facade.jobs().await;
        assert_eq!(view.source, DataSource::Live);
        assert_eq!(view.records[0].title, "Rig Welder");
    }
}
