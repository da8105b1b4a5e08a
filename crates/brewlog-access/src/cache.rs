//! Full-collection snapshot cache.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use brewlog_core::error::StoreError;
use brewlog_core::types::RecordId;
use brewlog_core::{DocumentStore, Error, Record, Result, normalize};

/// An immutable, point-in-time copy of every record in the collection.
#[derive(Debug)]
pub struct Snapshot {
    version: u64,
    fetched_at: DateTime<Utc>,
    records: Vec<Record>,
}

impl Snapshot {
    /// Monotonic version; a later snapshot always has a higher one.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// When the underlying fetch completed.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// All records, across all owners, in store order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by id regardless of owner.
    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Number of records across all owners.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the collection held no readable documents.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

type FetchResult = std::result::Result<Arc<Snapshot>, StoreError>;
type SharedFetch = Shared<BoxFuture<'static, FetchResult>>;

enum Slot {
    Empty,
    Filling { version: u64, fetch: SharedFetch },
    Ready(Arc<Snapshot>),
}

struct State {
    last_version: u64,
    slot: Slot,
}

/// Holds at most one [`Snapshot`] and fills it from the store on demand.
///
/// Concurrent callers that miss share a single in-flight `list_all`. A failed
/// fetch is reported to every one of them and leaves the cache empty. The
/// mutex only guards slot bookkeeping and is never held across the store call.
pub struct CacheCoordinator<S> {
    store: Arc<S>,
    state: Mutex<State>,
}

impl<S> CacheCoordinator<S>
where
    S: DocumentStore + 'static,
{
    /// Create an empty coordinator over `store`; nothing is fetched yet.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            state: Mutex::new(State {
                last_version: 0,
                slot: Slot::Empty,
            }),
        }
    }

    /// Return the current snapshot, fetching it on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreUnavailable`] if the fetch this call joined or
    /// started failed.
    pub async fn get(&self) -> Result<Arc<Snapshot>> {
        let (version, fetch) = {
            let mut state = self.state.lock().await;

            let joined = match &state.slot {
                Slot::Ready(snapshot) => {
                    debug!(version = snapshot.version, "Snapshot cache hit");
                    return Ok(snapshot.clone());
                }
                Slot::Filling { version, fetch } => Some((*version, fetch.clone())),
                Slot::Empty => None,
            };

            match joined {
                Some((version, fetch)) => {
                    debug!(version, "Joining in-flight snapshot fetch");
                    (version, fetch)
                }
                None => {
                    state.last_version += 1;
                    let version = state.last_version;
                    let fetch = Self::fetch(self.store.clone(), version).boxed().shared();
                    state.slot = Slot::Filling {
                        version,
                        fetch: fetch.clone(),
                    };
                    debug!(version, "Snapshot cache miss, fetching");
                    (version, fetch)
                }
            }
        };

        let result = fetch.await;
        self.settle(version, &result).await;
        result.map_err(Error::from)
    }

    /// Drop the current snapshot.
    ///
    /// A fetch already in flight still completes for the callers awaiting it,
    /// but its result is not installed.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        match std::mem::replace(&mut state.slot, Slot::Empty) {
            Slot::Ready(snapshot) => debug!(version = snapshot.version, "Invalidated snapshot"),
            Slot::Filling { version, .. } => {
                debug!(version, "Invalidated in-flight snapshot fetch")
            }
            Slot::Empty => {}
        }
    }

    /// The installed snapshot, without fetching.
    pub async fn peek(&self) -> Option<Arc<Snapshot>> {
        match &self.state.lock().await.slot {
            Slot::Ready(snapshot) => Some(snapshot.clone()),
            _ => None,
        }
    }

    /// Install or clear the slot once the fetch for `version` resolves.
    ///
    /// Every waiter calls this; only the first one whose fetch still owns the
    /// slot changes anything.
    async fn settle(&self, version: u64, result: &FetchResult) {
        let mut state = self.state.lock().await;
        let owns_slot = matches!(
            &state.slot,
            Slot::Filling { version: current, .. } if *current == version
        );
        if !owns_slot {
            return;
        }

        state.slot = match result {
            Ok(snapshot) => {
                debug!(version, records = snapshot.len(), "Installed snapshot");
                Slot::Ready(snapshot.clone())
            }
            Err(e) => {
                warn!(version, error = %e, "Snapshot fetch failed");
                Slot::Empty
            }
        };
    }

    async fn fetch(store: Arc<S>, version: u64) -> FetchResult {
        let documents = store.list_all().await.map_err(|e| match e {
            Error::StoreUnavailable(e) => e,
            other => StoreError::Unavailable {
                message: other.to_string(),
            },
        })?;

        let mut records = Vec::with_capacity(documents.len());
        for doc in &documents {
            match normalize(doc) {
                Ok(record) => records.push(record),
                Err(e) => warn!(id = %doc.id, error = %e, "Skipping unreadable document"),
            }
        }

        Ok(Arc::new(Snapshot {
            version,
            fetched_at: Utc::now(),
            records,
        }))
    }
}
