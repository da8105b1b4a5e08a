//! The record access surface.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument};

use brewlog_core::{
    Document, DocumentStore, Error, OwnerId, Record, RecordId, RecordInput, Result, SortKey,
    normalize,
};

use crate::cache::CacheCoordinator;
use crate::guard;
use crate::query::Query;

/// Owner-scoped access to the record collection.
///
/// Create one per process and share it; it owns the snapshot cache. Every
/// operation takes the caller's [`OwnerId`] explicitly.
///
/// Reads (`list`, `get`) are served from the cached snapshot. Writes check
/// ownership against the store directly, then invalidate the snapshot once
/// the store has acknowledged the write.
pub struct RecordAccess<S> {
    store: Arc<S>,
    cache: CacheCoordinator<S>,
}

impl<S> RecordAccess<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(store: S) -> Self {
        Self::from_arc(Arc::new(store))
    }

    /// Build over a store that is also used elsewhere.
    pub fn from_arc(store: Arc<S>) -> Self {
        let cache = CacheCoordinator::new(store.clone());
        Self { store, cache }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The snapshot cache.
    pub fn cache(&self) -> &CacheCoordinator<S> {
        &self.cache
    }

    /// List the owner's records, optionally restricted to one brand.
    ///
    /// # Errors
    ///
    /// Only [`Error::StoreUnavailable`], when a snapshot has to be fetched
    /// and the fetch fails.
    #[instrument(skip(self), fields(%owner, %sort))]
    pub async fn list(
        &self,
        owner: &OwnerId,
        sort: SortKey,
        brand: Option<&str>,
    ) -> Result<Vec<Record>> {
        let snapshot = self.cache.get().await?;
        let records = Query::new(owner, sort)
            .with_brand(brand)
            .apply(snapshot.records());
        debug!(
            version = snapshot.version(),
            count = records.len(),
            "Listed records"
        );
        Ok(records)
    }

    /// Fetch one record the owner owns.
    #[instrument(skip(self), fields(%owner, %id))]
    pub async fn get(&self, owner: &OwnerId, id: &RecordId) -> Result<Record> {
        let snapshot = self.cache.get().await?;
        guard::owned(snapshot.find(id), id, owner)
    }

    /// Create a record owned by `owner`.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the input is rejected (the store is not
    /// touched), or [`Error::StoreUnavailable`].
    #[instrument(skip(self, input), fields(%owner))]
    pub async fn create(&self, owner: &OwnerId, input: &RecordInput) -> Result<Record> {
        input.validate()?;

        let now = Utc::now();
        let body = input.to_body(owner, now, now);
        let id = self.store.insert(&body).await?;
        self.cache.invalidate().await;

        debug!(%id, "Created record");
        Ok(normalize(&Document::new(id, body))?)
    }

    /// Replace every mutable field of an owned record.
    ///
    /// Fields not present in `input` do not survive; there is no merge with the
    /// stored document. `id`, `ownerId` and `createdAt` are kept and
    /// `updatedAt` is re-stamped.
    #[instrument(skip(self, input), fields(%owner, %id))]
    pub async fn update(
        &self,
        owner: &OwnerId,
        id: &RecordId,
        input: &RecordInput,
    ) -> Result<Record> {
        let existing = guard::owned_document(self.store.get_by_id(id).await?, id, owner)?;
        input.validate()?;

        let now = Utc::now();
        let body = input.to_body(owner, existing.created_at.unwrap_or(now), now);
        let replaced = self.store.replace(id, &body).await?;
        self.cache.invalidate().await;

        if !replaced {
            debug!("Record vanished before replace");
            return Err(Error::not_found(id));
        }

        debug!("Updated record");
        Ok(normalize(&Document::new(id.clone(), body))?)
    }

    /// Delete an owned record. Returns whether the store removed anything.
    #[instrument(skip(self), fields(%owner, %id))]
    pub async fn delete(&self, owner: &OwnerId, id: &RecordId) -> Result<bool> {
        guard::owned_document(self.store.get_by_id(id).await?, id, owner)?;

        let removed = self.store.remove(id).await?;
        self.cache.invalidate().await;

        debug!(removed, "Deleted record");
        Ok(removed)
    }

    /// Drop the cached snapshot, e.g. after writing through another path.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}
