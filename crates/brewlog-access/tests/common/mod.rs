#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use brewlog_access::MemoryStore;
use brewlog_core::error::StoreError;
use brewlog_core::{
    Document, DocumentBody, DocumentStore, OwnerId, QuantityUnit, RecordId, RecordInput, Result,
};

/// Wraps a [`MemoryStore`], counting `list_all` calls and optionally slowing
/// or failing them.
#[derive(Default)]
pub struct InstrumentedStore {
    inner: MemoryStore,
    list_calls: AtomicUsize,
    list_delay_ms: AtomicUsize,
    fail_lists: AtomicBool,
    fail_writes: AtomicBool,
}

impl InstrumentedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        Self {
            inner: MemoryStore::with_documents(documents),
            ..Self::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn set_list_delay(&self, delay: Duration) {
        self.list_delay_ms
            .store(delay.as_millis() as usize, Ordering::SeqCst);
    }

    pub fn set_fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn write_guard(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                message: "store offline".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InstrumentedStore {
    async fn list_all(&self) -> Result<Vec<Document>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.list_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
        }

        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                message: "store offline".to_string(),
            }
            .into());
        }

        self.inner.list_all().await
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<Option<Document>> {
        self.inner.get_by_id(id).await
    }

    async fn insert(&self, body: &DocumentBody) -> Result<RecordId> {
        self.write_guard()?;
        self.inner.insert(body).await
    }

    async fn replace(&self, id: &RecordId, body: &DocumentBody) -> Result<bool> {
        self.write_guard()?;
        self.inner.replace(id, body).await
    }

    async fn remove(&self, id: &RecordId) -> Result<bool> {
        self.write_guard()?;
        self.inner.remove(id).await
    }
}

pub fn owner(s: &str) -> OwnerId {
    OwnerId::new(s).unwrap()
}

/// A valid input; tweak fields with struct update syntax.
pub fn input(brand: &str, overall: f64, order_date: &str) -> RecordInput {
    RecordInput {
        brand_name: brand.to_string(),
        roast: "medium".to_string(),
        form_factor: "beans".to_string(),
        notes: "tasted fine".to_string(),
        quantity: 250.0,
        quantity_unit: QuantityUnit::G,
        order_date: NaiveDate::parse_from_str(order_date, "%Y-%m-%d").unwrap(),
        bitterness_rating: 5.0,
        acidity_rating: 5.0,
        note_clarity_rating: 5.0,
        overall_taste_rating: overall,
        worth_reordering: true,
    }
}

pub fn legacy_document(id: &str, body: serde_json::Value) -> Document {
    Document::new(
        RecordId::new(id).unwrap(),
        DocumentBody::new(body).unwrap(),
    )
}
