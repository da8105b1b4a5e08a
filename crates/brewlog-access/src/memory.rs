//! In-memory document store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use brewlog_core::{Document, DocumentBody, DocumentStore, RecordId, Result};

/// A [`DocumentStore`] held entirely in memory.
///
/// Useful for tests and single-process setups; contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<BTreeMap<RecordId, DocumentBody>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with existing documents, e.g. legacy data.
    pub fn with_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let documents = documents
            .into_iter()
            .map(|doc| (doc.id, doc.body))
            .collect();
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    fn generate_id() -> Result<RecordId> {
        RecordId::new(Uuid::new_v4().simple().to_string())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Document>> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .map(|(id, body)| Document::new(id.clone(), body.clone()))
            .collect())
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<Option<Document>> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(id)
            .map(|body| Document::new(id.clone(), body.clone())))
    }

    #[instrument(skip(self, body))]
    async fn insert(&self, body: &DocumentBody) -> Result<RecordId> {
        let id = Self::generate_id()?;
        self.documents.write().await.insert(id.clone(), body.clone());
        debug!(%id, "Inserted document");
        Ok(id)
    }

    #[instrument(skip(self, body))]
    async fn replace(&self, id: &RecordId, body: &DocumentBody) -> Result<bool> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(id) {
            Some(existing) => {
                *existing = body.clone();
                debug!("Replaced document");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: &RecordId) -> Result<bool> {
        let removed = self.documents.write().await.remove(id).is_some();
        if removed {
            debug!("Removed document");
        }
        Ok(removed)
    }
}
