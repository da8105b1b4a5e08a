//! Document store trait.

use async_trait::async_trait;

use crate::Result;
use crate::repo::{Document, DocumentBody};
use crate::types::RecordId;

/// A key-value document store holding one collection.
///
/// The access layer never asks the store to filter or sort; it only needs
/// these five calls. Implementations report faults as
/// [`Error::StoreUnavailable`](crate::Error::StoreUnavailable) and do not
/// retry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every document in the collection, across all owners.
    async fn list_all(&self) -> Result<Vec<Document>>;

    /// Fetch a single document, or `None` if it does not exist.
    async fn get_by_id(&self, id: &RecordId) -> Result<Option<Document>>;

    /// Store a new document and return its generated id.
    async fn insert(&self, body: &DocumentBody) -> Result<RecordId>;

    /// Replace an existing document. Returns `false` if it does not exist.
    async fn replace(&self, id: &RecordId, body: &DocumentBody) -> Result<bool>;

    /// Remove a document. Returns `false` if it did not exist.
    async fn remove(&self, id: &RecordId) -> Result<bool>;
}
