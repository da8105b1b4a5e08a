//! Ownership checks for id-addressed operations.
//!
//! Absent and foreign records produce the same [`Error::NotFound`].

use tracing::debug;

use brewlog_core::{Document, Error, OwnerId, Record, RecordId, Result, normalize};

/// Return the record only if `owner` owns it.
pub(crate) fn owned(record: Option<&Record>, id: &RecordId, owner: &OwnerId) -> Result<Record> {
    match record {
        Some(record) if &record.owner_id == owner => Ok(record.clone()),
        Some(_) => {
            debug!(%id, "Ownership mismatch, reporting not found");
            Err(Error::not_found(id))
        }
        None => Err(Error::not_found(id)),
    }
}

/// Normalize a document read straight from the store and check its owner.
///
/// A document without a readable owner cannot be claimed by anyone.
pub(crate) fn owned_document(
    document: Option<Document>,
    id: &RecordId,
    owner: &OwnerId,
) -> Result<Record> {
    let record = match document.as_ref().map(normalize) {
        Some(Ok(record)) => Some(record),
        Some(Err(e)) => {
            debug!(%id, error = %e, "Unreadable document, reporting not found");
            None
        }
        None => None,
    };
    owned(record.as_ref(), id, owner)
}
