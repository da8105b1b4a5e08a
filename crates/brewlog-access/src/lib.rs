//! brewlog-access - Owner-scoped record access over a document store.
//!
//! [`RecordAccess`] is the surface request handlers call. It keeps one
//! full-collection [`Snapshot`] per instance, filters and sorts in process,
//! and answers `NotFound` for anything the caller does not own.
//!
//! # Consistency
//!
//! Writes invalidate the snapshot only after the store acknowledges them, so a
//! reader racing a write may still see the snapshot from before it. There is
//! no expiry and no cross-process invalidation: two processes sharing one
//! store only observe each other's writes after their own next write.

mod access;
mod cache;
mod guard;
mod memory;
mod query;

pub use access::RecordAccess;
pub use cache::{CacheCoordinator, Snapshot};
pub use memory::MemoryStore;
pub use query::Query;
