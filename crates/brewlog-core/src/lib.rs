//! brewlog-core - Core types and traits for the brewlog record log.

pub mod error;
pub mod normalize;
pub mod repo;
pub mod traits;
pub mod types;

pub use error::Error;
pub use normalize::normalize;
pub use repo::{Document, DocumentBody, Record, RecordInput};
pub use traits::DocumentStore;
pub use types::{OwnerId, QuantityUnit, RecordId, SortKey};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
