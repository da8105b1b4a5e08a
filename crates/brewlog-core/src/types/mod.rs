//! Core brewlog types.
//!
//! Identifiers validate at construction so an empty owner can never reach
//! the access layer.

mod owner_id;
mod quantity_unit;
mod record_id;
mod sort_key;

pub use owner_id::OwnerId;
pub use quantity_unit::QuantityUnit;
pub use record_id::RecordId;
pub use sort_key::SortKey;
