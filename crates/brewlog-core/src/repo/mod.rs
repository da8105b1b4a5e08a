//! Stored documents and the canonical record shape.
//!
//! A [`Document`] is what a store adapter hands back: an id plus an opaque
//! JSON object. A [`Record`] is the canonical in-memory shape produced by
//! [`normalize`](crate::normalize()). [`RecordInput`] is what callers submit on
//! create and update.

mod document;
mod input;
mod record;

pub use document::{Document, DocumentBody};
pub use input::RecordInput;
pub use record::Record;

/// Wire names of the stored document fields.
pub mod fields {
    pub const OWNER_ID: &str = "ownerId";
    pub const BRAND_NAME: &str = "brandName";
    pub const ROAST: &str = "roast";
    pub const FORM_FACTOR: &str = "formFactor";
    pub const NOTES: &str = "notes";
    pub const QUANTITY: &str = "quantity";
    pub const QUANTITY_UNIT: &str = "quantityUnit";
    pub const ORDER_DATE: &str = "orderDate";
    pub const BITTERNESS_RATING: &str = "bitternessRating";
    pub const ACIDITY_RATING: &str = "acidityRating";
    pub const NOTE_CLARITY_RATING: &str = "noteClarityRating";
    pub const OVERALL_TASTE_RATING: &str = "overallTasteRating";
    pub const WORTH_REORDERING: &str = "worthReordering";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
}
