//! Core traits at the storage seam.

mod store;

pub use store::DocumentStore;
