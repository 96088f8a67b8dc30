//! Inventory record model and store.
//!
//! This crate owns the collection of item records and everything that happens
//! to it: validated create/update/delete, the filter/sort query pipeline,
//! summary aggregation, JSON/CSV import/export, and persistence of the whole
//! collection to a single blob slot.

pub mod item;
pub mod query;
pub mod store;
pub mod transfer;

pub use item::{DEFAULT_MIN_STOCK, ItemDraft, ItemRecord};
pub use query::{CategoryFilter, ItemFilter, SortOrder};
pub use store::{InventoryStore, InventorySummary, STORAGE_SLOT};
pub use transfer::export_file_name;
