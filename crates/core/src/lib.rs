//! `stockroom-core` — shared building blocks for the inventory tracker.
//!
//! This crate contains the error taxonomy and the typed item identifier; it
//! has no storage or HTTP concerns.

pub mod error;
pub mod id;

pub use error::{StoreError, StoreResult};
pub use id::ItemId;
