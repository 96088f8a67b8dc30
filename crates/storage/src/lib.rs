//! `stockroom-storage` — persistence of the collection blob.
//!
//! The whole collection is serialized into a single named slot. This crate
//! only moves opaque strings in and out of that slot; serialization lives
//! with the record model.

pub mod blob;
pub mod file;
pub mod memory;

pub use blob::{BlobError, BlobStore};
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
