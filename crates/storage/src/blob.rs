//! Blob slot abstraction.

use thiserror::Error;

/// Failure while reading or writing a blob slot.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("blob io: {0}")]
    Io(#[from] std::io::Error),

    #[error("no usable data directory: {0}")]
    DataDir(String),

    #[error("blob slot lock poisoned")]
    Poisoned,
}

/// A single named slot holding one serialized blob.
///
/// Implementations are last-write-wins; there is exactly one logical writer,
/// so no cross-process coordination is attempted.
pub trait BlobStore: Send + Sync {
    /// Read the slot. `Ok(None)` when the slot has never been written.
    fn load(&self) -> Result<Option<String>, BlobError>;

    /// Overwrite the slot with `blob`.
    fn save(&self, blob: &str) -> Result<(), BlobError>;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn load(&self) -> Result<Option<String>, BlobError> {
        (**self).load()
    }

    fn save(&self, blob: &str) -> Result<(), BlobError> {
        (**self).save(blob)
    }
}
