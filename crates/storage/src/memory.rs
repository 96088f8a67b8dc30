//! In-memory blob slot for tests and ephemeral runs.

use std::sync::Mutex;

use crate::blob::{BlobError, BlobStore};

/// Mutex-guarded in-memory slot.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    slot: Mutex<Option<String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-seeded with an existing blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(blob.into())),
        }
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self) -> Result<Option<String>, BlobError> {
        let slot = self.slot.lock().map_err(|_| BlobError::Poisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, blob: &str) -> Result<(), BlobError> {
        let mut slot = self.slot.lock().map_err(|_| BlobError::Poisoned)?;
        *slot = Some(blob.to_string());
        Ok(())
    }
}
