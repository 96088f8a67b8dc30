//! File-backed blob slot.

use std::io;
use std::path::{Path, PathBuf};

use crate::blob::{BlobError, BlobStore};

/// Blob slot stored as `<dir>/<slot>.json` on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    /// Slot file inside an explicit directory.
    pub fn in_dir(dir: impl AsRef<Path>, slot: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{slot}.json")),
        }
    }

    /// Slot file inside the OS data directory:
    /// `{app_data_dir}/stockroom/<slot>.json`.
    pub fn open_default(slot: &str) -> Result<Self, BlobError> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .ok_or_else(|| {
                BlobError::DataDir("tried data_dir() and home_dir()/.local/share".to_string())
            })?;

        let mut dir = base;
        dir.push("stockroom");
        Ok(Self::in_dir(dir, slot))
    }

    /// Path of the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self) -> Result<Option<String>, BlobError> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BlobError::Io(e)),
        }
    }

    fn save(&self, blob: &str) -> Result<(), BlobError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, blob)?;
        tracing::debug!(path = %self.path.display(), bytes = blob.len(), "blob saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_on_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::in_dir(dir.path(), "items");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::in_dir(dir.path(), "items");
        store.save("[1,2,3]").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::in_dir(dir.path().join("nested/deeper"), "items");
        store.save("{}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{}"));
    }
}
