//! # Blob Store
//!
//! One file per key under a root directory. Keys are restricted to the
//! store's own vocabulary (lowercase, digits, `-`), so they map directly to
//! file names without escaping.
//!
//! ## Write Protocol
//! ```text
//! put("invoice-draft", bytes)
//!   1. write bytes to <root>/invoice-draft.tmp
//!   2. rename <root>/invoice-draft.tmp → <root>/invoice-draft.json
//! ```
//! Rename is atomic on the same filesystem, so a reader (or a crash) only
//! ever observes the previous complete value or the new complete value.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// File-backed key/blob storage.
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::RootUnavailable {
            path: root.display().to_string(),
            source,
        })?;
        Ok(BlobStore { root })
    }

    /// The directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Replaces the value of `key`. The previous value survives a crashed
    /// write because the swap happens via rename.
    pub fn put(&self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let tmp = self.root.join(format!("{key}.tmp"));
        let write = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
            fs::rename(&tmp, self.slot_path(key))
        };
        write().map_err(|source| StoreError::WriteFailed {
            key: key.to_string(),
            source,
        })
    }

    /// Reads the value of `key`, or `None` if the slot is empty.
    pub fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(self.slot_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::ReadFailed {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Empties the slot for `key`. Deleting an already-empty slot succeeds.
    pub fn delete(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::DeleteFailed {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, BlobStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = BlobStore::open(dir.path().join("store")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_get_absent_key_is_none() {
        let (_dir, store) = store();
        assert!(store.get("invoice-draft").unwrap().is_none());
    }

    #[test]
    fn test_put_then_get_round_trips() {
        let (_dir, store) = store();
        store.put("invoice-draft", b"{\"a\":1}").unwrap();
        assert_eq!(store.get("invoice-draft").unwrap().unwrap(), b"{\"a\":1}");
    }

    #[test]
    fn test_put_replaces_previous_value() {
        let (_dir, store) = store();
        store.put("ui-language", b"\"en\"").unwrap();
        store.put("ui-language", b"\"tr\"").unwrap();
        assert_eq!(store.get("ui-language").unwrap().unwrap(), b"\"tr\"");
    }

    #[test]
    fn test_delete_empties_slot_and_is_idempotent() {
        let (_dir, store) = store();
        store.put("invoice-draft", b"x").unwrap();
        store.delete("invoice-draft").unwrap();
        assert!(store.get("invoice-draft").unwrap().is_none());
        // second delete of an empty slot succeeds
        store.delete("invoice-draft").unwrap();
    }

    #[test]
    fn test_no_tmp_file_left_behind() {
        let (_dir, store) = store();
        store.put("invoice-draft", b"x").unwrap();
        assert!(!store.root().join("invoice-draft.tmp").exists());
    }
}
