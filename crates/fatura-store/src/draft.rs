//! # Draft Store
//!
//! Typed facade over [`BlobStore`] for the two things Fatura persists:
//!
//! | key             | value                               |
//! |-----------------|-------------------------------------|
//! | `invoice-draft` | the full [`InvoiceSnapshot`] as JSON |
//! | `ui-language`   | the [`SystemLanguage`] preference    |
//!
//! The draft is rewritten wholesale on every save; there is no patching.
//! Loading tolerates corruption: a draft that fails to parse is logged and
//! treated as absent so the app always starts.

use fatura_core::{InvoiceSnapshot, SystemLanguage};
use tracing::warn;

use crate::blob::BlobStore;
use crate::error::StoreResult;

const DRAFT_KEY: &str = "invoice-draft";
const LANGUAGE_KEY: &str = "ui-language";

/// Persistence for the invoice draft and interface-language preference.
#[derive(Debug, Clone)]
pub struct DraftStore {
    blobs: BlobStore,
}

impl DraftStore {
    pub fn new(blobs: BlobStore) -> Self {
        DraftStore { blobs }
    }

    /// The directory backing this store.
    pub fn root(&self) -> &std::path::Path {
        self.blobs.root()
    }

    // =========================================================================
    // Invoice Draft
    // =========================================================================

    /// Loads the persisted draft, if any.
    ///
    /// A malformed draft is reported as absent: losing a corrupt draft is
    /// acceptable, failing to start is not.
    pub fn load_draft(&self) -> StoreResult<Option<InvoiceSnapshot>> {
        let Some(bytes) = self.blobs.get(DRAFT_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) => {
                warn!(error = %err, "stored draft is malformed, discarding");
                Ok(None)
            }
        }
    }

    /// Replaces the persisted draft with `snapshot`.
    pub fn save_draft(&self, snapshot: &InvoiceSnapshot) -> StoreResult<()> {
        let bytes = serde_json::to_vec(snapshot)?;
        self.blobs.put(DRAFT_KEY, &bytes)
    }

    /// Erases the persisted draft. Erasing an absent draft succeeds.
    pub fn clear_draft(&self) -> StoreResult<()> {
        self.blobs.delete(DRAFT_KEY)
    }

    // =========================================================================
    // Interface Language Preference
    // =========================================================================

    /// Loads the interface-language preference, defaulting when absent or
    /// unreadable.
    pub fn load_language(&self) -> StoreResult<SystemLanguage> {
        let Some(bytes) = self.blobs.get(LANGUAGE_KEY)? else {
            return Ok(SystemLanguage::default());
        };
        match serde_json::from_slice(&bytes) {
            Ok(language) => Ok(language),
            Err(err) => {
                warn!(error = %err, "stored language preference is malformed, using default");
                Ok(SystemLanguage::default())
            }
        }
    }

    /// Persists the interface-language preference.
    pub fn save_language(&self, language: SystemLanguage) -> StoreResult<()> {
        let bytes = serde_json::to_vec(&language)?;
        self.blobs.put(LANGUAGE_KEY, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fatura_core::LineItem;

    fn store() -> (tempfile::TempDir, DraftStore) {
        let dir = tempfile::tempdir().unwrap();
        let blobs = BlobStore::open(dir.path().join("store")).unwrap();
        (dir, DraftStore::new(blobs))
    }

    fn sample_snapshot() -> InvoiceSnapshot {
        let mut snapshot = InvoiceSnapshot::default();
        snapshot.company_name = "Acme GmbH".to_string();
        snapshot.invoice_number = "INV-001".to_string();
        snapshot.items = vec![LineItem::new(), LineItem::new()];
        snapshot
    }

    #[test]
    fn test_load_before_save_is_none() {
        let (_dir, store) = store();
        assert!(store.load_draft().unwrap().is_none());
    }

    #[test]
    fn test_draft_round_trip_preserves_item_ids() {
        let (_dir, store) = store();
        let snapshot = sample_snapshot();
        let ids: Vec<String> = snapshot.items.iter().map(|i| i.id.clone()).collect();

        store.save_draft(&snapshot).unwrap();
        let loaded = store.load_draft().unwrap().unwrap();

        assert_eq!(loaded.company_name, "Acme GmbH");
        let loaded_ids: Vec<String> = loaded.items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(loaded_ids, ids);
    }

    #[test]
    fn test_save_replaces_previous_draft() {
        let (_dir, store) = store();
        store.save_draft(&sample_snapshot()).unwrap();

        let mut second = sample_snapshot();
        second.invoice_number = "INV-002".to_string();
        store.save_draft(&second).unwrap();

        let loaded = store.load_draft().unwrap().unwrap();
        assert_eq!(loaded.invoice_number, "INV-002");
    }

    #[test]
    fn test_clear_draft_is_idempotent() {
        let (_dir, store) = store();
        store.save_draft(&sample_snapshot()).unwrap();
        store.clear_draft().unwrap();
        assert!(store.load_draft().unwrap().is_none());
        store.clear_draft().unwrap();
    }

    #[test]
    fn test_malformed_draft_reads_as_absent() {
        let (_dir, store) = store();
        store.blobs.put("invoice-draft", b"{not json").unwrap();
        assert!(store.load_draft().unwrap().is_none());
    }

    #[test]
    fn test_language_defaults_then_round_trips() {
        let (_dir, store) = store();
        assert_eq!(store.load_language().unwrap(), SystemLanguage::En);
        store.save_language(SystemLanguage::Tr).unwrap();
        assert_eq!(store.load_language().unwrap(), SystemLanguage::Tr);
    }

    #[test]
    fn test_malformed_language_falls_back_to_default() {
        let (_dir, store) = store();
        store.blobs.put("ui-language", b"\"klingon\"").unwrap();
        assert_eq!(store.load_language().unwrap(), SystemLanguage::En);
    }
}
