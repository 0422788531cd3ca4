//! # Store Error Types
//!
//! Error types for draft and preference persistence.
//!
//! ## Error Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Error Propagation                       │
//! │                                                          │
//! │  Filesystem error (std::io::Error)                       │
//! │       │                                                  │
//! │       ▼                                                  │
//! │  StoreError (this module) ← Adds key context             │
//! │       │                                                  │
//! │       ▼                                                  │
//! │  ApiError (in Tauri app) ← Serialized for frontend       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed stored value is deliberately NOT an error at the read API:
//! `DraftStore` logs and returns `None` so a corrupt draft cannot block
//! startup.

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store root directory could not be created or opened.
    ///
    /// ## When This Occurs
    /// - App data directory cannot be resolved
    /// - File permissions issue
    #[error("Store root unavailable at {path}: {source}")]
    RootUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a slot failed.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - Temp file rename rejected
    #[error("Failed to write '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading a slot failed for a reason other than absence.
    #[error("Failed to read '{key}': {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Deleting a slot failed.
    #[error("Failed to delete '{key}': {source}")]
    DeleteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized for storage.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
