//! # fatura-store: Draft Persistence for Fatura
//!
//! File-backed persistence for the invoice draft and the interface-language
//! preference. Each key occupies a single slot: writing replaces the whole
//! value, reading returns the latest write, deleting empties the slot.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Tauri Command (submit_invoice, set_system_language, ...)  │
//! │       │                                                    │
//! │       ▼                                                    │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │              fatura-store (THIS CRATE)               │  │
//! │  │                                                      │  │
//! │  │   ┌───────────────┐       ┌───────────────────┐     │  │
//! │  │   │   BlobStore   │       │    DraftStore     │     │  │
//! │  │   │   (blob.rs)   │◄──────│    (draft.rs)     │     │  │
//! │  │   │               │       │                   │     │  │
//! │  │   │ one file per  │       │ invoice-draft     │     │  │
//! │  │   │ key, atomic   │       │ ui-language       │     │  │
//! │  │   │ replace write │       │                   │     │  │
//! │  │   └───────────────┘       └───────────────────┘     │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! │       │                                                    │
//! │       ▼                                                    │
//! │  app data dir, e.g. ~/.local/share/fatura/store/           │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Durability Rules
//!
//! - Writes go to a temp file in the same directory, then rename over the
//!   final path. A crashed write leaves the previous value intact.
//! - A malformed stored draft is treated as absent (logged, never an error):
//!   a corrupt draft must not brick startup.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod blob;
pub mod draft;
pub mod error;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use blob::BlobStore;
pub use draft::DraftStore;
pub use error::{StoreError, StoreResult};
