//! # fatura-render: Document Rendering for Fatura
//!
//! Turns an [`InvoiceSnapshot`](fatura_core::InvoiceSnapshot) into a printed
//! document. Rendering is a pure function of the snapshot: the same snapshot
//! always produces the same pages.
//!
//! ## Pipeline
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  InvoiceSnapshot (from fatura-core)                          │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  document::render ── labels, currency symbol, RTL mirroring  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  layout::Surface ── blocks paginated onto A4 pages           │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  pdf::export ── printpdf, builtin Helvetica fonts            │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  Vec<u8> (PDF bytes)                                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Formatting of money and dates is display-only: stored values are never
//! rounded, only their textual rendering honors the configured precision.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod error;
pub mod format;
pub mod layout;
pub mod logo;
pub mod pdf;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use document::render;
pub use error::{RenderError, RenderResult};
pub use format::{export_filename, format_date, format_money, format_quantity};
pub use layout::Surface;
pub use logo::{prepare_logo, Logo};
pub use pdf::export;
