//! # fatura-core: Pure Business Logic for Fatura
//!
//! This crate is the **heart** of the Fatura invoice builder. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fatura Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Invoice Form ──► Preview ──► Download PDF                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    update_field, update_item, submit_invoice, export_invoice    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fatura-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  totals   │  │ reference │  │ validation│  │   │
//! │  │   │ LineItem  │  │  engine   │  │ currencies│  │   rules   │  │   │
//! │  │   │ Snapshot  │  │ (pure fn) │  │  labels   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILE SYSTEM • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │        ┌───────────────────────┴─────────────────────┐                 │
//! │        ▼                                             ▼                 │
//! │  ┌──────────────────────┐               ┌──────────────────────────┐   │
//! │  │ fatura-store         │               │ fatura-render            │   │
//! │  │ (draft persistence)  │               │ (A4 layout + PDF export) │   │
//! │  └──────────────────────┘               └──────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, InvoiceSnapshot, DisplayOptions, ...)
//! - [`totals`] - The invoice computation engine (pure function)
//! - [`reference`] - Static currency/language/label tables
//! - [`error`] - Domain error types
//! - [`validation`] - Input and submission validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: `compute_totals` is deterministic - same input = same output
//! 2. **No I/O**: File system and network access is FORBIDDEN here
//! 3. **Snapshot Immutability**: an [`types::InvoiceSnapshot`] is never edited in
//!    place; every edit flows through the working copy and produces a new one
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use fatura_core::totals::compute_totals;
//! use fatura_core::types::LineItem;
//!
//! let mut item = LineItem::new();
//! item.quantity = 2.0;
//! item.unit_price = 50.0;
//! item.recompute_amount();
//!
//! // 2 × 50.00 at 20% tax
//! let totals = compute_totals(&[item], true, 20.0);
//! assert_eq!(totals.subtotal, 100.0);
//! assert_eq!(totals.tax_amount, 20.0);
//! assert_eq!(totals.total, 120.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod reference;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fatura_core::LineItem` instead of
// `use fatura_core::types::LineItem`

pub use error::{CoreError, ValidationError};
pub use totals::compute_totals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum accepted logo upload size in bytes (2 MB).
///
/// ## Business Reason
/// Logos are embedded base64 inside the persisted draft blob; an unbounded
/// upload would bloat every persistence write and the exported PDF.
pub const MAX_LOGO_BYTES: usize = 2 * 1024 * 1024;

/// Maximum line items allowed on a single invoice
///
/// ## Business Reason
/// Prevents runaway item lists; a real invoice of this size would not fit a
/// readable A4 document anyway.
pub const MAX_LINE_ITEMS: usize = 100;

/// Default payment window, in days, used to seed the due date
/// (due date = invoice date + this many days on a blank form).
pub const DEFAULT_DUE_DAYS: u64 = 30;

/// Default terms text on a blank form.
pub const DEFAULT_TERMS: &str = "Payment is due within 15 days";

/// Default tax rate percentage on a blank form.
pub const DEFAULT_TAX_RATE: f64 = 20.0;
