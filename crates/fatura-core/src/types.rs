//! # Domain Types
//!
//! Core domain types for the Fatura invoice builder.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │    LineItem     │   │ InvoiceSnapshot  │   │     Totals      │      │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────  │      │
//! │  │  id (UUID)      │   │  header fields   │   │  subtotal       │      │
//! │  │  quantity       │   │  items (≥ 1)     │   │  tax_amount     │      │
//! │  │  unit_price     │   │  options         │   │  total          │      │
//! │  │  amount (drvd)  │   │  totals          │   └─────────────────┘      │
//! │  └─────────────────┘   └──────────────────┘                            │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌────────────────┐      │
//! │  │ DisplayOptions   │   │ DocumentLanguage │   │ DecimalPlaces  │      │
//! │  │  ──────────────  │   │  ──────────────  │   │  ────────────  │      │
//! │  │  currency        │   │  13 languages    │   │  Two | Three   │      │
//! │  │  language        │   │  ar is RTL       │   │  wire: 2 | 3   │      │
//! │  │  decimal_places  │   └──────────────────┘   └────────────────┘      │
//! │  │  tax toggle+rate │                                                  │
//! │  └──────────────────┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! The form edits a mutable working copy owned by the desktop session. On
//! submission the working copy is validated, totals are computed, and the
//! result is frozen into an [`InvoiceSnapshot`]. Renderer and persistence
//! only ever see snapshots - never a half-edited working copy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Line Item
// =============================================================================

/// A single product/service row on the invoice.
///
/// ## Invariant
/// `amount == quantity * unit_price` at all times. The amount column is
/// derived and never user-editable; [`LineItem::recompute_amount`] runs
/// synchronously inside the same edit that changed quantity or unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable identifier (UUID v4). Preserved across draft reload so the
    /// frontend can keep row identity.
    pub id: String,

    /// Quantity (non-negative; fractional quantities like 1.5 h are allowed).
    pub quantity: f64,

    /// Free-text description of the product or service.
    pub description: String,

    /// Price per unit (non-negative).
    pub unit_price: f64,

    /// Derived: quantity × unit_price. Never independently editable.
    pub amount: f64,
}

impl LineItem {
    /// Creates a defaulted line item: quantity 1, price 0, blank description.
    pub fn new() -> Self {
        LineItem {
            id: Uuid::new_v4().to_string(),
            quantity: 1.0,
            description: String::new(),
            unit_price: 0.0,
            amount: 0.0,
        }
    }

    /// Restores the derived-amount invariant after a quantity or unit-price
    /// edit.
    #[inline]
    pub fn recompute_amount(&mut self) {
        self.amount = self.quantity * self.unit_price;
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::new()
    }
}

// =============================================================================
// Document Language
// =============================================================================

/// Language used *inside* the generated invoice document.
///
/// Deliberately decoupled from [`SystemLanguage`] (the tool's own interface
/// language): a Turkish freelancer can drive the tool in Turkish while
/// issuing invoices in German.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DocumentLanguage {
    Tr,
    En,
    De,
    Fr,
    Es,
    It,
    Pt,
    Nl,
    Ru,
    Ar,
    Zh,
    Ja,
    Ko,
}

impl DocumentLanguage {
    /// The ISO 639-1 code used on the wire and in the reference tables.
    pub const fn code(&self) -> &'static str {
        match self {
            DocumentLanguage::Tr => "tr",
            DocumentLanguage::En => "en",
            DocumentLanguage::De => "de",
            DocumentLanguage::Fr => "fr",
            DocumentLanguage::Es => "es",
            DocumentLanguage::It => "it",
            DocumentLanguage::Pt => "pt",
            DocumentLanguage::Nl => "nl",
            DocumentLanguage::Ru => "ru",
            DocumentLanguage::Ar => "ar",
            DocumentLanguage::Zh => "zh",
            DocumentLanguage::Ja => "ja",
            DocumentLanguage::Ko => "ko",
        }
    }

    /// Whether the document is laid out right-to-left.
    ///
    /// Layout policy is keyed off the document's language field, not the
    /// interface language. Arabic is the single RTL language in the table.
    #[inline]
    pub const fn is_rtl(&self) -> bool {
        matches!(self, DocumentLanguage::Ar)
    }
}

impl Default for DocumentLanguage {
    fn default() -> Self {
        DocumentLanguage::En
    }
}

// =============================================================================
// System (Interface) Language
// =============================================================================

/// Language of the tool's own controls. Persisted separately from any
/// invoice content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SystemLanguage {
    Tr,
    En,
    De,
    Fr,
    Es,
}

impl Default for SystemLanguage {
    fn default() -> Self {
        SystemLanguage::En
    }
}

// =============================================================================
// Decimal Places
// =============================================================================

/// Render-time precision for monetary values.
///
/// ## Display Only
/// This never feeds back into stored numeric precision: a stored 9.5 renders
/// as "9.50" or "9.500" but stays 9.5 in the snapshot and the draft blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DecimalPlaces {
    Two,
    Three,
}

impl DecimalPlaces {
    /// Number of fractional digits to show.
    #[inline]
    pub const fn digits(&self) -> usize {
        match self {
            DecimalPlaces::Two => 2,
            DecimalPlaces::Three => 3,
        }
    }
}

impl Default for DecimalPlaces {
    fn default() -> Self {
        DecimalPlaces::Two
    }
}

impl TryFrom<u8> for DecimalPlaces {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(DecimalPlaces::Two),
            3 => Ok(DecimalPlaces::Three),
            other => Err(format!("decimal places must be 2 or 3, got {}", other)),
        }
    }
}

impl From<DecimalPlaces> for u8 {
    fn from(value: DecimalPlaces) -> Self {
        value.digits() as u8
    }
}

// =============================================================================
// Display Options
// =============================================================================

/// Per-invoice display configuration: currency, document language, decimal
/// precision, and the tax toggle with its rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    /// Currency code (e.g. "USD"). A label/symbol only - no conversion.
    pub currency: String,

    /// Language used inside the generated document.
    pub language: DocumentLanguage,

    /// Fractional digits for money display (2 or 3 on the wire).
    #[ts(type = "2 | 3")]
    pub decimal_places: DecimalPlaces,

    /// Whether tax rows appear at all. When false, rendered output omits the
    /// tax row entirely (not shown as zero).
    pub tax_enabled: bool,

    /// Tax rate percentage (0..=100). Only meaningful when tax is enabled.
    pub tax_rate: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            currency: "USD".to_string(),
            language: DocumentLanguage::default(),
            decimal_places: DecimalPlaces::default(),
            tax_enabled: true,
            tax_rate: crate::DEFAULT_TAX_RATE,
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Computed invoice totals. Produced exclusively by
/// [`crate::totals::compute_totals`]; always consistent with the item list
/// and tax configuration at snapshot creation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Σ amount over items.
    pub subtotal: f64,

    /// subtotal × rate / 100 when tax is enabled, otherwise 0.
    pub tax_amount: f64,

    /// subtotal + tax_amount.
    pub total: f64,
}

// =============================================================================
// Invoice Snapshot
// =============================================================================

/// An immutable, fully-computed invoice record produced at submission time.
///
/// ## Immutability Contract
/// A snapshot is never mutated in place. Any edit reloads the snapshot into
/// the working copy, and the next submission produces a *new* snapshot via
/// the computation engine. Renderer and persistence therefore never observe
/// a partially-edited invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSnapshot {
    /// Issuing company name.
    pub company_name: String,

    /// Optional company logo: PNG bytes, base64-encoded, already bounded to
    /// the maximum logo box by the upload path.
    pub company_logo: Option<String>,

    /// Issuing company postal address (multi-line free text).
    pub company_address: String,

    /// Issuing company email.
    pub company_email: String,

    /// Issuing company phone.
    pub company_phone: String,

    /// Invoice number - also the basis for the export filename.
    pub invoice_number: String,

    /// Invoice issue date.
    #[ts(as = "String")]
    pub invoice_date: NaiveDate,

    /// Purchase order number (optional; omitted from the document when blank).
    pub po_number: String,

    /// Payment due date.
    #[ts(as = "String")]
    pub due_date: NaiveDate,

    /// Billing address (multi-line free text).
    pub bill_to: String,

    /// Shipping address (multi-line free text).
    pub ship_to: String,

    /// Ordered, non-empty line items.
    pub items: Vec<LineItem>,

    /// Display configuration frozen at submission time.
    pub options: DisplayOptions,

    /// Totals computed at submission time.
    pub totals: Totals,

    /// Terms & conditions (omitted from the document when blank).
    pub terms_and_conditions: String,

    /// Free-form notes (omitted from the document when blank).
    pub notes: String,

    /// Payment instructions, e.g. bank/IBAN lines (omitted when blank).
    pub payment_details: String,
}

impl Default for InvoiceSnapshot {
    /// A blank invoice dated today, due in [`crate::DEFAULT_DUE_DAYS`] days,
    /// carrying one defaulted line item and the default terms text.
    fn default() -> Self {
        let today = chrono::Local::now().date_naive();
        InvoiceSnapshot {
            company_name: String::new(),
            company_logo: None,
            company_address: String::new(),
            company_email: String::new(),
            company_phone: String::new(),
            invoice_number: String::new(),
            invoice_date: today,
            po_number: String::new(),
            due_date: today + chrono::Days::new(crate::DEFAULT_DUE_DAYS),
            bill_to: String::new(),
            ship_to: String::new(),
            items: vec![LineItem::new()],
            options: DisplayOptions::default(),
            totals: Totals {
                subtotal: 0.0,
                tax_amount: 0.0,
                total: 0.0,
            },
            terms_and_conditions: crate::DEFAULT_TERMS.to_string(),
            notes: String::new(),
            payment_details: String::new(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_defaults() {
        let item = LineItem::new();
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit_price, 0.0);
        assert_eq!(item.amount, 0.0);
        assert!(item.description.is_empty());
        assert!(!item.id.is_empty());
    }

    #[test]
    fn test_line_item_ids_are_unique() {
        let a = LineItem::new();
        let b = LineItem::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_recompute_amount() {
        let mut item = LineItem::new();
        item.quantity = 2.0;
        item.unit_price = 50.0;
        item.recompute_amount();
        assert_eq!(item.amount, 100.0);
    }

    #[test]
    fn test_decimal_places_wire_format() {
        // Serializes as a bare number, not a variant name
        assert_eq!(serde_json::to_string(&DecimalPlaces::Two).unwrap(), "2");
        assert_eq!(serde_json::to_string(&DecimalPlaces::Three).unwrap(), "3");

        let three: DecimalPlaces = serde_json::from_str("3").unwrap();
        assert_eq!(three, DecimalPlaces::Three);

        // Anything outside {2, 3} is rejected
        assert!(serde_json::from_str::<DecimalPlaces>("4").is_err());
    }

    #[test]
    fn test_document_language_wire_format() {
        assert_eq!(
            serde_json::to_string(&DocumentLanguage::Ar).unwrap(),
            "\"ar\""
        );
        let lang: DocumentLanguage = serde_json::from_str("\"tr\"").unwrap();
        assert_eq!(lang, DocumentLanguage::Tr);
    }

    #[test]
    fn test_rtl_flag_only_for_arabic() {
        assert!(DocumentLanguage::Ar.is_rtl());
        assert!(!DocumentLanguage::En.is_rtl());
        assert!(!DocumentLanguage::Tr.is_rtl());
        assert!(!DocumentLanguage::Ru.is_rtl());
    }

    #[test]
    fn test_snapshot_json_round_trip_preserves_item_ids() {
        let mut item = LineItem::new();
        item.quantity = 3.0;
        item.unit_price = 5.0;
        item.recompute_amount();
        let original_id = item.id.clone();

        let snapshot = InvoiceSnapshot {
            company_name: "Acme Ltd".to_string(),
            company_logo: None,
            company_address: "1 Main St".to_string(),
            company_email: "billing@acme.test".to_string(),
            company_phone: "+1 555 0100".to_string(),
            invoice_number: "INV-001".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            po_number: String::new(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
            bill_to: "Customer".to_string(),
            ship_to: "Customer".to_string(),
            items: vec![item],
            options: DisplayOptions::default(),
            totals: Totals {
                subtotal: 15.0,
                tax_amount: 3.0,
                total: 18.0,
            },
            terms_and_conditions: String::new(),
            notes: String::new(),
            payment_details: String::new(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: InvoiceSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
        assert_eq!(restored.items[0].id, original_id);
    }
}
