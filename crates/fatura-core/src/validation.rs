//! # Validation Module
//!
//! Input validation for the Fatura invoice builder.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, numeric)                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Tauri Command (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: per-edit checks + submit-time required fields        │
//! │                                                                         │
//! │  Per-edit checks run on every update_item/update_options call;         │
//! │  required-field checks run once, at submit().                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fatura_core::validation::{validate_quantity, validate_tax_rate};
//!
//! validate_quantity(2.5).unwrap();
//! validate_tax_rate(20.0).unwrap();
//! ```

use std::fmt;

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::MAX_LOGO_BYTES;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Missing Required Fields
// =============================================================================

/// A required field found blank at submission time.
///
/// Serialized camelCase so the frontend can map entries straight onto its
/// form inputs for inline highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum MissingField {
    CompanyName,
    CompanyAddress,
    InvoiceNumber,
    InvoiceDate,
    DueDate,
    BillTo,
    ShipTo,
    TaxRate,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Matches the serde wire name, so log lines and API payloads agree
        let name = match self {
            MissingField::CompanyName => "companyName",
            MissingField::CompanyAddress => "companyAddress",
            MissingField::InvoiceNumber => "invoiceNumber",
            MissingField::InvoiceDate => "invoiceDate",
            MissingField::DueDate => "dueDate",
            MissingField::BillTo => "billTo",
            MissingField::ShipTo => "shipTo",
            MissingField::TaxRate => "taxRate",
        };
        f.write_str(name)
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Whether a free-text field counts as blank for required-field purposes.
/// Whitespace-only input is blank.
#[inline]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line-item quantity.
///
/// ## Rules
/// - Must be a finite number (no NaN/infinity from the wire)
/// - Must be non-negative; zero is allowed (placeholder rows)
/// - Fractional quantities are allowed (hours, kilograms, ...)
pub fn validate_quantity(quantity: f64) -> ValidationResult<()> {
    if !quantity.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "quantity".to_string(),
        });
    }

    if quantity < 0.0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a line-item unit price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_unit_price(unit_price: f64) -> ValidationResult<()> {
    if !unit_price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "unitPrice".to_string(),
        });
    }

    if unit_price < 0.0 {
        return Err(ValidationError::Negative {
            field: "unitPrice".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate percentage.
///
/// ## Rules
/// - Must be a finite number between 0 and 100 inclusive
pub fn validate_tax_rate(rate_percent: f64) -> ValidationResult<()> {
    if !rate_percent.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "taxRate".to_string(),
        });
    }

    if !(0.0..=100.0).contains(&rate_percent) {
        return Err(ValidationError::OutOfRange {
            field: "taxRate".to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

// =============================================================================
// Logo Validator
// =============================================================================

/// Validates an uploaded logo's byte size against the 2 MB cap.
///
/// ## Example
/// ```rust
/// use fatura_core::validation::validate_logo_size;
///
/// assert!(validate_logo_size(100 * 1024).is_ok());
/// assert!(validate_logo_size(3 * 1024 * 1024).is_err());
/// ```
pub fn validate_logo_size(size: usize) -> ValidationResult<()> {
    if size > MAX_LOGO_BYTES {
        return Err(ValidationError::LogoTooLarge {
            size,
            max: MAX_LOGO_BYTES,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\n\t"));
        assert!(!is_blank("Acme"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0.0).is_ok());
        assert!(validate_quantity(1.0).is_ok());
        assert!(validate_quantity(2.5).is_ok());

        assert!(validate_quantity(-1.0).is_err());
        assert!(validate_quantity(f64::NAN).is_err());
        assert!(validate_quantity(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(0.0).is_ok());
        assert!(validate_unit_price(10.99).is_ok());

        assert!(validate_unit_price(-0.01).is_err());
        assert!(validate_unit_price(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate(0.0).is_ok());
        assert!(validate_tax_rate(20.0).is_ok());
        assert!(validate_tax_rate(100.0).is_ok());

        assert!(validate_tax_rate(-1.0).is_err());
        assert!(validate_tax_rate(100.1).is_err());
        assert!(validate_tax_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_logo_size() {
        assert!(validate_logo_size(0).is_ok());
        assert!(validate_logo_size(MAX_LOGO_BYTES).is_ok());
        assert!(validate_logo_size(MAX_LOGO_BYTES + 1).is_err());
    }

    #[test]
    fn test_missing_field_display_matches_wire_name() {
        assert_eq!(MissingField::CompanyName.to_string(), "companyName");
        assert_eq!(
            serde_json::to_string(&MissingField::CompanyName).unwrap(),
            "\"companyName\""
        );
    }
}
