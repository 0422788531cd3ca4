//! # Error Types
//!
//! Domain-specific error types for fatura-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fatura-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  fatura-store errors (separate crate)                                  │
//! │  └── StoreError       - Blob read/write failures                       │
//! │                                                                         │
//! │  fatura-render errors (separate crate)                                 │
//! │  └── RenderError      - Layout/PDF/logo failures                       │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::validation::MissingField;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Line item cannot be found in the working copy.
    ///
    /// ## When This Occurs
    /// - Item id doesn't exist (stale id from the frontend)
    /// - Item was already removed in a previous command
    #[error("Line item not found: {0}")]
    ItemNotFound(String),

    /// Attempted to remove the only remaining line item.
    ///
    /// An invoice always carries at least one line item; the remove button
    /// on the last row is a no-op by contract.
    #[error("An invoice must contain at least one line item")]
    LastItem,

    /// Item list has reached its maximum size.
    #[error("An invoice cannot have more than {max} line items")]
    TooManyItems { max: usize },

    /// Submission was rejected because required fields are blank.
    ///
    /// ## When This Occurs
    /// - `submit()` found one or more required header fields empty
    /// - Tax is enabled but the tax rate field is blank/invalid
    ///
    /// The session stays in `Editing`; the field list drives inline markers
    /// in the form.
    #[error("Required fields are missing: {}", format_missing(.0))]
    MissingFields(Vec<MissingField>),

    /// Operation requires a submitted snapshot, but none exists yet.
    ///
    /// ## When This Occurs
    /// - `edit_again()` or `export` invoked before the first submission
    #[error("Invoice has not been submitted yet")]
    NotSubmitted,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

fn format_missing(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is not a finite number (NaN or infinity).
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Invalid format (e.g., unparseable date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Uploaded logo exceeds the size cap.
    #[error("Logo file is {size} bytes; maximum allowed is {max} bytes")]
    LogoTooLarge { size: usize, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound("abc-123".to_string());
        assert_eq!(err.to_string(), "Line item not found: abc-123");

        let err = CoreError::LastItem;
        assert_eq!(
            err.to_string(),
            "An invoice must contain at least one line item"
        );
    }

    #[test]
    fn test_missing_fields_message_lists_fields() {
        let err = CoreError::MissingFields(vec![
            MissingField::CompanyName,
            MissingField::BillTo,
        ]);
        let msg = err.to_string();
        assert!(msg.contains("companyName"));
        assert!(msg.contains("billTo"));
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "invoiceNumber".to_string(),
        };
        assert_eq!(err.to_string(), "invoiceNumber is required");

        let err = ValidationError::LogoTooLarge {
            size: 3 * 1024 * 1024,
            max: 2 * 1024 * 1024,
        };
        assert!(err.to_string().contains("maximum allowed"));
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
