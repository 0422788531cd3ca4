//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Fatura                            │
//! │                                                                    │
//! │  Frontend                    Rust Backend                          │
//! │  ────────                    ────────────                          │
//! │                                                                    │
//! │  invoke('submit_invoice')                                          │
//! │         │                                                          │
//! │         ▼                                                          │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                            │  │
//! │  │  Result<T, ApiError>                                         │  │
//! │  │         │                                                    │  │
//! │  │         ▼                                                    │  │
//! │  │  Core Error? ──── CoreError::MissingFields ──────┐           │  │
//! │  │         │                                        │           │  │
//! │  │         ▼                                        ▼           │  │
//! │  │  Store Error? ─── StoreError::WriteFailed ─── ApiError ────► │  │
//! │  │         │                                        ▲           │  │
//! │  │         ▼                                        │           │  │
//! │  │  Render Error? ── RenderError::Pdf ──────────────┘           │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! │                                                                    │
//! │  try {                                                             │
//! │    await invoke('submit_invoice')                                  │
//! │  } catch (e) {                                                     │
//! │    // e.message = "Required fields are missing: companyName, ..."  │
//! │    // e.code = "VALIDATION_ERROR"                                  │
//! │  }                                                                 │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;

use fatura_core::CoreError;
use fatura_render::RenderError;
use fatura_store::StoreError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Required fields are missing: companyName, billTo"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('submit_invoice');
/// } catch (e) {
///   switch (e.code) {
///     case 'VALIDATION_ERROR':
///       highlightFields(e.message);
///       break;
///     case 'EXPORT_ERROR':
///       showNotification('Could not write PDF');
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (line item id, etc.)
    NotFound,

    /// Input or submission validation failed
    ValidationError,

    /// Operation not legal in the current session phase
    SessionError,

    /// Draft persistence failed
    StoreError,

    /// Document rendering or PDF write failed
    ExportError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a session-phase error.
    pub fn session(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::SessionError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => ApiError::new(
                ErrorCode::NotFound,
                format!("Line item not found: {id}"),
            ),
            CoreError::LastItem => ApiError::validation(
                "An invoice must keep at least one line item",
            ),
            CoreError::TooManyItems { max } => ApiError::validation(format!(
                "An invoice cannot have more than {max} line items"
            )),
            err @ CoreError::MissingFields(_) => ApiError::validation(err.to_string()),
            CoreError::NotSubmitted => ApiError::session(
                "No submitted invoice to export; generate the invoice first",
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts persistence errors to API errors.
///
/// The real cause goes to the log; the frontend gets a stable message.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "store operation failed");
        ApiError::new(ErrorCode::StoreError, "Draft storage operation failed")
    }
}

/// Converts rendering errors to API errors.
impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Logo(reason) => {
                ApiError::validation(format!("Logo image invalid: {reason}"))
            }
            RenderError::Pdf(reason) => {
                tracing::error!(error = %reason, "PDF generation failed");
                ApiError::new(ErrorCode::ExportError, "PDF generation failed")
            }
        }
    }
}

/// Makes ApiError work as a Tauri command error.
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
