//! # Render Error Types

use thiserror::Error;

/// Rendering and export errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// PDF assembly failed (font registration, page write, save).
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// The company logo could not be decoded or prepared.
    ///
    /// ## When This Occurs
    /// - Stored base64 is not valid
    /// - Bytes are not a decodable PNG/JPEG image
    #[error("Logo image invalid: {0}")]
    Logo(String),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
