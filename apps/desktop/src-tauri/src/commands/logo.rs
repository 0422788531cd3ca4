//! # Logo Commands
//!
//! Upload and removal of the company logo. The raw upload is size-checked,
//! decoded, bounded to the logo box, and stored on the form as base64 PNG;
//! from there it travels inside the draft and the snapshot like any other
//! field.

use serde::Serialize;
use tauri::State;
use tracing::{info, warn};

use fatura_core::validation::validate_logo_size;
use fatura_render::prepare_logo;

use crate::error::ApiError;
use crate::state::{SessionState, StoreState};

/// The stored form of an accepted logo.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoResponse {
    pub png_base64: String,
    pub width_px: u32,
    pub height_px: u32,
}

/// Accepts a logo upload for the current form.
///
/// Rejects uploads over the 2 MB cap before any decoding happens, then
/// normalizes the image (bounded box, PNG re-encode).
#[tauri::command]
pub fn set_logo(
    session: State<'_, SessionState>,
    store: State<'_, StoreState>,
    bytes: Vec<u8>,
) -> Result<LogoResponse, ApiError> {
    validate_logo_size(bytes.len()).map_err(fatura_core::CoreError::from)?;
    let logo = prepare_logo(&bytes)?;
    info!(
        width = logo.width_px,
        height = logo.height_px,
        "logo accepted"
    );

    session.with_session_mut(|s| {
        s.form.company_logo = Some(logo.png_base64.clone());
    });
    if let Err(err) = store
        .store()
        .save_draft(&session.with_session(|s| s.form.freeze()))
    {
        warn!(error = %err, "draft autosave failed after logo upload");
    }

    Ok(LogoResponse {
        png_base64: logo.png_base64,
        width_px: logo.width_px,
        height_px: logo.height_px,
    })
}

/// Removes the logo from the current form.
#[tauri::command]
pub fn clear_logo(
    session: State<'_, SessionState>,
    store: State<'_, StoreState>,
) -> Result<(), ApiError> {
    session.with_session_mut(|s| {
        s.form.company_logo = None;
    });
    if let Err(err) = store
        .store()
        .save_draft(&session.with_session(|s| s.form.freeze()))
    {
        warn!(error = %err, "draft autosave failed after logo removal");
    }
    Ok(())
}
