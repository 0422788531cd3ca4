//! # Export Commands
//!
//! Turns the submitted snapshot into a PDF file on disk.
//!
//! ## Export Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  invoke('export_invoice')                                          │
//! │         │                                                          │
//! │         ▼                                                          │
//! │  emit 'export://started'  ──► frontend hides action controls       │
//! │         │                                                          │
//! │         ▼                                                          │
//! │  fatura_render::render(snapshot) ──► Surface                       │
//! │  fatura_render::export(surface)  ──► PDF bytes                     │
//! │  write to ~/Downloads/<invoice_number>.pdf                         │
//! │         │                                                          │
//! │         ▼                                                          │
//! │  emit 'export://finished' ──► controls restored (ALWAYS emitted,   │
//! │                               success and failure alike)           │
//! └────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::Serialize;
use tauri::{AppHandle, Emitter, State};
use tracing::{error, info, warn};

use fatura_core::CoreError;
use fatura_render::{export, export_filename, render};

use crate::error::{ApiError, ErrorCode};
use crate::state::{SessionState, StoreState};

const EVENT_EXPORT_STARTED: &str = "export://started";
const EVENT_EXPORT_FINISHED: &str = "export://finished";

/// Where the exported document landed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub path: String,
    pub filename: String,
}

/// Exports the last submitted invoice as a PDF.
///
/// Only legal in the submitted phase; while editing there is no frozen
/// snapshot to print. `export://started` / `export://finished` bracket the
/// whole operation so the frontend can hide its action controls while the
/// document is being produced.
// Async so Tauri dispatches it to a worker task; rendering and the file
// write would otherwise block the webview thread.
#[tauri::command]
pub async fn export_invoice(
    app: AppHandle,
    session: State<'_, SessionState>,
    store: State<'_, StoreState>,
) -> Result<ExportResponse, ApiError> {
    let snapshot = session
        .with_session(|s| s.last_snapshot.clone())
        .ok_or(CoreError::NotSubmitted)?;

    if let Err(err) = app.emit(EVENT_EXPORT_STARTED, ()) {
        warn!(error = %err, "failed to emit export started event");
    }

    let result = write_pdf(&snapshot, &store);

    // finished fires on every exit path so the UI never stays hidden
    if let Err(err) = app.emit(EVENT_EXPORT_FINISHED, result.is_ok()) {
        warn!(error = %err, "failed to emit export finished event");
    }

    match &result {
        Ok(response) => info!(path = %response.path, "invoice exported"),
        Err(err) => error!(error = %err, "invoice export failed"),
    }
    result
}

fn write_pdf(
    snapshot: &fatura_core::InvoiceSnapshot,
    store: &State<'_, StoreState>,
) -> Result<ExportResponse, ApiError> {
    let surface = render(snapshot)?;
    let bytes = export(&surface)?;

    let filename = export_filename(&snapshot.invoice_number);
    let path = output_dir(store).join(&filename);
    std::fs::write(&path, &bytes).map_err(|err| {
        error!(path = %path.display(), error = %err, "failed to write PDF");
        ApiError::new(ErrorCode::ExportError, "Could not write the PDF file")
    })?;

    Ok(ExportResponse {
        path: path.display().to_string(),
        filename,
    })
}

/// The user's download directory, falling back to the store root when the
/// platform reports none (headless test environments, stripped containers).
fn output_dir(store: &State<'_, StoreState>) -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| store.store().root().to_path_buf())
}
