//! # Session Commands
//!
//! Tauri commands for editing the invoice form and driving the
//! editing/submitted state machine.
//!
//! ## Autosave
//! Every mutating command re-persists the draft after applying its edit.
//! Autosave failure is logged and swallowed: losing one autosave must not
//! fail the edit the user just made. Submission also persists, so the
//! draft a restart restores is at worst one failed write behind.

use serde::Serialize;
use tauri::State;
use tracing::{debug, info, warn};

use fatura_core::{DisplayOptions, InvoiceSnapshot, LineItem, Totals};

use crate::error::ApiError;
use crate::state::{HeaderField, InvoiceForm, ItemPatch, Phase, SessionState, StoreState};

/// Full session view for the frontend: working copy, phase, live totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub form: InvoiceForm,
    pub phase: Phase,
    pub totals: Totals,
}

/// Response for item-level edits: the touched item plus fresh totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub item: LineItem,
    pub totals: Totals,
}

/// Persists the current form as the draft. Failure is non-fatal.
fn autosave(session: &SessionState, store: &StoreState) {
    let snapshot = session.with_session(|s| s.form.freeze());
    if let Err(err) = store.store().save_draft(&snapshot) {
        warn!(error = %err, "draft autosave failed");
    }
}

/// Returns the current session: form content, phase, and live totals.
#[tauri::command]
pub fn get_session(session: State<'_, SessionState>) -> SessionResponse {
    debug!("get_session command");
    session.with_session(|s| SessionResponse {
        form: s.form.clone(),
        phase: s.phase,
        totals: s.form.preview_totals(),
    })
}

/// Sets one header field of the working copy.
#[tauri::command]
pub fn update_field(
    session: State<'_, SessionState>,
    store: State<'_, StoreState>,
    field: HeaderField,
    value: String,
) -> Result<(), ApiError> {
    debug!(?field, "update_field command");
    session.with_session_mut(|s| s.form.set_field(field, value))?;
    autosave(&*session, &*store);
    Ok(())
}

/// Replaces the display options (currency, language, precision, tax).
///
/// Returns fresh totals because toggling tax or changing its rate moves
/// the computed numbers immediately.
#[tauri::command]
pub fn update_options(
    session: State<'_, SessionState>,
    store: State<'_, StoreState>,
    options: DisplayOptions,
) -> Result<Totals, ApiError> {
    debug!(
        currency = %options.currency,
        tax_enabled = options.tax_enabled,
        "update_options command"
    );
    let totals = session.with_session_mut(|s| {
        s.form.set_options(options)?;
        Ok::<_, ApiError>(s.form.preview_totals())
    })?;
    autosave(&*session, &*store);
    Ok(totals)
}

/// Appends a fresh line item to the form.
#[tauri::command]
pub fn add_item(
    session: State<'_, SessionState>,
    store: State<'_, StoreState>,
) -> Result<ItemResponse, ApiError> {
    debug!("add_item command");
    let response = session.with_session_mut(|s| {
        let item = s.form.add_item()?;
        Ok::<_, ApiError>(ItemResponse {
            item,
            totals: s.form.preview_totals(),
        })
    })?;
    autosave(&*session, &*store);
    Ok(response)
}

/// Applies a partial edit to one line item.
///
/// The item's amount and the invoice totals are recomputed inside the same
/// locked edit, so the frontend never observes a stale amount.
#[tauri::command]
pub fn update_item(
    session: State<'_, SessionState>,
    store: State<'_, StoreState>,
    id: String,
    patch: ItemPatch,
) -> Result<ItemResponse, ApiError> {
    debug!(%id, "update_item command");
    let response = session.with_session_mut(|s| {
        let item = s.form.update_item(&id, patch)?;
        Ok::<_, ApiError>(ItemResponse {
            item,
            totals: s.form.preview_totals(),
        })
    })?;
    autosave(&*session, &*store);
    Ok(response)
}

/// Removes one line item. The last remaining item is protected.
#[tauri::command]
pub fn remove_item(
    session: State<'_, SessionState>,
    store: State<'_, StoreState>,
    id: String,
) -> Result<Totals, ApiError> {
    debug!(%id, "remove_item command");
    let totals = session.with_session_mut(|s| {
        s.form.remove_item(&id)?;
        Ok::<_, ApiError>(s.form.preview_totals())
    })?;
    autosave(&*session, &*store);
    Ok(totals)
}

/// Validates the form and freezes it into a snapshot.
///
/// On success the session moves to the submitted phase and the draft is
/// persisted, so a crash right after submission restores the same data.
#[tauri::command]
pub fn submit_invoice(
    session: State<'_, SessionState>,
    store: State<'_, StoreState>,
) -> Result<InvoiceSnapshot, ApiError> {
    let snapshot = session.with_session_mut(|s| s.submit())?;
    info!(
        invoice_number = %snapshot.invoice_number,
        items = snapshot.items.len(),
        total = snapshot.totals.total,
        "invoice submitted"
    );
    if let Err(err) = store.store().save_draft(&snapshot) {
        warn!(error = %err, "persisting submitted invoice failed");
    }
    Ok(snapshot)
}

/// Returns from the document view to the editable form. The working copy
/// already holds the submitted data.
#[tauri::command]
pub fn edit_invoice(session: State<'_, SessionState>) -> SessionResponse {
    info!("edit_invoice command");
    session.with_session_mut(|s| {
        s.edit_again();
        SessionResponse {
            form: s.form.clone(),
            phase: s.phase,
            totals: s.form.preview_totals(),
        }
    })
}
