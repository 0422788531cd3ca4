//! # Draft Commands
//!
//! Explicit draft lifecycle: the only user-visible draft operation is the
//! destructive clear. Saving is implicit (autosave on every edit, see
//! `commands::session`), and loading happens once at startup.

use tauri::State;
use tracing::info;

use crate::commands::session::SessionResponse;
use crate::error::ApiError;
use crate::state::{SessionState, StoreState};

/// Erases the persisted draft and resets the session to a blank form.
///
/// Destructive: requires `confirmed: true`, set by the frontend only after
/// the user accepts the confirmation dialog. An unconfirmed call is
/// rejected so a stray invoke cannot wipe the draft.
#[tauri::command]
pub fn clear_draft(
    session: State<'_, SessionState>,
    store: State<'_, StoreState>,
    confirmed: bool,
) -> Result<SessionResponse, ApiError> {
    if !confirmed {
        return Err(ApiError::session(
            "Draft clear requires user confirmation",
        ));
    }

    store.store().clear_draft()?;
    info!("draft cleared");

    Ok(session.with_session_mut(|s| {
        s.reset();
        SessionResponse {
            form: s.form.clone(),
            phase: s.phase,
            totals: s.form.preview_totals(),
        }
    }))
}
