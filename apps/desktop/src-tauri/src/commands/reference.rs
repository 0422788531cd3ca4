//! # Reference Commands
//!
//! Read-only lookups into the static reference tables (currencies,
//! document languages, interface languages, label sets) plus the persisted
//! interface-language preference.

use tauri::State;
use tracing::{debug, info};

use fatura_core::reference::{
    labels, ui_strings, CurrencyInfo, DocumentLabels, LanguageInfo, SystemLanguageInfo, UiStrings,
    CURRENCIES, LANGUAGES, SYSTEM_LANGUAGES,
};
use fatura_core::{DocumentLanguage, SystemLanguage};

use crate::error::ApiError;
use crate::state::StoreState;

/// Lists every supported currency (code, symbol, display name).
#[tauri::command]
pub fn list_currencies() -> &'static [CurrencyInfo] {
    CURRENCIES
}

/// Lists the selectable document languages.
#[tauri::command]
pub fn list_languages() -> &'static [LanguageInfo] {
    LANGUAGES
}

/// Lists the selectable interface languages.
#[tauri::command]
pub fn list_system_languages() -> &'static [SystemLanguageInfo] {
    SYSTEM_LANGUAGES
}

/// Returns the printed-document label set for one document language.
#[tauri::command]
pub fn get_labels(language: DocumentLanguage) -> &'static DocumentLabels {
    debug!(code = language.code(), "get_labels command");
    labels(language)
}

/// Returns the interface string bundle for one interface language.
#[tauri::command]
pub fn get_ui_strings(language: SystemLanguage) -> &'static UiStrings {
    ui_strings(language)
}

/// Returns the persisted interface language (default when none stored).
#[tauri::command]
pub fn get_system_language(store: State<'_, StoreState>) -> Result<SystemLanguage, ApiError> {
    Ok(store.store().load_language()?)
}

/// Persists the interface language and returns its string bundle.
#[tauri::command]
pub fn set_system_language(
    store: State<'_, StoreState>,
    language: SystemLanguage,
) -> Result<&'static UiStrings, ApiError> {
    store.store().save_language(language)?;
    info!(?language, "interface language changed");
    Ok(ui_strings(language))
}
