//! # Fatura Desktop Library
//!
//! Core library for the Fatura desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! fatura_desktop_lib/
//! ├── lib.rs            ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── session.rs    ◄─── Invoice form + editing/submitted phase
//! │   └── store.rs      ◄─── Draft store wrapper
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── session.rs    ◄─── Form edits, submission, re-editing
//! │   ├── draft.rs      ◄─── Confirmed draft clearing
//! │   ├── export.rs     ◄─── PDF export with window events
//! │   ├── reference.rs  ◄─── Currency/language/label lookups
//! │   └── logo.rs       ◄─── Logo upload and removal
//! └── error.rs          ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tauri::Manager;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use fatura_store::{BlobStore, DraftStore};
use state::{Session, SessionState, StoreState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                          │
/// │                                                                    │
/// │  1. Initialize Logging ──────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                           │
/// │     • Default: INFO, can be overridden with RUST_LOG               │
/// │                                                                    │
/// │  2. Open the Draft Store ────────────────────────────────────────► │
/// │     • macOS: ~/Library/Application Support/com.fatura.desktop/     │
/// │     • Windows: %APPDATA%/fatura/desktop/                           │
/// │     • Linux: ~/.local/share/desktop/                               │
/// │                                                                    │
/// │  3. Restore the Draft ───────────────────────────────────────────► │
/// │     • Persisted draft seeds the session (Editing phase)            │
/// │     • Missing or malformed draft → blank form                      │
/// │                                                                    │
/// │  4. Initialize State Objects ────────────────────────────────────► │
/// │     • SessionState: form + phase behind a Mutex                    │
/// │     • StoreState: DraftStore handle                                │
/// │                                                                    │
/// │  5. Build & Run Tauri App ───────────────────────────────────────► │
/// │     • Register all commands                                        │
/// │     • Manage state                                                 │
/// │     • Launch window                                                │
/// └────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Fatura Desktop Application");

    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let store_dir = get_store_path()?;
            info!(?store_dir, "Store path determined");

            let store = DraftStore::new(BlobStore::open(store_dir)?);

            // A persisted draft resumes the interrupted session
            let session = match store.load_draft() {
                Ok(Some(draft)) => {
                    info!(invoice_number = %draft.invoice_number, "draft restored");
                    Session::seeded(draft)
                }
                Ok(None) => Session::new(),
                Err(err) => {
                    warn!(error = %err, "draft restore failed, starting blank");
                    Session::new()
                }
            };

            app.manage(SessionState::new(session));
            app.manage(StoreState::new(store));

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Session commands
            commands::session::get_session,
            commands::session::update_field,
            commands::session::update_options,
            commands::session::add_item,
            commands::session::update_item,
            commands::session::remove_item,
            commands::session::submit_invoice,
            commands::session::edit_invoice,
            // Draft commands
            commands::draft::clear_draft,
            // Export commands
            commands::export::export_invoice,
            // Logo commands
            commands::logo::set_logo,
            commands::logo::clear_logo,
            // Reference commands
            commands::reference::list_currencies,
            commands::reference::list_languages,
            commands::reference::list_system_languages,
            commands::reference::get_labels,
            commands::reference::get_ui_strings,
            commands::reference::get_system_language,
            commands::reference::set_system_language,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fatura=trace` - Show trace for fatura crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fatura=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

/// Determines the draft-store directory based on the platform.
///
/// ## Development Override
/// Set `FATURA_STORE_PATH` environment variable to use a custom path.
fn get_store_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("FATURA_STORE_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "fatura", "desktop")
        .ok_or("Could not determine app data directory")?;

    Ok(proj_dirs.data_dir().join("store"))
}
