//! # Fatura Desktop Application Entry Point
//!
//! This is the main entry point for the Tauri desktop application.
//!
//! ## Application Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                         Fatura Desktop                             │
//! │                                                                    │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                           │  │
//! │  │  ┌────────────────────────────────────────────────────────┐  │  │
//! │  │  │                      Frontend                          │  │  │
//! │  │  │  • Invoice Form        • Live Totals Preview           │  │  │
//! │  │  │  • Document View       • PDF Download                  │  │  │
//! │  │  └────────────────────────────────────────────────────────┘  │  │
//! │  │                              │                               │  │
//! │  │                     invoke('command')                        │  │
//! │  │                              │                               │  │
//! │  └──────────────────────────────┼───────────────────────────────┘  │
//! │                                 ▼                                  │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                 │  │
//! │  │                                                              │  │
//! │  │  main.rs ────► Delegates to lib.rs                           │  │
//! │  │  lib.rs ─────► Logging, draft restore, state, commands       │  │
//! │  │  commands/ ──► update_field, submit_invoice, export_invoice  │  │
//! │  │  state/ ─────► SessionState, StoreState                      │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! │                                 │                                  │
//! │                                 ▼                                  │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │  fatura-core / fatura-store / fatura-render                  │  │
//! │  │  (logic)       (draft files)   (A4 layout + PDF)             │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // The actual setup is in lib.rs for better testability
    fatura_desktop_lib::run();
}
