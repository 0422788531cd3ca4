//! # Tauri Commands
//!
//! All commands exposed to the frontend via `invoke()`.
//!
//! ## Command Pattern
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                              │
//! │                                                                    │
//! │  Frontend (WebView)                                                │
//! │  ──────────────────                                                │
//! │  import { invoke } from '@tauri-apps/api/core';                    │
//! │                                                                    │
//! │  await invoke('update_item', {                                     │
//! │    id: 'a1b2...',                                                  │
//! │    patch: { quantity: 2 }                                          │
//! │  });                                                               │
//! │         │                                                          │
//! │         │ (IPC via WebView)                                        │
//! │         ▼                                                          │
//! │  Rust Backend                                                      │
//! │  ────────────                                                      │
//! │  #[tauri::command]                                                 │
//! │  fn update_item(                                                   │
//! │      session: State<'_, SessionState>,  ◄── Injected by Tauri      │
//! │      store: State<'_, StoreState>,      ◄── Injected by Tauri      │
//! │      id: String,                        ◄── From invoke params     │
//! │      patch: ItemPatch,                  ◄── From invoke params     │
//! │  ) -> Result<ItemResponse, ApiError>                               │
//! │         │                                                          │
//! │         │ (JSON serialization)                                     │
//! │         ▼                                                          │
//! │  Frontend receives: { item, totals }                               │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn get_session(session: State<'_, SessionState>)
//!
//! // Only needs the store
//! fn set_system_language(store: State<'_, StoreState>, ...)
//!
//! // Needs both (edits autosave the draft)
//! fn update_field(session: State<'_, SessionState>, store: State<'_, StoreState>, ...)
//! ```

pub mod draft;
pub mod export;
pub mod logo;
pub mod reference;
pub mod session;
