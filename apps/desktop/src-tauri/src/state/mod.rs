//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    State Architecture                      │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │                   Tauri Runtime                      │  │
//! │  │  app.manage(session_state);                          │  │
//! │  │  app.manage(store_state);                            │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! │               │                       │                    │
//! │               ▼                       ▼                    │
//! │  ┌─────────────────────┐  ┌─────────────────────────┐      │
//! │  │    SessionState     │  │      StoreState         │      │
//! │  │                     │  │                         │      │
//! │  │  Arc<Mutex<         │  │  DraftStore             │      │
//! │  │    Session          │  │  (file-backed slots,    │      │
//! │  │  >>                 │  │   atomic replace)       │      │
//! │  └─────────────────────┘  └─────────────────────────┘      │
//! │                                                            │
//! │  THREAD SAFETY:                                            │
//! │  • SessionState: Protected by Arc<Mutex<T>>                │
//! │  • StoreState: whole-value reads/atomic replaces only      │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod session;
mod store;

pub use session::{HeaderField, InvoiceForm, ItemPatch, Phase, Session, SessionState};
pub use store::StoreState;
