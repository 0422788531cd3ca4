//! # Reference Data Tables
//!
//! Static lookup tables: currencies, document-language label sets, and
//! interface-language string sets. Pure data, no behavior beyond lookup.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Reference Data                                      │
//! │                                                                         │
//! │  currency code ───► { symbol, display name }          (currency.rs)     │
//! │  document lang ───► field-label set for the document  (labels.rs)       │
//! │  system lang ─────► interface strings for the tool    (ui.rs)           │
//! │                                                                         │
//! │  Plain immutable `&'static` tables. Unknown currency codes fall back    │
//! │  to the generic currency sign instead of failing.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod currency;
mod labels;
mod ui;

pub use currency::{currency_info, currency_symbol, CurrencyInfo, CURRENCIES, GENERIC_CURRENCY_SYMBOL};
pub use labels::{labels, DocumentLabels, LanguageInfo, LANGUAGES};
pub use ui::{ui_strings, SystemLanguageInfo, UiStrings, SYSTEM_LANGUAGES};
