//! # Invoice Session State
//!
//! Manages the working copy of the invoice being edited and the
//! editing/submitted phase of the session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the form
//! 2. Only one command should modify the form at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Invoice Session Lifecycle                        │
//! │                                                                     │
//! │  ┌──────────┐  submit (valid)   ┌───────────┐  export_invoice      │
//! │  │ Editing  │──────────────────►│ Submitted │─────────────────►PDF │
//! │  │          │◄──────────────────│           │                      │
//! │  └──────────┘   edit_again      └───────────┘                      │
//! │       │                                                             │
//! │       │ update_field / update_item / add_item / remove_item         │
//! │       │ (each edit recomputes the affected amount synchronously)    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  clear_draft(confirmed) ──► blank form, persisted draft erased      │
//! │                                                                     │
//! │  NOTE: editing after submission reloads the submitted data into     │
//! │        the working copy; the next submission produces a NEW         │
//! │        snapshot. Snapshots are never edited in place.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use fatura_core::error::{CoreError, CoreResult};
use fatura_core::validation::{
    is_blank, validate_quantity, validate_tax_rate, validate_unit_price, MissingField,
};
use fatura_core::{
    compute_totals, DisplayOptions, InvoiceSnapshot, LineItem, ValidationError, DEFAULT_DUE_DAYS,
    DEFAULT_TERMS, MAX_LINE_ITEMS,
};

// =============================================================================
// Invoice Form (working copy)
// =============================================================================

/// The mutable working copy of the invoice.
///
/// Holds the same content as an [`InvoiceSnapshot`] minus the computed
/// totals: totals only exist on snapshots, produced at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceForm {
    pub company_name: String,
    pub company_logo: Option<String>,
    pub company_address: String,
    pub company_email: String,
    pub company_phone: String,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub po_number: String,
    pub due_date: NaiveDate,
    pub bill_to: String,
    pub ship_to: String,
    pub items: Vec<LineItem>,
    pub options: DisplayOptions,
    pub terms_and_conditions: String,
    pub notes: String,
    pub payment_details: String,
}

impl Default for InvoiceForm {
    /// A blank form: dated today, due in [`DEFAULT_DUE_DAYS`] days, one
    /// defaulted line item, default terms text.
    fn default() -> Self {
        let today = chrono::Local::now().date_naive();
        InvoiceForm {
            company_name: String::new(),
            company_logo: None,
            company_address: String::new(),
            company_email: String::new(),
            company_phone: String::new(),
            invoice_number: String::new(),
            invoice_date: today,
            po_number: String::new(),
            due_date: today + Days::new(DEFAULT_DUE_DAYS),
            bill_to: String::new(),
            ship_to: String::new(),
            items: vec![LineItem::new()],
            options: DisplayOptions::default(),
            terms_and_conditions: DEFAULT_TERMS.to_string(),
            notes: String::new(),
            payment_details: String::new(),
        }
    }
}

/// Header-level fields addressable by [`InvoiceForm::set_field`].
///
/// Line items and display options have their own richer operations; this
/// enum covers the scalar text/date fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderField {
    CompanyName,
    CompanyAddress,
    CompanyEmail,
    CompanyPhone,
    InvoiceNumber,
    InvoiceDate,
    PoNumber,
    DueDate,
    BillTo,
    ShipTo,
    TermsAndConditions,
    Notes,
    PaymentDetails,
}

/// A partial edit to one line item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub quantity: Option<f64>,
    pub description: Option<String>,
    pub unit_price: Option<f64>,
}

impl InvoiceForm {
    /// Rebuilds a working copy from a previously submitted or persisted
    /// snapshot. Totals are dropped; they are recomputed at the next
    /// submission.
    pub fn from_snapshot(snapshot: InvoiceSnapshot) -> Self {
        InvoiceForm {
            company_name: snapshot.company_name,
            company_logo: snapshot.company_logo,
            company_address: snapshot.company_address,
            company_email: snapshot.company_email,
            company_phone: snapshot.company_phone,
            invoice_number: snapshot.invoice_number,
            invoice_date: snapshot.invoice_date,
            po_number: snapshot.po_number,
            due_date: snapshot.due_date,
            bill_to: snapshot.bill_to,
            ship_to: snapshot.ship_to,
            items: snapshot.items,
            options: snapshot.options,
            terms_and_conditions: snapshot.terms_and_conditions,
            notes: snapshot.notes,
            payment_details: snapshot.payment_details,
        }
    }

    /// Sets one header field from its string representation.
    ///
    /// Date fields parse ISO `YYYY-MM-DD` (the wire format of HTML date
    /// inputs); everything else is stored verbatim.
    pub fn set_field(&mut self, field: HeaderField, value: String) -> CoreResult<()> {
        match field {
            HeaderField::CompanyName => self.company_name = value,
            HeaderField::CompanyAddress => self.company_address = value,
            HeaderField::CompanyEmail => self.company_email = value,
            HeaderField::CompanyPhone => self.company_phone = value,
            HeaderField::InvoiceNumber => self.invoice_number = value,
            HeaderField::InvoiceDate => self.invoice_date = parse_date("invoiceDate", &value)?,
            HeaderField::PoNumber => self.po_number = value,
            HeaderField::DueDate => self.due_date = parse_date("dueDate", &value)?,
            HeaderField::BillTo => self.bill_to = value,
            HeaderField::ShipTo => self.ship_to = value,
            HeaderField::TermsAndConditions => self.terms_and_conditions = value,
            HeaderField::Notes => self.notes = value,
            HeaderField::PaymentDetails => self.payment_details = value,
        }
        Ok(())
    }

    /// Replaces the display options after validating the tax rate.
    pub fn set_options(&mut self, options: DisplayOptions) -> CoreResult<()> {
        validate_tax_rate(options.tax_rate)?;
        self.options = options;
        Ok(())
    }

    /// Appends a fresh defaulted line item and returns it.
    pub fn add_item(&mut self) -> CoreResult<LineItem> {
        if self.items.len() >= MAX_LINE_ITEMS {
            return Err(CoreError::TooManyItems {
                max: MAX_LINE_ITEMS,
            });
        }
        let item = LineItem::new();
        self.items.push(item.clone());
        Ok(item)
    }

    /// Applies a patch to the item with the given id, recomputing its
    /// amount in the same edit. Returns the updated item.
    pub fn update_item(&mut self, id: &str, patch: ItemPatch) -> CoreResult<LineItem> {
        if let Some(quantity) = patch.quantity {
            validate_quantity(quantity)?;
        }
        if let Some(unit_price) = patch.unit_price {
            validate_unit_price(unit_price)?;
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;

        if let Some(quantity) = patch.quantity {
            item.quantity = quantity;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(unit_price) = patch.unit_price {
            item.unit_price = unit_price;
        }
        item.recompute_amount();
        Ok(item.clone())
    }

    /// Removes the item with the given id. The last remaining item cannot
    /// be removed; an invoice always has at least one row.
    pub fn remove_item(&mut self, id: &str) -> CoreResult<()> {
        if self.items.len() == 1 {
            return Err(CoreError::LastItem);
        }
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return Err(CoreError::ItemNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Collects the required fields that are still blank or invalid.
    pub fn missing_fields(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if is_blank(&self.company_name) {
            missing.push(MissingField::CompanyName);
        }
        if is_blank(&self.company_address) {
            missing.push(MissingField::CompanyAddress);
        }
        if is_blank(&self.invoice_number) {
            missing.push(MissingField::InvoiceNumber);
        }
        if is_blank(&self.bill_to) {
            missing.push(MissingField::BillTo);
        }
        if is_blank(&self.ship_to) {
            missing.push(MissingField::ShipTo);
        }
        if self.options.tax_enabled && validate_tax_rate(self.options.tax_rate).is_err() {
            missing.push(MissingField::TaxRate);
        }
        missing
    }

    /// Live totals for the preview pane. Same engine as submission.
    pub fn preview_totals(&self) -> fatura_core::Totals {
        compute_totals(
            &self.items,
            self.options.tax_enabled,
            self.options.tax_rate,
        )
    }

    /// Freezes the form into an immutable snapshot.
    ///
    /// Fails with the full list of missing required fields when the form is
    /// incomplete, so the frontend can highlight every gap at once.
    pub fn submit(&self) -> CoreResult<InvoiceSnapshot> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CoreError::MissingFields(missing));
        }
        Ok(self.freeze())
    }

    /// Freezes the current form content without required-field checks.
    /// Used for draft autosave, where an incomplete invoice is normal.
    pub fn freeze(&self) -> InvoiceSnapshot {
        let totals = self.preview_totals();
        InvoiceSnapshot {
            company_name: self.company_name.clone(),
            company_logo: self.company_logo.clone(),
            company_address: self.company_address.clone(),
            company_email: self.company_email.clone(),
            company_phone: self.company_phone.clone(),
            invoice_number: self.invoice_number.clone(),
            invoice_date: self.invoice_date,
            po_number: self.po_number.clone(),
            due_date: self.due_date,
            bill_to: self.bill_to.clone(),
            ship_to: self.ship_to.clone(),
            items: self.items.clone(),
            options: self.options.clone(),
            totals,
            terms_and_conditions: self.terms_and_conditions.clone(),
            notes: self.notes.clone(),
            payment_details: self.payment_details.clone(),
        }
    }
}

fn parse_date(field: &str, value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CoreError::Validation(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        })
    })
}

// =============================================================================
// Session (form + phase)
// =============================================================================

/// Which side of the form/document divide the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// The form is open for edits; no document exists yet.
    Editing,
    /// A snapshot has been produced; the document view is active.
    Submitted,
}

/// One invoice-editing session.
#[derive(Debug, Clone)]
pub struct Session {
    pub form: InvoiceForm,
    pub phase: Phase,
    /// The most recent submission, kept for export and for re-editing.
    pub last_snapshot: Option<InvoiceSnapshot>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            form: InvoiceForm::default(),
            phase: Phase::Editing,
            last_snapshot: None,
        }
    }

    /// Starts a session from a persisted draft.
    pub fn seeded(snapshot: InvoiceSnapshot) -> Self {
        Session {
            form: InvoiceForm::from_snapshot(snapshot),
            phase: Phase::Editing,
            last_snapshot: None,
        }
    }

    /// Validates and freezes the form; moves to the submitted phase.
    pub fn submit(&mut self) -> CoreResult<InvoiceSnapshot> {
        let snapshot = self.form.submit()?;
        self.phase = Phase::Submitted;
        self.last_snapshot = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Returns from the document view to editing. The working copy already
    /// holds the submitted data, so nothing is lost.
    pub fn edit_again(&mut self) {
        self.phase = Phase::Editing;
    }

    /// Drops everything and starts over with a blank form.
    pub fn reset(&mut self) {
        *self = Session::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

// =============================================================================
// Tauri-managed state
// =============================================================================

/// Tauri-managed session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>`: commands are short-lived and most of them
/// write, so a plain Mutex beats a RwLock here.
#[derive(Debug)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    pub fn new(session: Session) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new(Session::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fatura_core::DocumentLanguage;

    fn filled_form() -> InvoiceForm {
        let mut form = InvoiceForm::default();
        form.company_name = "Acme Ltd".to_string();
        form.company_address = "1 Main Street".to_string();
        form.invoice_number = "INV-001".to_string();
        form.bill_to = "Customer".to_string();
        form.ship_to = "Customer Warehouse".to_string();
        form.update_item(
            &form.items[0].id.clone(),
            ItemPatch {
                quantity: Some(2.0),
                description: Some("Consulting".to_string()),
                unit_price: Some(50.0),
            },
        )
        .unwrap();
        form
    }

    #[test]
    fn test_default_form_seeds_dates_and_terms() {
        let form = InvoiceForm::default();
        assert_eq!(form.due_date - form.invoice_date, chrono::Duration::days(30));
        assert_eq!(form.terms_and_conditions, DEFAULT_TERMS);
        assert_eq!(form.items.len(), 1);
    }

    #[test]
    fn test_set_field_parses_dates() {
        let mut form = InvoiceForm::default();
        form.set_field(HeaderField::InvoiceDate, "2026-03-07".to_string())
            .unwrap();
        assert_eq!(
            form.invoice_date,
            NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
        );

        let err = form
            .set_field(HeaderField::DueDate, "07/03/2026".to_string())
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_update_item_recomputes_amount() {
        let mut form = InvoiceForm::default();
        let id = form.items[0].id.clone();
        let item = form
            .update_item(
                &id,
                ItemPatch {
                    quantity: Some(3.0),
                    unit_price: Some(9.5),
                    ..ItemPatch::default()
                },
            )
            .unwrap();
        assert_eq!(item.amount, 28.5);
    }

    #[test]
    fn test_update_unknown_item_fails() {
        let mut form = InvoiceForm::default();
        let err = form
            .update_item("nope", ItemPatch::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(_)));
    }

    #[test]
    fn test_update_item_rejects_negative_quantity() {
        let mut form = InvoiceForm::default();
        let id = form.items[0].id.clone();
        let err = form
            .update_item(
                &id,
                ItemPatch {
                    quantity: Some(-1.0),
                    ..ItemPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        // the item is untouched on failure
        assert_eq!(form.items[0].quantity, 1.0);
    }

    #[test]
    fn test_last_item_cannot_be_removed() {
        let mut form = InvoiceForm::default();
        let id = form.items[0].id.clone();
        assert!(matches!(form.remove_item(&id), Err(CoreError::LastItem)));

        form.add_item().unwrap();
        form.remove_item(&id).unwrap();
        assert_eq!(form.items.len(), 1);
    }

    #[test]
    fn test_item_cap() {
        let mut form = InvoiceForm::default();
        for _ in 1..MAX_LINE_ITEMS {
            form.add_item().unwrap();
        }
        assert!(matches!(
            form.add_item(),
            Err(CoreError::TooManyItems { .. })
        ));
    }

    #[test]
    fn test_submit_reports_all_missing_fields() {
        let form = InvoiceForm::default();
        let err = form.submit().unwrap_err();
        match err {
            CoreError::MissingFields(missing) => {
                assert!(missing.contains(&MissingField::CompanyName));
                assert!(missing.contains(&MissingField::InvoiceNumber));
                assert!(missing.contains(&MissingField::BillTo));
                assert!(missing.contains(&MissingField::ShipTo));
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_computes_totals() {
        let snapshot = filled_form().submit().unwrap();
        assert_eq!(snapshot.totals.subtotal, 100.0);
        assert_eq!(snapshot.totals.tax_amount, 20.0);
        assert_eq!(snapshot.totals.total, 120.0);
    }

    #[test]
    fn test_session_state_machine() {
        let mut session = Session::new();
        assert_eq!(session.phase, Phase::Editing);

        session.form = filled_form();
        let snapshot = session.submit().unwrap();
        assert_eq!(session.phase, Phase::Submitted);
        assert_eq!(session.last_snapshot.as_ref(), Some(&snapshot));

        session.edit_again();
        assert_eq!(session.phase, Phase::Editing);
        // working copy still holds the submitted data
        assert_eq!(session.form.invoice_number, "INV-001");
    }

    #[test]
    fn test_resubmission_produces_new_snapshot() {
        let mut session = Session::new();
        session.form = filled_form();
        let first = session.submit().unwrap();

        session.edit_again();
        session
            .form
            .set_field(HeaderField::InvoiceNumber, "INV-002".to_string())
            .unwrap();
        let second = session.submit().unwrap();

        assert_eq!(first.invoice_number, "INV-001");
        assert_eq!(second.invoice_number, "INV-002");
    }

    #[test]
    fn test_seeded_session_preserves_item_ids() {
        let snapshot = filled_form().submit().unwrap();
        let ids: Vec<String> = snapshot.items.iter().map(|i| i.id.clone()).collect();
        let session = Session::seeded(snapshot);
        let seeded_ids: Vec<String> = session.form.items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(seeded_ids, ids);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session::new();
        session.form = filled_form();
        session.submit().unwrap();

        session.reset();
        assert_eq!(session.phase, Phase::Editing);
        assert!(session.last_snapshot.is_none());
        assert!(session.form.company_name.is_empty());
    }

    #[test]
    fn test_set_options_rejects_out_of_range_tax() {
        let mut form = InvoiceForm::default();
        let mut options = DisplayOptions::default();
        options.tax_rate = 150.0;
        assert!(form.set_options(options).is_err());

        let mut options = DisplayOptions::default();
        options.language = DocumentLanguage::Ar;
        options.tax_rate = 15.0;
        form.set_options(options).unwrap();
        assert_eq!(form.options.tax_rate, 15.0);
    }
}
