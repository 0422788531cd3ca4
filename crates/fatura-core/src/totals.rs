//! # Invoice Computation Engine
//!
//! Derives subtotal, tax amount, and total from a line-item list and the tax
//! configuration.
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where Totals Come From                               │
//! │                                                                         │
//! │  LineItem.amount ──┐                                                    │
//! │  LineItem.amount ──┼──► subtotal = Σ amount                             │
//! │  LineItem.amount ──┘         │                                          │
//! │                              ▼                                          │
//! │          tax_amount = tax_enabled ? subtotal × rate / 100 : 0           │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                 total = subtotal + tax_amount                           │
//! │                                                                         │
//! │  EVERY snapshot's totals flow through this one function                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Rounding Here
//! Rounding/truncation to the configured decimal places is a presentation
//! concern applied only at render time; stored numeric values keep full
//! precision. The engine also trusts non-negative inputs - quantity and
//! unit-price validation happens upstream in [`crate::validation`].

use crate::types::{LineItem, Totals};

/// Computes invoice totals from the item list and tax configuration.
///
/// Pure function: no side effects, deterministic for identical inputs.
///
/// ## Example
/// ```rust
/// use fatura_core::totals::compute_totals;
/// use fatura_core::types::LineItem;
///
/// let mut item = LineItem::new();
/// item.quantity = 2.0;
/// item.unit_price = 50.0;
/// item.recompute_amount();
///
/// let totals = compute_totals(&[item], true, 20.0);
/// assert_eq!(totals.subtotal, 100.0);
/// assert_eq!(totals.tax_amount, 20.0);
/// assert_eq!(totals.total, 120.0);
/// ```
pub fn compute_totals(items: &[LineItem], tax_enabled: bool, tax_rate_percent: f64) -> Totals {
    let subtotal: f64 = items.iter().map(|item| item.amount).sum();

    let tax_amount = if tax_enabled {
        subtotal * tax_rate_percent / 100.0
    } else {
        0.0
    };

    Totals {
        subtotal,
        tax_amount,
        total: subtotal + tax_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, unit_price: f64) -> LineItem {
        let mut item = LineItem::new();
        item.quantity = quantity;
        item.unit_price = unit_price;
        item.recompute_amount();
        item
    }

    #[test]
    fn test_example_scenario_with_tax() {
        // 1 item {quantity: 2, unitPrice: 50.00}, tax enabled at 20%
        let items = vec![item(2.0, 50.0)];
        let totals = compute_totals(&items, true, 20.0);

        assert_eq!(items[0].amount, 100.0);
        assert_eq!(totals.subtotal, 100.0);
        assert_eq!(totals.tax_amount, 20.0);
        assert_eq!(totals.total, 120.0);
    }

    #[test]
    fn test_example_scenario_tax_disabled() {
        // 2 items {qty: 1, price: 10}, {qty: 3, price: 5}, tax disabled
        let items = vec![item(1.0, 10.0), item(3.0, 5.0)];
        let totals = compute_totals(&items, false, 20.0);

        assert_eq!(totals.subtotal, 25.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total, 25.0);
    }

    #[test]
    fn test_empty_item_list_yields_zero() {
        let totals = compute_totals(&[], true, 20.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn test_all_zero_amounts_yield_zero_subtotal() {
        let items = vec![item(1.0, 0.0), item(4.0, 0.0)];
        let totals = compute_totals(&items, true, 20.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn test_single_item_subtotal_equals_amount() {
        let items = vec![item(1.5, 8.0)];
        let totals = compute_totals(&items, false, 0.0);
        assert_eq!(totals.subtotal, items[0].amount);
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn test_zero_tax_rate_with_tax_enabled() {
        let items = vec![item(2.0, 50.0)];
        let totals = compute_totals(&items, true, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn test_idempotence() {
        // Pure function: identical inputs yield identical outputs
        let items = vec![item(2.0, 50.0), item(3.0, 9.99)];
        let first = compute_totals(&items, true, 17.5);
        let second = compute_totals(&items, true, 17.5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_rounding_applied() {
        // 3 × 3.333 = 9.999; the engine must not round to display precision
        let items = vec![item(3.0, 3.333)];
        let totals = compute_totals(&items, false, 0.0);
        assert_eq!(totals.subtotal, 3.0 * 3.333);
    }
}
