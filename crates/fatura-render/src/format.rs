//! # Display Formatting
//!
//! Textual rendering of stored values. Precision lives here and only here:
//! the snapshot keeps full-precision f64 values, and the configured decimal
//! places apply at the moment a number becomes a string.

use chrono::NaiveDate;
use fatura_core::DecimalPlaces;

/// Formats a monetary value with the configured number of decimal places.
pub fn format_money(value: f64, places: DecimalPlaces) -> String {
    format!("{:.*}", places.digits(), value)
}

/// Formats a quantity as entered, without monetary precision.
///
/// Quantities are counts, not amounts: `2` prints as `2`, `1.5` as `1.5`.
pub fn format_quantity(value: f64) -> String {
    format!("{value}")
}

/// Formats a date as DD/MM/YYYY for the printed document.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Derives the export filename from an invoice number.
///
/// Every character outside `[A-Za-z0-9]` becomes `_`, matching what common
/// filesystems tolerate without quoting. A blank invoice number falls back
/// to `invoice.pdf`.
pub fn export_filename(invoice_number: &str) -> String {
    let stem: String = invoice_number
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "invoice.pdf".to_string()
    } else {
        format!("{stem}.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_two_places() {
        assert_eq!(format_money(9.5, DecimalPlaces::Two), "9.50");
        assert_eq!(format_money(100.0, DecimalPlaces::Two), "100.00");
        assert_eq!(format_money(0.005, DecimalPlaces::Two), "0.01");
    }

    #[test]
    fn test_money_three_places() {
        assert_eq!(format_money(9.5, DecimalPlaces::Three), "9.500");
        assert_eq!(format_money(1.2345, DecimalPlaces::Three), "1.234");
    }

    #[test]
    fn test_precision_is_display_only() {
        // same value, two renderings; the value itself is untouched
        let v = 10.0 / 3.0;
        assert_eq!(format_money(v, DecimalPlaces::Two), "3.33");
        assert_eq!(format_money(v, DecimalPlaces::Three), "3.333");
    }

    #[test]
    fn test_quantity_keeps_raw_value() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(1.5), "1.5");
        assert_eq!(format_quantity(0.25), "0.25");
    }

    #[test]
    fn test_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2026");
    }

    #[test]
    fn test_filename_sanitization() {
        assert_eq!(export_filename("INV-2024/001"), "INV_2024_001.pdf");
        assert_eq!(export_filename("simple123"), "simple123.pdf");
        assert_eq!(export_filename("fatura no 7"), "fatura_no_7.pdf");
    }

    #[test]
    fn test_blank_invoice_number_falls_back() {
        assert_eq!(export_filename(""), "invoice.pdf");
        assert_eq!(export_filename("   "), "invoice.pdf");
    }
}
