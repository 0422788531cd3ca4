//! # Invoice Document Layout
//!
//! Translates an [`InvoiceSnapshot`] into layout blocks: header band with
//! company identity and the localized document title, addresses and dates,
//! the line-item table, totals, and the optional trailing sections.
//!
//! All printed labels come from the snapshot's document language; the
//! snapshot's display options pick currency symbol and decimal places. For
//! Arabic the entire page is mirrored: every anchor flips across the
//! vertical center line and left/right alignment swap.

use fatura_core::reference::{currency_symbol, labels, DocumentLabels};
use fatura_core::{InvoiceSnapshot, LineItem};
use tracing::debug;

use crate::error::RenderResult;
use crate::format::{format_date, format_money, format_quantity};
use crate::layout::{
    paginate, Align, Block, BlockImage, Surface, CONTENT_RIGHT_MM, MARGIN_MM, PAGE_WIDTH_MM,
};
use crate::logo::decode_logo;

// =============================================================================
// Type Scale
// =============================================================================

const TITLE_PT: f32 = 24.0;
const HEADING_PT: f32 = 12.0;
const BODY_PT: f32 = 10.0;
const SMALL_PT: f32 = 9.0;

const LINE_MM: f32 = 5.0;

// Item table column anchors (LTR reading order).
const COL_QTY_MM: f32 = MARGIN_MM;
const COL_DESC_MM: f32 = 35.0;
const COL_UNIT_MM: f32 = 160.0;
const COL_AMOUNT_MM: f32 = CONTENT_RIGHT_MM;

const LOGO_BOX_W_MM: f32 = 45.0;
const LOGO_BOX_H_MM: f32 = 22.0;

// =============================================================================
// Direction
// =============================================================================

/// Mirrors anchors and alignment for right-to-left documents.
#[derive(Clone, Copy)]
struct Dir {
    rtl: bool,
}

impl Dir {
    fn x(&self, x_mm: f32) -> f32 {
        if self.rtl {
            PAGE_WIDTH_MM - x_mm
        } else {
            x_mm
        }
    }

    fn align(&self, align: Align) -> Align {
        if !self.rtl {
            return align;
        }
        match align {
            Align::Left => Align::Right,
            Align::Right => Align::Left,
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Lays the snapshot out as a paginated A4 surface.
pub fn render(snapshot: &InvoiceSnapshot) -> RenderResult<Surface> {
    let dir = Dir {
        rtl: snapshot.options.language.is_rtl(),
    };
    let labels = labels(snapshot.options.language);
    let symbol = currency_symbol(&snapshot.options.currency);
    let money = |value: f64| format!("{symbol}{}", format_money(value, snapshot.options.decimal_places));

    let mut blocks = Vec::new();
    blocks.push(header_block(snapshot, labels, dir)?);
    blocks.push(parties_block(snapshot, labels, dir));
    blocks.push(table_header_block(labels, dir));
    for item in &snapshot.items {
        blocks.push(item_row_block(item, dir, &money));
    }
    blocks.push(totals_block(snapshot, labels, dir, &money));

    if !snapshot.payment_details.trim().is_empty() {
        blocks.push(text_section_block(labels.payment_details, &snapshot.payment_details, dir));
    }
    if !snapshot.terms_and_conditions.trim().is_empty() {
        blocks.push(text_section_block(
            labels.terms_and_conditions,
            &snapshot.terms_and_conditions,
            dir,
        ));
    }
    if !snapshot.notes.trim().is_empty() {
        blocks.push(text_section_block(labels.notes, &snapshot.notes, dir));
    }

    debug!(
        blocks = blocks.len(),
        items = snapshot.items.len(),
        rtl = dir.rtl,
        "invoice laid out"
    );

    let title = if snapshot.invoice_number.trim().is_empty() {
        labels.invoice.to_string()
    } else {
        format!("{} {}", labels.invoice, snapshot.invoice_number)
    };
    Ok(paginate(title, blocks))
}

/// Company identity and logo on one side, the big localized title and the
/// invoice number on the other.
fn header_block(
    snapshot: &InvoiceSnapshot,
    labels: &DocumentLabels,
    dir: Dir,
) -> RenderResult<Block> {
    let mut company_lines: Vec<&str> = Vec::new();
    company_lines.extend(snapshot.company_address.lines());
    if !snapshot.company_email.trim().is_empty() {
        company_lines.push(snapshot.company_email.as_str());
    }
    if !snapshot.company_phone.trim().is_empty() {
        company_lines.push(snapshot.company_phone.as_str());
    }

    let has_logo = snapshot.company_logo.is_some();
    let name_dy = if has_logo { LOGO_BOX_H_MM + 4.0 } else { 2.0 };
    let mut dy = name_dy;

    let mut block = Block::new(0.0).span(
        &snapshot.company_name,
        dir.x(MARGIN_MM),
        dy,
        16.0,
        true,
        dir.align(Align::Left),
    );
    for line in &company_lines {
        dy += LINE_MM;
        block = block.span(*line, dir.x(MARGIN_MM), dy, BODY_PT, false, dir.align(Align::Left));
    }

    // Title column, anchored to the opposite edge.
    block = block
        .span(labels.invoice, dir.x(CONTENT_RIGHT_MM), 4.0, TITLE_PT, true, dir.align(Align::Right))
        .span(
            format!("{} {}", labels.invoice_number, snapshot.invoice_number),
            dir.x(CONTENT_RIGHT_MM),
            12.0,
            HEADING_PT,
            true,
            dir.align(Align::Right),
        );

    if let Some(encoded) = &snapshot.company_logo {
        block.image = Some(BlockImage {
            data: decode_logo(encoded)?,
            x_mm: dir.x(MARGIN_MM),
            dy_mm: 0.0,
            max_width_mm: LOGO_BOX_W_MM,
            max_height_mm: LOGO_BOX_H_MM,
            align: dir.align(Align::Left),
        });
    }

    block.height_mm = (dy + LINE_MM).max(20.0) + 6.0;
    let rule_dy = block.height_mm - 3.0;
    block = block.rule(rule_dy);
    Ok(block)
}

/// Bill-to and ship-to addresses plus the date/PO metadata column.
fn parties_block(snapshot: &InvoiceSnapshot, labels: &DocumentLabels, dir: Dir) -> Block {
    let bill_lines: Vec<&str> = snapshot.bill_to.lines().collect();
    let ship_lines: Vec<&str> = snapshot.ship_to.lines().collect();

    let mut meta: Vec<(&str, String)> = vec![
        (labels.invoice_date, format_date(snapshot.invoice_date)),
        (labels.due_date, format_date(snapshot.due_date)),
    ];
    if !snapshot.po_number.trim().is_empty() {
        meta.push((labels.po_number, snapshot.po_number.clone()));
    }

    let mut block = Block::new(0.0)
        .span(labels.bill_to, dir.x(MARGIN_MM), 4.0, HEADING_PT, true, dir.align(Align::Left))
        .span(labels.ship_to, dir.x(85.0), 4.0, HEADING_PT, true, dir.align(Align::Left));

    let mut dy = 4.0;
    let rows = bill_lines.len().max(ship_lines.len()).max(meta.len());
    for row in 0..rows {
        dy = 4.0 + LINE_MM * (row as f32 + 1.0);
        if let Some(line) = bill_lines.get(row) {
            block = block.span(*line, dir.x(MARGIN_MM), dy, BODY_PT, false, dir.align(Align::Left));
        }
        if let Some(line) = ship_lines.get(row) {
            block = block.span(*line, dir.x(85.0), dy, BODY_PT, false, dir.align(Align::Left));
        }
        if let Some((label, value)) = meta.get(row) {
            block = block.span(
                format!("{label}: {value}"),
                dir.x(CONTENT_RIGHT_MM),
                dy,
                BODY_PT,
                false,
                dir.align(Align::Right),
            );
        }
    }

    block.height_mm = dy + 8.0;
    block
}

/// Column captions for the line-item table.
fn table_header_block(labels: &DocumentLabels, dir: Dir) -> Block {
    let mut block = Block::new(10.0)
        .span(labels.quantity, dir.x(COL_QTY_MM), 4.0, BODY_PT, true, dir.align(Align::Left))
        .span(labels.description, dir.x(COL_DESC_MM), 4.0, BODY_PT, true, dir.align(Align::Left))
        .span(labels.unit_price, dir.x(COL_UNIT_MM), 4.0, BODY_PT, true, dir.align(Align::Right))
        .span(labels.amount, dir.x(COL_AMOUNT_MM), 4.0, BODY_PT, true, dir.align(Align::Right));
    block = block.rule(7.0);
    block
}

fn item_row_block(item: &LineItem, dir: Dir, money: &impl Fn(f64) -> String) -> Block {
    let qty = format_quantity(item.quantity);
    Block::new(7.0)
        .span(qty, dir.x(COL_QTY_MM), 4.5, BODY_PT, false, dir.align(Align::Left))
        .span(&item.description, dir.x(COL_DESC_MM), 4.5, BODY_PT, false, dir.align(Align::Left))
        .span(money(item.unit_price), dir.x(COL_UNIT_MM), 4.5, BODY_PT, false, dir.align(Align::Right))
        .span(money(item.amount), dir.x(COL_AMOUNT_MM), 4.5, BODY_PT, false, dir.align(Align::Right))
}

/// Subtotal, the tax line when tax participates, and the emphasized total.
fn totals_block(
    snapshot: &InvoiceSnapshot,
    labels: &DocumentLabels,
    dir: Dir,
    money: &impl Fn(f64) -> String,
) -> Block {
    let label_x = dir.x(140.0);
    let value_x = dir.x(COL_AMOUNT_MM);
    let label_align = dir.align(Align::Left);
    let value_align = dir.align(Align::Right);

    let mut block = Block::new(0.0).rule(2.0).span(
        labels.subtotal,
        label_x,
        8.0,
        BODY_PT,
        false,
        label_align,
    );
    block = block.span(money(snapshot.totals.subtotal), value_x, 8.0, BODY_PT, false, value_align);

    let mut dy = 8.0;
    if snapshot.options.tax_enabled {
        dy += 6.0;
        let tax_label = format!("{} ({}%)", labels.tax, trim_rate(snapshot.options.tax_rate));
        block = block
            .span(tax_label, label_x, dy, BODY_PT, false, label_align)
            .span(money(snapshot.totals.tax_amount), value_x, dy, BODY_PT, false, value_align);
    }

    dy += 8.0;
    block = block
        .span(labels.total, label_x, dy, HEADING_PT, true, label_align)
        .span(money(snapshot.totals.total), value_x, dy, HEADING_PT, true, value_align);

    block.height_mm = dy + 8.0;
    block
}

/// A labeled multi-line text section (payment details, terms, notes).
fn text_section_block(label: &str, body: &str, dir: Dir) -> Block {
    let mut block = Block::new(0.0).span(
        label,
        dir.x(MARGIN_MM),
        6.0,
        HEADING_PT,
        true,
        dir.align(Align::Left),
    );
    let mut dy = 6.0;
    for line in body.lines() {
        dy += LINE_MM;
        block = block.span(line, dir.x(MARGIN_MM), dy, SMALL_PT, false, dir.align(Align::Left));
    }
    block.height_mm = dy + 4.0;
    block
}

/// Renders a tax rate without trailing zeros, so 20.0 prints as "20" and
/// 7.5 as "7.5".
fn trim_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{}", rate as i64)
    } else {
        format!("{rate}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fatura_core::{compute_totals, DisplayOptions, DocumentLanguage};

    fn snapshot() -> InvoiceSnapshot {
        let mut snapshot = InvoiceSnapshot::default();
        snapshot.company_name = "Acme Ltd".to_string();
        snapshot.invoice_number = "INV-001".to_string();
        snapshot.bill_to = "Customer\nMain Street 1".to_string();
        snapshot.ship_to = "Customer Warehouse".to_string();
        let mut item = LineItem::new();
        item.quantity = 2.0;
        item.unit_price = 50.0;
        item.recompute_amount();
        snapshot.items = vec![item];
        snapshot.totals = compute_totals(&snapshot.items, true, 20.0);
        snapshot
    }

    fn all_spans(surface: &Surface) -> Vec<&crate::layout::Span> {
        surface
            .pages
            .iter()
            .flat_map(|p| &p.blocks)
            .flat_map(|b| &b.block.spans)
            .collect()
    }

    #[test]
    fn test_english_document_has_localized_title() {
        let surface = render(&snapshot()).unwrap();
        let spans = all_spans(&surface);
        assert!(spans.iter().any(|s| s.text == "INVOICE"));
        assert!(spans.iter().any(|s| s.text == "Bill To"));
    }

    #[test]
    fn test_arabic_document_mirrors_alignment() {
        let mut arabic = snapshot();
        arabic.options.language = DocumentLanguage::Ar;
        let surface = render(&arabic).unwrap();
        let spans = all_spans(&surface);
        // the title anchors to the left edge in RTL, mirrored from the right
        let title = spans.iter().find(|s| s.text == "فاتورة").unwrap();
        assert_eq!(title.align, Align::Left);
        assert!(title.x_mm < PAGE_WIDTH_MM / 2.0);
    }

    #[test]
    fn test_tax_disabled_omits_tax_row() {
        let mut no_tax = snapshot();
        no_tax.options = DisplayOptions {
            tax_enabled: false,
            ..no_tax.options
        };
        no_tax.totals = compute_totals(&no_tax.items, false, 20.0);
        let surface = render(&no_tax).unwrap();
        assert!(!all_spans(&surface).iter().any(|s| s.text.starts_with("Tax (")));
    }

    #[test]
    fn test_tax_enabled_shows_rate_in_label() {
        let surface = render(&snapshot()).unwrap();
        assert!(all_spans(&surface).iter().any(|s| s.text == "Tax (20%)"));
    }

    #[test]
    fn test_blank_sections_are_omitted() {
        let mut bare = snapshot();
        bare.terms_and_conditions.clear();
        bare.notes.clear();
        bare.payment_details.clear();
        let surface = render(&bare).unwrap();
        let spans = all_spans(&surface);
        assert!(!spans.iter().any(|s| s.text == "Terms & Conditions"));
        assert!(!spans.iter().any(|s| s.text == "Notes"));
        assert!(!spans.iter().any(|s| s.text == "Payment Details"));
    }

    #[test]
    fn test_currency_symbol_prefixes_amounts() {
        let surface = render(&snapshot()).unwrap();
        assert!(all_spans(&surface).iter().any(|s| s.text == "$120.00"));
    }

    #[test]
    fn test_unknown_currency_uses_generic_symbol() {
        let mut odd = snapshot();
        odd.options.currency = "XXX".to_string();
        let surface = render(&odd).unwrap();
        assert!(all_spans(&surface).iter().any(|s| s.text == "¤120.00"));
    }

    #[test]
    fn test_quantity_renders_without_monetary_precision() {
        let surface = render(&snapshot()).unwrap();
        let spans = all_spans(&surface);
        assert!(spans.iter().any(|s| s.text == "2"));
        assert!(!spans.iter().any(|s| s.text == "2.00"));
    }

    #[test]
    fn test_header_rule_sits_inside_block() {
        let surface = render(&snapshot()).unwrap();
        let header = &surface.pages[0].blocks[0].block;
        let rule = header.rules.last().unwrap();
        assert!((rule.dy_mm - (header.height_mm - 3.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_many_items_paginate() {
        let mut long = snapshot();
        long.items = (0..60)
            .map(|i| {
                let mut item = LineItem::new();
                item.description = format!("Service {i}");
                item.quantity = 1.0;
                item.unit_price = 10.0;
                item.recompute_amount();
                item
            })
            .collect();
        long.totals = compute_totals(&long.items, true, 20.0);
        let surface = render(&long).unwrap();
        assert!(surface.pages.len() > 1);
    }

    #[test]
    fn test_trim_rate() {
        assert_eq!(trim_rate(20.0), "20");
        assert_eq!(trim_rate(7.5), "7.5");
        assert_eq!(trim_rate(0.0), "0");
    }
}
