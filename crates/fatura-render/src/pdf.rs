//! # PDF Writer
//!
//! Converts a laid-out [`Surface`] into PDF bytes with printpdf. Text uses
//! the builtin Helvetica faces; rules are stroked lines; the logo is
//! embedded as a raster image scaled to its layout box via the image DPI.
//!
//! printpdf's origin is the bottom-left corner, so every layout `y` (top
//! down) converts to `PAGE_HEIGHT - y` here.

use printpdf::image_crate;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point,
};
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::layout::{
    approx_text_width_mm, Align, BlockImage, PlacedBlock, Surface, CONTENT_RIGHT_MM, MARGIN_MM,
    PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};

const MM_PER_INCH: f32 = 25.4;

/// Serializes the surface into PDF bytes.
pub fn export(surface: &Surface) -> RenderResult<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        surface.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    for (index, page) in surface.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_ref, layer_ref) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page_ref).get_layer(layer_ref)
        };

        for placed in &page.blocks {
            draw_block(&layer, placed, &regular, &bold)?;
        }
    }

    debug!(pages = surface.pages.len(), "PDF assembled");

    let mut writer = std::io::BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

fn draw_block(
    layer: &PdfLayerReference,
    placed: &PlacedBlock,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) -> RenderResult<()> {
    for span in &placed.block.spans {
        let x = match span.align {
            Align::Left => span.x_mm,
            Align::Right => span.x_mm - approx_text_width_mm(&span.text, span.size_pt),
        };
        let baseline = PAGE_HEIGHT_MM - (placed.y_mm + span.dy_mm);
        let font = if span.bold { bold } else { regular };
        layer.use_text(&span.text, span.size_pt, Mm(x), Mm(baseline), font);
    }

    for rule in &placed.block.rules {
        let y = PAGE_HEIGHT_MM - (placed.y_mm + rule.dy_mm);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(y)), false),
                (Point::new(Mm(CONTENT_RIGHT_MM), Mm(y)), false),
            ],
            is_closed: false,
        });
    }

    if let Some(image) = &placed.block.image {
        draw_image(layer, placed.y_mm, image)?;
    }

    Ok(())
}

fn draw_image(
    layer: &PdfLayerReference,
    block_y_mm: f32,
    spec: &BlockImage,
) -> RenderResult<()> {
    let decoded = image_crate::load_from_memory(&spec.data)
        .map_err(|e| RenderError::Logo(e.to_string()))?;
    let (width_px, height_px) = (decoded.width() as f32, decoded.height() as f32);

    // Fit the pixel dimensions into the layout box, preserving aspect
    let scale = (spec.max_width_mm / width_px)
        .min(spec.max_height_mm / height_px);
    let width_mm = width_px * scale;
    let height_mm = height_px * scale;
    // printpdf sizes raster images by DPI; pick the DPI that yields the
    // fitted physical width
    let dpi = width_px * MM_PER_INCH / width_mm;

    let x_mm = match spec.align {
        Align::Left => spec.x_mm,
        Align::Right => spec.x_mm - width_mm,
    };
    // image origin is its bottom-left corner
    let y_mm = PAGE_HEIGHT_MM - (block_y_mm + spec.dy_mm + height_mm);

    let image = Image::from_dynamic_image(&decoded);
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x_mm)),
            translate_y: Some(Mm(y_mm)),
            dpi: Some(dpi),
            ..ImageTransform::default()
        },
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{paginate, Block};

    #[test]
    fn test_export_produces_pdf_bytes() {
        let blocks = vec![Block::new(20.0).span(
            "INVOICE",
            MARGIN_MM,
            5.0,
            24.0,
            true,
            Align::Left,
        )];
        let bytes = export(&paginate("INVOICE INV-001", blocks)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_multi_page() {
        let blocks: Vec<Block> = (0..10).map(|_| Block::new(60.0)).collect();
        let surface = paginate("long", blocks);
        assert!(surface.pages.len() > 1);
        let bytes = export(&surface).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_with_rule_and_right_aligned_text() {
        let blocks = vec![Block::new(20.0)
            .span("TOTAL", CONTENT_RIGHT_MM, 5.0, 12.0, true, Align::Right)
            .rule(10.0)];
        let bytes = export(&paginate("t", blocks)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
