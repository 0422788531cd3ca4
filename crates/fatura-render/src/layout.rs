//! # Page Layout Model
//!
//! An intermediate representation between the invoice snapshot and the PDF
//! writer. The document is a vertical sequence of [`Block`]s; pagination
//! packs blocks onto A4 pages top-down without ever splitting a block, so a
//! line-item row or the totals box never straddles a page break.
//!
//! Coordinates inside a block are relative: `x_mm` from the left page edge,
//! `dy_mm` down from the block's top. The PDF writer converts to printpdf's
//! bottom-left origin.

// =============================================================================
// Page Geometry (A4)
// =============================================================================

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 15.0;

/// Right edge of the printable area.
pub const CONTENT_RIGHT_MM: f32 = PAGE_WIDTH_MM - MARGIN_MM;

/// Vertical space available for blocks on one page.
pub const CONTENT_HEIGHT_MM: f32 = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM;

// =============================================================================
// Block Contents
// =============================================================================

/// Horizontal anchoring of a text span.
///
/// `Left` means the text begins at `x_mm`; `Right` means it ends there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One run of text at a fixed position inside a block.
#[derive(Debug, Clone)]
pub struct Span {
    pub text: String,
    pub x_mm: f32,
    pub dy_mm: f32,
    pub size_pt: f32,
    pub bold: bool,
    pub align: Align,
}

/// A horizontal rule across the printable width.
#[derive(Debug, Clone)]
pub struct Rule {
    pub dy_mm: f32,
}

/// An image placed inside a block, scaled to fit the given box while
/// preserving aspect ratio.
#[derive(Debug, Clone)]
pub struct BlockImage {
    /// Encoded image bytes (PNG).
    pub data: Vec<u8>,
    pub x_mm: f32,
    pub dy_mm: f32,
    pub max_width_mm: f32,
    pub max_height_mm: f32,
    /// Anchor the image at its right edge instead of its left.
    pub align: Align,
}

/// An atomic unit of vertical layout. Pagination moves whole blocks only.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub height_mm: f32,
    pub spans: Vec<Span>,
    pub rules: Vec<Rule>,
    pub image: Option<BlockImage>,
}

impl Block {
    pub fn new(height_mm: f32) -> Self {
        Block {
            height_mm,
            ..Block::default()
        }
    }

    pub fn span(
        mut self,
        text: impl Into<String>,
        x_mm: f32,
        dy_mm: f32,
        size_pt: f32,
        bold: bool,
        align: Align,
    ) -> Self {
        self.spans.push(Span {
            text: text.into(),
            x_mm,
            dy_mm,
            size_pt,
            bold,
            align,
        });
        self
    }

    pub fn rule(mut self, dy_mm: f32) -> Self {
        self.rules.push(Rule { dy_mm });
        self
    }
}

// =============================================================================
// Pages and Surface
// =============================================================================

/// A block placed on a page, `y_mm` measured down from the top page edge.
#[derive(Debug, Clone)]
pub struct PlacedBlock {
    pub y_mm: f32,
    pub block: Block,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub blocks: Vec<PlacedBlock>,
}

/// The fully laid-out document, ready for the PDF writer.
#[derive(Debug, Clone)]
pub struct Surface {
    pub title: String,
    pub pages: Vec<Page>,
}

/// Packs blocks onto pages top-down.
///
/// A block that does not fit in the remaining space of the current page
/// starts a new one. A block taller than a whole page is placed alone and
/// clipped rather than split; with the block heights this crate produces
/// that case cannot arise from user input.
pub fn paginate(title: impl Into<String>, blocks: Vec<Block>) -> Surface {
    let mut pages = vec![Page::default()];
    let mut cursor_mm = MARGIN_MM;

    for block in blocks {
        let fits = cursor_mm + block.height_mm <= MARGIN_MM + CONTENT_HEIGHT_MM;
        let first_on_page = pages
            .last()
            .map(|p| p.blocks.is_empty())
            .unwrap_or(true);
        if !fits && !first_on_page {
            pages.push(Page::default());
            cursor_mm = MARGIN_MM;
        }
        let height = block.height_mm;
        if let Some(page) = pages.last_mut() {
            page.blocks.push(PlacedBlock {
                y_mm: cursor_mm,
                block,
            });
        }
        cursor_mm += height;
    }

    Surface {
        title: title.into(),
        pages,
    }
}

/// Approximate rendered width of Helvetica text, used for right alignment.
///
/// Average glyph advance of ~0.5 em is close enough for invoice-sized runs
/// of digits and Latin labels.
pub fn approx_text_width_mm(text: &str, size_pt: f32) -> f32 {
    const PT_TO_MM: f32 = 0.352_778;
    text.chars().count() as f32 * size_pt * 0.5 * PT_TO_MM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_document_stays_on_one_page() {
        let blocks = vec![Block::new(40.0), Block::new(40.0)];
        let surface = paginate("test", blocks);
        assert_eq!(surface.pages.len(), 1);
        assert_eq!(surface.pages[0].blocks.len(), 2);
    }

    #[test]
    fn test_overflowing_block_starts_new_page() {
        // content height is 267mm; the third block no longer fits
        let blocks = vec![Block::new(120.0), Block::new(120.0), Block::new(120.0)];
        let surface = paginate("test", blocks);
        assert_eq!(surface.pages.len(), 2);
        assert_eq!(surface.pages[0].blocks.len(), 2);
        assert_eq!(surface.pages[1].blocks.len(), 1);
        assert_eq!(surface.pages[1].blocks[0].y_mm, MARGIN_MM);
    }

    #[test]
    fn test_blocks_are_never_split() {
        let blocks: Vec<Block> = (0..40).map(|_| Block::new(20.0)).collect();
        let surface = paginate("test", blocks);
        let placed: usize = surface.pages.iter().map(|p| p.blocks.len()).sum();
        assert_eq!(placed, 40);
        for page in &surface.pages {
            for placed in &page.blocks {
                assert!(placed.y_mm + placed.block.height_mm <= MARGIN_MM + CONTENT_HEIGHT_MM + f32::EPSILON);
            }
        }
    }

    #[test]
    fn test_first_block_placed_at_top_margin() {
        let surface = paginate("test", vec![Block::new(10.0)]);
        assert_eq!(surface.pages[0].blocks[0].y_mm, MARGIN_MM);
    }
}
