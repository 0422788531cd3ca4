//! # Logo Preparation
//!
//! Normalizes an uploaded company logo before it enters the invoice: decode
//! whatever raster format the user picked, shrink it into the bounded logo
//! box, and re-encode as PNG. The snapshot then carries one predictable
//! format regardless of the upload.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use printpdf::image_crate::{self, ImageFormat};
use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// Maximum stored logo dimensions in pixels. Generous for a print box of a
/// few centimeters; anything larger only bloats the draft file.
const MAX_LOGO_WIDTH_PX: u32 = 600;
const MAX_LOGO_HEIGHT_PX: u32 = 300;

/// A normalized logo ready to embed in drafts and documents.
#[derive(Debug, Clone)]
pub struct Logo {
    /// PNG bytes, base64-encoded.
    pub png_base64: String,
    pub width_px: u32,
    pub height_px: u32,
}

/// Decodes, bounds, and re-encodes an uploaded logo image.
///
/// Aspect ratio is preserved; images already inside the bounding box are
/// kept at their original size.
pub fn prepare_logo(bytes: &[u8]) -> RenderResult<Logo> {
    let decoded = image_crate::load_from_memory(bytes)
        .map_err(|err| RenderError::Logo(err.to_string()))?;

    let bounded = if decoded.width() > MAX_LOGO_WIDTH_PX || decoded.height() > MAX_LOGO_HEIGHT_PX {
        decoded.thumbnail(MAX_LOGO_WIDTH_PX, MAX_LOGO_HEIGHT_PX)
    } else {
        decoded
    };

    let mut png = Vec::new();
    bounded
        .write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|err| RenderError::Logo(err.to_string()))?;

    debug!(
        width = bounded.width(),
        height = bounded.height(),
        bytes = png.len(),
        "logo normalized"
    );

    Ok(Logo {
        png_base64: BASE64.encode(&png),
        width_px: bounded.width(),
        height_px: bounded.height(),
    })
}

/// Decodes a stored logo back into PNG bytes for the PDF writer.
pub fn decode_logo(png_base64: &str) -> RenderResult<Vec<u8>> {
    BASE64
        .decode(png_base64)
        .map_err(|err| RenderError::Logo(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use printpdf::image_crate::{DynamicImage, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image_crate::Rgba([10, 20, 30, 255]),
        ));
        let mut buf = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_small_logo_keeps_dimensions() {
        let logo = prepare_logo(&png_bytes(200, 100)).unwrap();
        assert_eq!((logo.width_px, logo.height_px), (200, 100));
    }

    #[test]
    fn test_oversized_logo_is_bounded_preserving_aspect() {
        let logo = prepare_logo(&png_bytes(1200, 300)).unwrap();
        assert!(logo.width_px <= 600);
        assert!(logo.height_px <= 300);
        // 4:1 input stays 4:1
        assert_eq!(logo.width_px, logo.height_px * 4);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(matches!(
            prepare_logo(b"definitely not an image"),
            Err(RenderError::Logo(_))
        ));
    }

    #[test]
    fn test_round_trip_through_base64() {
        let logo = prepare_logo(&png_bytes(64, 64)).unwrap();
        let bytes = decode_logo(&logo.png_base64).unwrap();
        let reloaded = image_crate::load_from_memory(&bytes).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (64, 64));
    }
}
