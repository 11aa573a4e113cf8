//! Diagnostic overlays of cluster positions on a mask

use crate::io::configuration::{
    OVERLAY_BACKGROUND, OVERLAY_FOREGROUND, OVERLAY_INSIDE, OVERLAY_MARKER_RADIUS,
    OVERLAY_OUTSIDE, OVERLAY_SUFFIX,
};
use crate::io::error::{QuantifyError, Result};
use crate::spatial::{BinaryMask, Membership, PixelIndex};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Overlay location for a mask: `<dir>/<file name>_FOV_mask_locs.png`
///
/// The mask extension stays in the name so `cell.png` and `cell.tif` get
/// separate overlays.
pub fn overlay_path(mask_path: &Path) -> PathBuf {
    let file_name = mask_path.file_name().unwrap_or_default();
    let overlay_name = format!("{}{OVERLAY_SUFFIX}.png", file_name.to_string_lossy());

    if let Some(parent) = mask_path.parent() {
        parent.join(overlay_name)
    } else {
        PathBuf::from(overlay_name)
    }
}

/// Paint the mask in white on black, then every on-field cluster as a small square
///
/// Outside clusters are drawn first so inside clusters stay visible where
/// markers overlap. Off-field clusters are not drawn.
pub fn render_overlay(mask: &BinaryMask, pixels: &[PixelIndex]) -> RgbaImage {
    let width = mask.width() as u32;
    let height = mask.height() as u32;

    let mut img = RgbaImage::from_fn(width, height, |x, y| {
        let foreground = mask.get(PixelIndex::new(i64::from(x), i64::from(y)));
        if foreground == Some(true) {
            Rgba(OVERLAY_FOREGROUND)
        } else {
            Rgba(OVERLAY_BACKGROUND)
        }
    });

    for (target, color) in [
        (Membership::Outside, OVERLAY_OUTSIDE),
        (Membership::Inside, OVERLAY_INSIDE),
    ] {
        for &pixel in pixels {
            if mask.classify(pixel) == target {
                draw_marker(&mut img, pixel, Rgba(color));
            }
        }
    }

    img
}

/// Render the overlay and save it as PNG
///
/// # Errors
///
/// Returns an error if the image cannot be written to `output_path`
pub fn export_overlay(mask: &BinaryMask, pixels: &[PixelIndex], output_path: &Path) -> Result<()> {
    render_overlay(mask, pixels)
        .save(output_path)
        .map_err(|e| QuantifyError::OverlayExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

fn draw_marker(img: &mut RgbaImage, center: PixelIndex, color: Rgba<u8>) {
    let r = OVERLAY_MARKER_RADIUS;
    for dy in -r..=r {
        for dx in -r..=r {
            let (Ok(x), Ok(y)) = (
                u32::try_from(center.x + dx),
                u32::try_from(center.y + dy),
            ) else {
                continue;
            };
            if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                *pixel = color;
            }
        }
    }
}
