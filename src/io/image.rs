//! Mask image decoding and file-name classification

use crate::io::configuration::{MASK_EXTENSIONS, OVERLAY_SUFFIX};
use crate::io::error::{QuantifyError, Result};
use crate::spatial::BinaryMask;
use std::path::Path;

/// Decode a mask image into a [`BinaryMask`]
///
/// Pixels are converted to 16-bit luminance and any nonzero value is
/// foreground, so masks stored with a foreground value of 1 survive.
/// Column `x` and row `y` of the image map to mask index `[y, x]`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded image has zero width or height
/// - The pixel size is not positive and finite
pub fn load_mask(path: &Path, px_size_nm: f64) -> Result<BinaryMask> {
    let image = image::open(path)
        .map_err(|e| QuantifyError::UnreadableMask {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_luma16();

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(QuantifyError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    BinaryMask::from_fn(height as usize, width as usize, px_size_nm, |(row, col)| {
        image
            .get_pixel_checked(col as u32, row as u32)
            .is_some_and(|p| p.0[0] != 0)
    })
}

/// Whether a file name carries one of the accepted mask extensions
pub fn has_mask_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MASK_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Whether a file is an overlay written by a previous run
///
/// Matches `cell.tif_FOV_mask_locs.png` as well as `cell_FOV_mask_locs.png`.
pub fn is_overlay_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(OVERLAY_SUFFIX))
}

/// Whether a file should be analysed as a mask
pub fn is_mask_file(path: &Path) -> bool {
    path.is_file() && has_mask_extension(path) && !is_overlay_output(path)
}
