//! Binary region-of-interest masks and point membership
//!
//! A mask is a boolean grid indexed `[row, col]`, i.e. `[y, x]` of the
//! pixel indices produced by the rescaler. Pixels outside the grid are
//! off-field: they belong neither to the mask nor to its background.

use crate::io::configuration::{NM2_PER_UM2, validate_pixel_size};
use crate::io::error::Result;
use crate::spatial::points::PixelIndex;
use ndarray::Array2;

/// Where a pixel index falls relative to a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    /// On a foreground pixel
    Inside,
    /// On a background pixel
    Outside,
    /// Beyond the image bounds
    OffField,
}

/// Tally of memberships for a set of pixel indices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MembershipCounts {
    /// Points on foreground pixels
    pub inside: usize,
    /// Points on background pixels
    pub outside: usize,
    /// Points beyond the image bounds
    pub off_field: usize,
}

impl MembershipCounts {
    /// Every counted point
    pub const fn total(&self) -> usize {
        self.inside + self.outside + self.off_field
    }

    const fn record(&mut self, membership: Membership) {
        match membership {
            Membership::Inside => self.inside += 1,
            Membership::Outside => self.outside += 1,
            Membership::OffField => self.off_field += 1,
        }
    }
}

/// Foreground/background grid with a physical pixel size
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryMask {
    grid: Array2<bool>,
    px_size_nm: f64,
}

impl BinaryMask {
    /// Wrap a `(height, width)` grid whose pixels are `px_size_nm` wide
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the pixel size is not positive and finite
    pub fn new(grid: Array2<bool>, px_size_nm: f64) -> Result<Self> {
        validate_pixel_size("px_size_measurement", px_size_nm)?;
        Ok(Self { grid, px_size_nm })
    }

    /// Build a `height x width` mask from a per-pixel predicate over `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the pixel size is not positive and finite
    pub fn from_fn(
        height: usize,
        width: usize,
        px_size_nm: f64,
        foreground: impl FnMut((usize, usize)) -> bool,
    ) -> Result<Self> {
        Self::new(Array2::from_shape_fn((height, width), foreground), px_size_nm)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.grid.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.grid.ncols()
    }

    /// Physical edge length of one pixel in nanometers
    pub const fn px_size_nm(&self) -> f64 {
        self.px_size_nm
    }

    /// Foreground value at a pixel, `None` when off the grid
    pub fn get(&self, pixel: PixelIndex) -> Option<bool> {
        let row = usize::try_from(pixel.y).ok()?;
        let col = usize::try_from(pixel.x).ok()?;
        self.grid.get([row, col]).copied()
    }

    /// Classify a single pixel index
    pub fn classify(&self, pixel: PixelIndex) -> Membership {
        match self.get(pixel) {
            Some(true) => Membership::Inside,
            Some(false) => Membership::Outside,
            None => Membership::OffField,
        }
    }

    /// Classify every pixel index, keeping order
    pub fn classify_all(&self, pixels: &[PixelIndex]) -> Vec<Membership> {
        pixels.iter().map(|&p| self.classify(p)).collect()
    }

    /// Tally memberships of every pixel index
    pub fn count(&self, pixels: &[PixelIndex]) -> MembershipCounts {
        let mut counts = MembershipCounts::default();
        for &pixel in pixels {
            counts.record(self.classify(pixel));
        }
        counts
    }

    /// Number of foreground pixels
    pub fn foreground_pixels(&self) -> usize {
        self.grid.iter().filter(|&&v| v).count()
    }

    /// Whether no pixel is foreground
    pub fn is_empty(&self) -> bool {
        !self.grid.iter().any(|&v| v)
    }

    /// Foreground area in square nanometers
    pub fn area_nm2(&self) -> f64 {
        self.foreground_pixels() as f64 * self.px_size_nm * self.px_size_nm
    }

    /// Foreground area in square micrometers
    pub fn area_um2(&self) -> f64 {
        self.area_nm2() / NM2_PER_UM2
    }
}
