//! Conversion of cluster coordinates into the pixel grid of a mask image
//!
//! Cluster files and mask images are sampled at different pixel sizes. A
//! coordinate `c` in cluster units sits at `c / s` mask pixels, where
//! `s = px_size_measurement / px_size_clusters`.
//!
//! Snapping to integer pixels rounds half to even, so `0.5 -> 0`, `1.5 -> 2`
//! and `2.5 -> 2`. Non-finite coordinates snap to `i64::MIN`, which no mask
//! contains.

use crate::io::configuration::validate_pixel_size;
use crate::io::error::Result;
use crate::spatial::points::{PixelIndex, Point};

/// Ratio of the mask pixel size to the cluster pixel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Derive the scale from both pixel sizes in nanometers
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if either size is not positive and finite
    pub fn new(px_size_measurement: f64, px_size_clusters: f64) -> Result<Self> {
        validate_pixel_size("px_size_measurement", px_size_measurement)?;
        validate_pixel_size("px_size_clusters", px_size_clusters)?;
        Ok(Self(px_size_measurement / px_size_clusters))
    }

    /// Raw ratio `px_size_measurement / px_size_clusters`
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Scale that undoes this one
    pub fn inverse(self) -> Self {
        Self(self.0.recip())
    }

    /// Map one coordinate into mask pixel units
    pub fn apply(self, point: Point) -> Point {
        Point::new(point.x / self.0, point.y / self.0)
    }
}

/// Rescale every point, keeping count and order
pub fn rescale(points: &[Point], scale: ScaleFactor) -> Vec<Point> {
    points.iter().map(|&p| scale.apply(p)).collect()
}

/// Snap a continuous mask coordinate to its pixel
pub fn to_pixel(point: Point) -> PixelIndex {
    PixelIndex::new(snap(point.x), snap(point.y))
}

/// Rescale and snap every point; index `i` of the output is cluster `i`
pub fn rescale_to_pixels(points: &[Point], scale: ScaleFactor) -> Vec<PixelIndex> {
    points.iter().map(|&p| to_pixel(scale.apply(p))).collect()
}

fn snap(value: f64) -> i64 {
    if value.is_finite() {
        // Saturates for magnitudes beyond i64, which are off-field anyway
        value.round_ties_even() as i64
    } else {
        i64::MIN
    }
}
