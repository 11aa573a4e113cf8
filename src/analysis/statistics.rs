//! Per-mask cluster statistics and the report rows built from them

use crate::spatial::rescale::rescale_to_pixels;
use crate::spatial::{BinaryMask, ClusterSet, MembershipCounts, PixelIndex, ScaleFactor};
use serde::Serialize;

/// Counts, area and density of one mask evaluated against one cluster set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskStatistics {
    /// Foreground pixel count
    pub foreground_pixels: usize,
    /// Foreground area in square nanometers
    pub area_nm2: f64,
    /// Foreground area in square micrometers
    pub area_um2: f64,
    /// Membership tally of every cluster
    pub counts: MembershipCounts,
    /// Clusters inside the mask per square micrometer, zero for empty masks
    pub density_per_um2: f64,
    /// Whether the mask has no foreground pixels
    pub empty: bool,
}

impl MaskStatistics {
    /// Rescale the clusters onto the mask grid and tally them
    ///
    /// The cluster set is left untouched; every call does its own rescale.
    pub fn evaluate(mask: &BinaryMask, clusters: &ClusterSet, scale: ScaleFactor) -> Self {
        let pixels = rescale_to_pixels(clusters.points(), scale);
        Self::from_pixels(mask, &pixels)
    }

    /// Tally already rescaled pixel indices
    pub fn from_pixels(mask: &BinaryMask, pixels: &[PixelIndex]) -> Self {
        let counts = mask.count(pixels);
        let area_um2 = mask.area_um2();
        let foreground_pixels = mask.foreground_pixels();

        Self {
            foreground_pixels,
            area_nm2: mask.area_nm2(),
            area_um2,
            counts,
            density_per_um2: density(counts.inside, area_um2),
            empty: foreground_pixels == 0,
        }
    }
}

/// Clusters per unit area; an area of zero yields zero rather than a fault
pub fn density(inside: usize, area: f64) -> f64 {
    if area > 0.0 {
        inside as f64 / area
    } else {
        0.0
    }
}

/// One line of the per-directory CSV report
///
/// Field order is the column order of the written file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    /// Mask file stem
    pub name: String,
    /// Foreground area in pixels
    pub mask_area_px2: usize,
    /// Foreground area in square micrometers
    pub mask_area_um2: f64,
    /// Clusters on foreground pixels
    pub clusters_inside: usize,
    /// Clusters on background pixels
    pub clusters_outside: usize,
    /// Clusters beyond the mask image
    pub clusters_off_field: usize,
    /// Clusters inside per square micrometer
    pub clusters_per_um2: f64,
    /// Clusters in the cluster file
    pub total_clusters: usize,
    /// Set when the mask has no foreground pixels
    pub empty_mask: bool,
}

impl ResultRow {
    /// Combine a mask name, its statistics and the cluster total
    pub fn new(name: impl Into<String>, stats: &MaskStatistics, total_clusters: usize) -> Self {
        Self {
            name: name.into(),
            mask_area_px2: stats.foreground_pixels,
            mask_area_um2: stats.area_um2,
            clusters_inside: stats.counts.inside,
            clusters_outside: stats.counts.outside,
            clusters_off_field: stats.counts.off_field,
            clusters_per_um2: stats.density_per_um2,
            total_clusters,
            empty_mask: stats.empty,
        }
    }
}
