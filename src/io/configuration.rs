//! Analysis constants and the validated runtime configuration

use crate::io::error::{Result, invalid_parameter};
use std::path::PathBuf;

// Input discovery
/// Extension of the cluster file expected once per directory
pub const CLUSTER_FILE_EXTENSION: &str = "hdf5";
/// Image extensions accepted as masks (compared case-insensitively)
pub const MASK_EXTENSIONS: [&str; 5] = ["tif", "tiff", "png", "jpg", "jpeg"];
/// Name of the HDF5 dataset holding cluster centers
pub const CLUSTER_DATASET: &str = "clusters";

// Output settings
/// Suffix of the per-directory CSV report, appended to the cluster file stem
pub const REPORT_SUFFIX: &str = "_mask_quantification";
/// Suffix of overlay images, appended to the mask file stem
pub const OVERLAY_SUFFIX: &str = "_FOV_mask_locs";

// Unit conversion
/// Square nanometers per square micrometer
pub const NM2_PER_UM2: f64 = 1_000_000.0;

// Overlay colours
/// Foreground mask pixels
pub const OVERLAY_FOREGROUND: [u8; 4] = [255, 255, 255, 255];
/// Background mask pixels
pub const OVERLAY_BACKGROUND: [u8; 4] = [0, 0, 0, 255];
/// Clusters inside the mask
pub const OVERLAY_INSIDE: [u8; 4] = [255, 0, 0, 255];
/// Clusters outside the mask
pub const OVERLAY_OUTSIDE: [u8; 4] = [0, 0, 255, 255];
/// Half-width of the square marker drawn per cluster
pub const OVERLAY_MARKER_RADIUS: i64 = 1;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Validated settings for one batch run
///
/// Built once at startup; every analyzer receives it by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Measurement directories, processed in the given order
    pub dir_paths: Vec<PathBuf>,
    /// Nanometers per mask pixel
    pub px_size_measurement: f64,
    /// Nanometers per cluster coordinate unit
    pub px_size_clusters: f64,
    /// Render a diagnostic overlay for every mask
    pub show_plots: bool,
}

impl AnalysisConfig {
    /// Build and validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `dir_paths` is empty or names something that is not a directory
    /// - either pixel size is not a positive finite number
    pub fn new(
        dir_paths: Vec<PathBuf>,
        px_size_measurement: f64,
        px_size_clusters: f64,
        show_plots: bool,
    ) -> Result<Self> {
        let config = Self {
            dir_paths,
            px_size_measurement,
            px_size_clusters,
            show_plots,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field, failing on the first invalid one
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming the offending field
    pub fn validate(&self) -> Result<()> {
        validate_pixel_size("px_size_measurement", self.px_size_measurement)?;
        validate_pixel_size("px_size_clusters", self.px_size_clusters)?;

        if self.dir_paths.is_empty() {
            return Err(invalid_parameter(
                "dir_paths",
                &"[]",
                &"at least one directory is required",
            ));
        }

        for dir in &self.dir_paths {
            if !dir.is_dir() {
                return Err(invalid_parameter(
                    "dir_paths",
                    &dir.display(),
                    &"not an existing directory",
                ));
            }
        }

        Ok(())
    }
}

/// Reject pixel sizes that cannot define a scale
///
/// # Errors
///
/// Returns an invalid parameter error if `value` is not finite or not positive
pub fn validate_pixel_size(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"pixel size must be a positive number of nanometers",
        ))
    }
}
