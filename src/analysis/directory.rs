//! Per-directory orchestration: one cluster file, many masks, one report
//!
//! A directory moves through four stages. The cluster file is located and
//! loaded once, every mask is evaluated against those clusters in file-name
//! order, the rows are aggregated, and the report is written. A failure
//! while loading clusters aborts the directory; a failure on a single mask
//! skips that mask and the remaining masks still run.

use crate::analysis::statistics::{MaskStatistics, ResultRow};
use crate::io::clusters::ClusterSource;
use crate::io::configuration::{AnalysisConfig, CLUSTER_FILE_EXTENSION};
use crate::io::error::{QuantifyError, Result, file_system_error};
use crate::io::image::{is_mask_file, load_mask};
use crate::io::progress::ProgressManager;
use crate::io::report::{report_path, write_report};
use crate::io::visualization::{export_overlay, overlay_path};
use crate::spatial::rescale::rescale_to_pixels;
use crate::spatial::{ClusterSet, ScaleFactor};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Input files found in a measurement directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    /// The single cluster file
    pub cluster_file: PathBuf,
    /// Mask images sorted by file name
    pub masks: Vec<PathBuf>,
}

impl DirectoryListing {
    /// Locate the cluster file and the masks of `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory cannot be read
    /// - It holds no cluster file, or more than one
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut cluster_files = Vec::new();
        let mut masks = Vec::new();

        let entries = std::fs::read_dir(dir).map_err(file_system_error(dir, "read directory"))?;
        for entry in entries {
            let path = entry
                .map_err(file_system_error(dir, "read directory entry"))?
                .path();
            if is_cluster_file(&path) {
                cluster_files.push(path);
            } else if is_mask_file(&path) {
                masks.push(path);
            }
        }

        let cluster_file = match <[PathBuf; 1]>::try_from(cluster_files) {
            Ok([file]) => file,
            Err(found) => {
                return Err(QuantifyError::MissingOrAmbiguousClusterFile {
                    dir: dir.to_path_buf(),
                    found: found.len(),
                });
            }
        };

        masks.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(Self {
            cluster_file,
            masks,
        })
    }
}

/// Whether a path is a cluster file by extension
pub fn is_cluster_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(CLUSTER_FILE_EXTENSION))
}

/// A mask that could not be evaluated
#[derive(Debug)]
pub struct SkippedMask {
    /// Path to the mask image
    pub path: PathBuf,
    /// Why it was skipped
    pub error: QuantifyError,
}

/// Outcome of analysing one directory
#[derive(Debug)]
pub struct DirectoryReport {
    /// Analysed directory
    pub dir: PathBuf,
    /// Cluster file the rows were computed from
    pub cluster_file: PathBuf,
    /// One row per evaluated mask, in file-name order
    pub rows: Vec<ResultRow>,
    /// Masks that failed to load
    pub skipped: Vec<SkippedMask>,
    /// Where the CSV was written, once it has been
    pub report_path: Option<PathBuf>,
}

/// Runs the cluster-in-mask quantification for single directories
pub struct DirectoryAnalyzer<'a, S: ClusterSource> {
    config: &'a AnalysisConfig,
    source: &'a S,
    scale: ScaleFactor,
    progress: Option<&'a ProgressManager>,
}

impl<'a, S: ClusterSource> DirectoryAnalyzer<'a, S> {
    /// Create an analyzer sharing the batch configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured pixel sizes do not define a scale
    pub fn new(config: &'a AnalysisConfig, source: &'a S) -> Result<Self> {
        let scale = ScaleFactor::new(config.px_size_measurement, config.px_size_clusters)?;
        Ok(Self {
            config,
            source,
            scale,
            progress: None,
        })
    }

    /// Report mask progress through `progress`
    #[must_use]
    pub const fn with_progress(mut self, progress: &'a ProgressManager) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Scale applied to every cluster set
    pub const fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Analyse `dir` and write its CSV report
    ///
    /// # Errors
    ///
    /// Returns an error if the cluster file is missing, ambiguous or
    /// unreadable, or if the report cannot be written. Unreadable masks are
    /// not errors; they are listed in [`DirectoryReport::skipped`].
    pub fn run(&self, dir: &Path) -> Result<DirectoryReport> {
        let mut report = self.analyze(dir)?;

        let path = report_path(&report.cluster_file);
        write_report(&path, &report.rows)?;
        info!(
            "Wrote {} rows for {} to {}",
            report.rows.len(),
            dir.display(),
            path.display()
        );
        report.report_path = Some(path);

        Ok(report)
    }

    /// Analyse `dir` without writing anything but optional overlays
    ///
    /// # Errors
    ///
    /// Returns an error if the cluster file is missing, ambiguous or unreadable
    pub fn analyze(&self, dir: &Path) -> Result<DirectoryReport> {
        let listing = DirectoryListing::scan(dir)?;
        let clusters = self.source.load(&listing.cluster_file)?;
        info!(
            "Loaded {} clusters from {} ({} masks)",
            clusters.len(),
            listing.cluster_file.display(),
            listing.masks.len()
        );

        if let Some(progress) = self.progress {
            progress.start_directory(dir, listing.masks.len());
        }

        let mut rows = Vec::with_capacity(listing.masks.len());
        let mut skipped = Vec::new();

        for mask_path in &listing.masks {
            match self.evaluate_mask(mask_path, &clusters) {
                Ok(row) => rows.push(row),
                Err(error) if !error.is_mask_local() => return Err(error),
                Err(error) => {
                    warn!("Skipping mask {}: {error}", mask_path.display());
                    skipped.push(SkippedMask {
                        path: mask_path.clone(),
                        error,
                    });
                }
            }
            if let Some(progress) = self.progress {
                progress.complete_mask(mask_path);
            }
        }

        Ok(DirectoryReport {
            dir: dir.to_path_buf(),
            cluster_file: listing.cluster_file,
            rows,
            skipped,
            report_path: None,
        })
    }

    /// Evaluate one mask image against the directory's clusters
    ///
    /// # Errors
    ///
    /// Returns an error if the mask image cannot be decoded or has no pixels
    pub fn evaluate_mask(&self, mask_path: &Path, clusters: &ClusterSet) -> Result<ResultRow> {
        let mask = load_mask(mask_path, self.config.px_size_measurement)?;
        let pixels = rescale_to_pixels(clusters.points(), self.scale);
        let stats = MaskStatistics::from_pixels(&mask, &pixels);

        let name = mask_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if stats.empty {
            warn!(
                "Mask {} has no foreground pixels; density reported as 0",
                mask_path.display()
            );
        }
        if stats.counts.off_field > 0 {
            warn!(
                "{} of {} clusters fall outside the {}x{} field of {}",
                stats.counts.off_field,
                clusters.len(),
                mask.width(),
                mask.height(),
                mask_path.display()
            );
        }

        if self.config.show_plots {
            let output = overlay_path(mask_path);
            if let Err(error) = export_overlay(&mask, &pixels, &output) {
                warn!("{error}");
            }
        }

        Ok(ResultRow::new(name, &stats, clusters.len()))
    }
}
