//! Command-line interface for batch quantification of measurement directories

use crate::analysis::directory::{DirectoryAnalyzer, DirectoryReport};
use crate::io::clusters::{ClusterSource, Hdf5ClusterSource};
use crate::io::configuration::AnalysisConfig;
use crate::io::error::Result;
use crate::io::progress::{ProgressLogWriter, ProgressManager};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "maskcount")]
#[command(
    author,
    version,
    about = "Count SMLM cluster centers inside binary mask images"
)]
/// Command-line arguments for the quantification tool
pub struct Cli {
    /// Directories each holding one .hdf5 cluster file and its mask images
    #[arg(value_name = "DIR", required = true)]
    pub dirs: Vec<PathBuf>,

    /// Mask image pixel size in nanometers
    #[arg(short = 'm', long, value_name = "NM", allow_negative_numbers = true)]
    pub px_size_measurement: f64,

    /// Cluster coordinate unit in nanometers
    #[arg(short = 'c', long, value_name = "NM", allow_negative_numbers = true)]
    pub px_size_clusters: f64,

    /// Save an overlay PNG of inside/outside clusters next to every mask
    #[arg(short = 'p', long)]
    pub show_plots: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the arguments into an analysis configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a directory does not exist or a pixel size is invalid
    pub fn to_config(&self) -> Result<AnalysisConfig> {
        AnalysisConfig::new(
            self.dirs.clone(),
            self.px_size_measurement,
            self.px_size_clusters,
            self.show_plots,
        )
    }
}

/// Counts of what happened during a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Directories whose report was written
    pub directories_processed: usize,
    /// Directories aborted by an error
    pub directories_failed: usize,
    /// Rows written across all reports
    pub rows_written: usize,
    /// Masks skipped because they could not be read
    pub masks_skipped: usize,
}

impl BatchSummary {
    /// Whether every directory produced a report
    pub const fn is_complete(&self) -> bool {
        self.directories_failed == 0
    }

    fn record(&mut self, report: &DirectoryReport) {
        self.directories_processed += 1;
        self.rows_written += report.rows.len();
        self.masks_skipped += report.skipped.len();
    }
}

/// Runs every configured directory, isolating failures per directory
pub struct BatchRunner<S: ClusterSource = Hdf5ClusterSource> {
    config: AnalysisConfig,
    source: S,
    progress_manager: Option<ProgressManager>,
}

impl BatchRunner<Hdf5ClusterSource> {
    /// Create a runner reading Picasso HDF5 cluster files
    pub fn new(config: AnalysisConfig, show_progress: bool) -> Self {
        Self::with_source(config, Hdf5ClusterSource, show_progress)
    }
}

impl<S: ClusterSource> BatchRunner<S> {
    /// Create a runner with a custom cluster source
    pub fn with_source(config: AnalysisConfig, source: S, show_progress: bool) -> Self {
        let progress_manager = show_progress.then(ProgressManager::new);

        Self {
            config,
            source,
            progress_manager,
        }
    }

    /// Writer for log output that keeps the progress bars intact
    pub fn log_writer(&self) -> ProgressLogWriter {
        self.progress_manager
            .as_ref()
            .map_or_else(ProgressLogWriter::default, ProgressManager::log_writer)
    }

    /// Process all directories in configuration order
    ///
    /// A directory that fails is logged and counted; the remaining
    /// directories still run.
    ///
    /// # Errors
    ///
    /// Returns an error only if the configured pixel sizes are invalid
    pub fn process(&mut self) -> Result<BatchSummary> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.config.dir_paths.len());
        }

        let mut analyzer = DirectoryAnalyzer::new(&self.config, &self.source)?;
        if let Some(ref pm) = self.progress_manager {
            analyzer = analyzer.with_progress(pm);
        }

        let mut summary = BatchSummary::default();
        for dir in &self.config.dir_paths {
            match analyzer.run(dir) {
                Ok(report) => {
                    if !report.skipped.is_empty() {
                        warn!(
                            "{} mask(s) skipped in {}",
                            report.skipped.len(),
                            dir.display()
                        );
                    }
                    summary.record(&report);
                }
                Err(e) => {
                    error!("Directory {} failed: {e}", dir.display());
                    summary.directories_failed += 1;
                }
            }
            if let Some(ref pm) = self.progress_manager {
                pm.complete_directory();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            "Processed {} of {} directories, {} rows, {} masks skipped",
            summary.directories_processed,
            self.config.dir_paths.len(),
            summary.rows_written,
            summary.masks_skipped
        );

        Ok(summary)
    }
}
