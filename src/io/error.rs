//! Error types for configuration, cluster loading, mask decoding and report export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all quantification operations
#[derive(Debug)]
pub enum QuantifyError {
    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A measurement directory must hold exactly one cluster file
    MissingOrAmbiguousClusterFile {
        /// Directory that was searched
        dir: PathBuf,
        /// Number of cluster files found
        found: usize,
    },

    /// Cluster file exists but its coordinates could not be read
    ClusterLoad {
        /// Path to the cluster file
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// Mask image could not be decoded
    UnreadableMask {
        /// Path to the mask image
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Mask image decoded to zero pixels
    EmptyImage {
        /// Path to the mask image
        path: PathBuf,
    },

    /// Failed to write the per-directory CSV report
    ReportExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Failed to save a diagnostic overlay image
    OverlayExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// One or more directories of a batch could not be processed
    BatchIncomplete {
        /// Number of directories that failed
        failed: usize,
        /// Number of directories in the batch
        total: usize,
    },
}

impl fmt::Display for QuantifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MissingOrAmbiguousClusterFile { dir, found } => {
                write!(
                    f,
                    "Expected exactly one cluster file in '{}', found {found}",
                    dir.display()
                )
            }
            Self::ClusterLoad { path, reason } => {
                write!(
                    f,
                    "Failed to load clusters from '{}': {reason}",
                    path.display()
                )
            }
            Self::UnreadableMask { path, source } => {
                write!(f, "Failed to read mask '{}': {source}", path.display())
            }
            Self::EmptyImage { path } => {
                write!(f, "Mask '{}' contains no pixels", path.display())
            }
            Self::ReportExport { path, source } => {
                write!(
                    f,
                    "Failed to write report to '{}': {source}",
                    path.display()
                )
            }
            Self::OverlayExport { path, source } => {
                write!(
                    f,
                    "Failed to export overlay to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::BatchIncomplete { failed, total } => {
                write!(f, "{failed} of {total} directories could not be processed")
            }
        }
    }
}

impl std::error::Error for QuantifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnreadableMask { source, .. } | Self::OverlayExport { source, .. } => {
                Some(source)
            }
            Self::ReportExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl QuantifyError {
    /// Whether the error only affects a single mask rather than a whole directory
    pub const fn is_mask_local(&self) -> bool {
        matches!(
            self,
            Self::UnreadableMask { .. } | Self::EmptyImage { .. } | Self::OverlayExport { .. }
        )
    }
}

/// Convenience type alias for quantification results
pub type Result<T> = std::result::Result<T, QuantifyError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> QuantifyError {
    QuantifyError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation name to an I/O failure
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> QuantifyError {
    let path = path.into();
    move |source| QuantifyError::FileSystem {
        path,
        operation,
        source,
    }
}
