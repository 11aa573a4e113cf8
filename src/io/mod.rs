//! Input/output edges: command line, files, progress and errors

/// Command-line parsing and batch orchestration
pub mod cli;
/// Cluster file loading
pub mod clusters;
/// Constants and validated runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// Mask image decoding
pub mod image;
/// Terminal progress display
pub mod progress;
/// CSV report export
pub mod report;
/// Diagnostic overlay rendering
pub mod visualization;
