//! Quantification of clusters per mask and per directory

/// Directory scanning and per-mask orchestration
pub mod directory;
/// Per-mask statistics and report rows
pub mod statistics;
