//! Quantification of SMLM cluster centers inside binary region-of-interest masks
//!
//! Each measurement directory holds one Picasso cluster file and any number
//! of mask images. Cluster coordinates are rescaled onto every mask's pixel
//! grid, classified as inside, outside or off-field, and summarised per mask
//! as area, counts and density in one CSV report per directory.

#![forbid(unsafe_code)]

/// Per-mask statistics and per-directory orchestration
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Point sets, coordinate rescaling and binary masks
pub mod spatial;

pub use io::error::{QuantifyError, Result};
