//! Coordinate handling and mask geometry
//!
//! This module contains spatial-related functionality including:
//! - Cluster point sets and integer pixel indices
//! - Rescaling between cluster and mask pixel grids
//! - Binary masks and point membership

/// Binary masks, membership classification and area
pub mod mask;
/// Cluster coordinates and pixel indices
pub mod points;
/// Cluster-to-mask coordinate conversion
pub mod rescale;

pub use mask::{BinaryMask, Membership, MembershipCounts};
pub use points::{ClusterSet, PixelIndex, Point};
pub use rescale::ScaleFactor;
