//! Loading cluster centers from Picasso HDF5 cluster files

use crate::io::error::{QuantifyError, Result};
use crate::spatial::ClusterSet;
use std::path::Path;

/// Anything that can turn a cluster file into a [`ClusterSet`]
pub trait ClusterSource {
    /// Read the cluster centers stored at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or holds no usable coordinates
    fn load(&self, path: &Path) -> Result<ClusterSet>;
}

/// Reads the `clusters` table (`com_x`, `com_y`) of a Picasso cluster file
///
/// Requires the `hdf5` feature; without it every load fails with a
/// [`QuantifyError::ClusterLoad`] explaining how to enable it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hdf5ClusterSource;

impl ClusterSource for Hdf5ClusterSource {
    fn load(&self, path: &Path) -> Result<ClusterSet> {
        if !path.is_file() {
            return Err(QuantifyError::ClusterLoad {
                path: path.to_path_buf(),
                reason: "file does not exist".to_string(),
            });
        }
        read_cluster_centers(path)
    }
}

#[cfg(feature = "hdf5")]
#[derive(hdf5::H5Type, Clone, Copy, Debug)]
#[repr(C)]
struct ClusterCenter {
    com_x: f64,
    com_y: f64,
}

// The file handle is dropped before returning, on success and on error
#[cfg(feature = "hdf5")]
fn read_cluster_centers(path: &Path) -> Result<ClusterSet> {
    use crate::io::configuration::CLUSTER_DATASET;
    use crate::spatial::Point;

    let to_error = |e: hdf5::Error| QuantifyError::ClusterLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let file = hdf5::File::open(path).map_err(to_error)?;
    let dataset = file.dataset(CLUSTER_DATASET).map_err(to_error)?;
    let centers = dataset.read_raw::<ClusterCenter>().map_err(to_error)?;

    Ok(centers
        .into_iter()
        .map(|c| Point::new(c.com_x, c.com_y))
        .collect())
}

#[cfg(not(feature = "hdf5"))]
fn read_cluster_centers(path: &Path) -> Result<ClusterSet> {
    Err(QuantifyError::ClusterLoad {
        path: path.to_path_buf(),
        reason: "built without HDF5 support; rebuild with `--features hdf5`".to_string(),
    })
}
