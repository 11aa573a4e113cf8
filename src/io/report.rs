//! CSV export of per-mask result rows

use crate::analysis::statistics::ResultRow;
use crate::io::configuration::REPORT_SUFFIX;
use crate::io::error::{QuantifyError, Result, file_system_error};
use std::path::{Path, PathBuf};

/// Column names of the report, in the order [`ResultRow`] serializes
pub const REPORT_HEADER: [&str; 9] = [
    "name",
    "mask_area_px2",
    "mask_area_um2",
    "clusters_inside",
    "clusters_outside",
    "clusters_off_field",
    "clusters_per_um2",
    "total_clusters",
    "empty_mask",
];

/// Report location for a cluster file: `<dir>/<stem>_mask_quantification.csv`
pub fn report_path(cluster_file: &Path) -> PathBuf {
    let stem = cluster_file.file_stem().unwrap_or_default();
    let report_name = format!("{}{REPORT_SUFFIX}.csv", stem.to_string_lossy());

    if let Some(parent) = cluster_file.parent() {
        parent.join(report_name)
    } else {
        PathBuf::from(report_name)
    }
}

/// Write the header and one line per row, replacing any existing file
///
/// The header is written even when `rows` is empty.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row fails to serialize
pub fn write_report(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let to_error = |e: csv::Error| QuantifyError::ReportExport {
        path: path.to_path_buf(),
        source: e,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(to_error)?;

    writer.write_record(REPORT_HEADER).map_err(to_error)?;
    for row in rows {
        writer.serialize(row).map_err(to_error)?;
    }

    writer
        .flush()
        .map_err(file_system_error(path, "flush report"))?;

    Ok(())
}
