//! Cluster coordinates and the pixel indices they snap to

/// Continuous `(x, y)` coordinate
///
/// `x` runs along image columns and `y` along image rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer pixel position after rounding
///
/// Signed so that points left of or above the image stay representable;
/// bounds are checked by the mask, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelIndex {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
}

impl PixelIndex {
    /// Create a pixel index from column and row
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Cluster centers of one measurement, in cluster pixel units
///
/// Loaded once per directory and shared read-only by every mask evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterSet {
    points: Vec<Point>,
}

impl ClusterSet {
    /// Wrap an ordered list of cluster centers
    pub const fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Cluster centers in file order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of clusters
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no clusters
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<Point> for ClusterSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
