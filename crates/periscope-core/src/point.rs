//! 3D point alias and distance helpers.

/// A point (or displacement) in 3D Cartesian space.
///
/// A plain fixed-size array rather than a wrapper struct: points cross crate
/// boundaries on the hot path of every query, and callers typically already
/// hold their coordinates as `[f64; 3]` rows.
///
/// # Examples
///
/// ```
/// use periscope_core::{distance, Point};
///
/// let a: Point = [0.0, 0.0, 0.0];
/// let b: Point = [3.0, 4.0, 0.0];
/// assert_eq!(distance(&a, &b), 5.0);
/// ```
pub type Point = [f64; 3];

/// Squared Euclidean distance between `a` and `b`.
///
/// Radius queries compare squared distances against a squared cutoff, so the
/// square root never runs on the hot path.
#[inline]
pub fn sq_distance(a: &Point, b: &Point) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    sq_distance(a, b).sqrt()
}
