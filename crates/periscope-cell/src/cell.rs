//! Validated orthorhombic cell: wrapping, minimum image, image shifts.

use crate::error::CellError;
use periscope_core::Point;
use smallvec::SmallVec;

/// A lattice translation, in units of whole box edges per axis.
///
/// Shift `[i, j, k]` moves a point by `(i*lx, j*ly, k*lz)`. Radius queries
/// against a single periodic shell only ever need components in `{-1, 0, 1}`.
pub type ImageShift = [i32; 3];

const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];
const ANGLE_NAMES: [&str; 3] = ["alpha", "beta", "gamma"];
const RIGHT_ANGLE_DEG: f64 = 90.0;

/// An orthorhombic periodic simulation cell.
///
/// Holds the three validated edge lengths; all angles are 90° by
/// construction. Provides the periodicity primitives the search engine is
/// built on: wrapping into the primary cell `[0, L)` per axis, minimum-image
/// displacements, and enumeration of the lattice image shifts relevant to a
/// radius query.
///
/// # Examples
///
/// ```
/// use periscope_cell::PeriodicCell;
///
/// let cell = PeriodicCell::from_dimensions([10.0, 10.0, 10.0, 90.0, 90.0, 90.0]).unwrap();
/// assert_eq!(cell.wrap(&[11.0, -11.0, 11.0]), [1.0, 9.0, 1.0]);
/// assert_eq!(cell.max_search_radius(), 5.0);
///
/// // An interior point needs no periodic images.
/// let shifts = cell.image_shifts(&[5.0, 5.0, 5.0], 1.5);
/// assert_eq!(shifts.as_slice(), &[[0, 0, 0]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicCell {
    lengths: [f64; 3],
}

impl PeriodicCell {
    /// Tolerance for the 90° angle check, in degrees.
    ///
    /// Box descriptors routinely round-trip through single precision in
    /// trajectory files; genuine triclinic tilts are orders of magnitude
    /// larger than this.
    pub const ANGLE_TOLERANCE: f64 = 1e-6;

    /// Create a cell from a 6-component box descriptor
    /// `[lx, ly, lz, alpha, beta, gamma]` (lengths, then angles in degrees).
    ///
    /// Returns `Err(CellError::InvalidLength)` if any length is non-positive
    /// or non-finite, or `Err(CellError::NotOrthorhombic)` if any angle
    /// deviates from 90° by more than [`ANGLE_TOLERANCE`](Self::ANGLE_TOLERANCE).
    pub fn from_dimensions(dimensions: [f64; 6]) -> Result<Self, CellError> {
        for axis in 0..3 {
            let angle = dimensions[3 + axis];
            if !angle.is_finite() || (angle - RIGHT_ANGLE_DEG).abs() > Self::ANGLE_TOLERANCE {
                return Err(CellError::NotOrthorhombic {
                    angle: ANGLE_NAMES[axis],
                    value: angle,
                });
            }
        }
        Self::from_lengths([dimensions[0], dimensions[1], dimensions[2]])
    }

    /// Create a cell from three edge lengths; all angles are taken as 90°.
    ///
    /// Returns `Err(CellError::InvalidLength)` if any length is non-positive
    /// or non-finite.
    pub fn from_lengths(lengths: [f64; 3]) -> Result<Self, CellError> {
        for axis in 0..3 {
            let value = lengths[axis];
            if !value.is_finite() || value <= 0.0 {
                return Err(CellError::InvalidLength {
                    axis: AXIS_NAMES[axis],
                    value,
                });
            }
        }
        Ok(Self { lengths })
    }

    /// The three edge lengths `[lx, ly, lz]`.
    pub fn lengths(&self) -> [f64; 3] {
        self.lengths
    }

    /// Largest cutoff radius the single-shell image enumeration is exact
    /// for: half the shortest edge.
    pub fn max_search_radius(&self) -> f64 {
        0.5 * self.lengths.into_iter().fold(f64::INFINITY, f64::min)
    }

    /// Whether `point` lies inside the primary cell `[0, L)` on every axis.
    pub fn contains(&self, point: &Point) -> bool {
        (0..3).all(|axis| point[axis] >= 0.0 && point[axis] < self.lengths[axis])
    }

    /// Map `point` into the primary cell, independently per axis.
    ///
    /// Each component becomes `c - L * floor(c / L)`, so the result lies in
    /// `[0, L)`. Points already inside the cell come back unchanged; inputs
    /// arbitrarily far outside wrap correctly.
    ///
    /// # Examples
    ///
    /// ```
    /// use periscope_cell::PeriodicCell;
    ///
    /// let cell = PeriodicCell::from_lengths([10.0, 10.0, 10.0]).unwrap();
    /// assert_eq!(cell.wrap(&[21.0, 21.0, 3.0]), [1.0, 1.0, 3.0]);
    /// ```
    pub fn wrap(&self, point: &Point) -> Point {
        [
            wrap_component(point[0], self.lengths[0]),
            wrap_component(point[1], self.lengths[1]),
            wrap_component(point[2], self.lengths[2]),
        ]
    }

    /// Map a displacement to its minimum-image equivalent, per axis.
    ///
    /// Each component becomes `d - L * round(d / L)`, the shortest
    /// displacement connecting the two endpoints under periodicity.
    pub fn min_image(&self, displacement: &Point) -> Point {
        [
            min_image_component(displacement[0], self.lengths[0]),
            min_image_component(displacement[1], self.lengths[1]),
            min_image_component(displacement[2], self.lengths[2]),
        ]
    }

    /// Squared distance between `a` and `b` through the nearest periodic
    /// image.
    pub fn min_image_sq_distance(&self, a: &Point, b: &Point) -> f64 {
        let d = self.min_image(&[a[0] - b[0], a[1] - b[1], a[2] - b[2]]);
        d[0] * d[0] + d[1] * d[1] + d[2] * d[2]
    }

    /// Distance between `a` and `b` through the nearest periodic image.
    pub fn min_image_distance(&self, a: &Point, b: &Point) -> f64 {
        self.min_image_sq_distance(a, b).sqrt()
    }

    /// Enumerate the lattice shifts whose image of `point` can lie within
    /// `radius` of the primary cell.
    ///
    /// `point` is wrapped first. Per axis, a wrapped component `c` admits
    /// shift `+1` when `c < radius` (near the 0 face) and `-1` when
    /// `c >= L - radius` (near the far face); the per-axis sets are crossed,
    /// never built by filtering all 27 triples. Output order is canonical:
    /// the untranslated shift first, then single-axis (face) shifts in axis
    /// order x, y, z, then two-axis (edge) shifts in pair order yz, xy, xz,
    /// then the three-axis (vertex) shift. An interior point yields exactly
    /// `[[0, 0, 0]]`.
    ///
    /// Exact only for `radius` up to
    /// [`max_search_radius`](Self::max_search_radius); callers enforce that
    /// bound.
    pub fn image_shifts(&self, point: &Point, radius: f64) -> SmallVec<[ImageShift; 8]> {
        debug_assert!(radius <= self.max_search_radius());
        let wrapped = self.wrap(point);
        let extra = [
            face_shift(wrapped[0], self.lengths[0], radius),
            face_shift(wrapped[1], self.lengths[1], radius),
            face_shift(wrapped[2], self.lengths[2], radius),
        ];

        let mut shifts: SmallVec<[ImageShift; 8]> = SmallVec::new();
        shifts.push([0, 0, 0]);
        for axis in 0..3 {
            if let Some(s) = extra[axis] {
                let mut shift = [0, 0, 0];
                shift[axis] = s;
                shifts.push(shift);
            }
        }
        for (a, b) in [(1, 2), (0, 1), (0, 2)] {
            if let (Some(sa), Some(sb)) = (extra[a], extra[b]) {
                let mut shift = [0, 0, 0];
                shift[a] = sa;
                shift[b] = sb;
                shifts.push(shift);
            }
        }
        if let [Some(sx), Some(sy), Some(sz)] = extra {
            shifts.push([sx, sy, sz]);
        }
        shifts
    }

    /// Translate `point` by `shift` whole box edges.
    pub fn translate(&self, point: &Point, shift: &ImageShift) -> Point {
        [
            point[0] + f64::from(shift[0]) * self.lengths[0],
            point[1] + f64::from(shift[1]) * self.lengths[1],
            point[2] + f64::from(shift[2]) * self.lengths[2],
        ]
    }
}

// ── Private helpers ─────────────────────────────────────────────

fn wrap_component(c: f64, length: f64) -> f64 {
    let wrapped = c - length * (c / length).floor();
    // Rounding can land exactly on `length` for tiny negative inputs; fold
    // back so the half-open invariant holds.
    if wrapped >= length {
        wrapped - length
    } else {
        wrapped
    }
}

fn min_image_component(d: f64, length: f64) -> f64 {
    d - length * (d / length).round()
}

/// Extra shift admitted on one axis, if the wrapped component sits within
/// `radius` of a face. The comparisons mirror the half-open cell: stored
/// coordinates lie in `[0, L)`, so an image at `c + L` can only reach one
/// when `c < radius` (strict), while a stored coordinate exactly at `0` is
/// reachable at exactly `radius` by the image at `c - L`, so the far-face
/// check is inclusive.
fn face_shift(c: f64, length: f64, radius: f64) -> Option<i32> {
    if c < radius {
        Some(1)
    } else if c >= length - radius {
        Some(-1)
    } else {
        None
    }
}
