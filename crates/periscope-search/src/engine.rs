//! The periodic search engine.

use crate::error::SearchError;
use crate::metrics::SearchMetrics;
use indexmap::IndexSet;
use periscope_cell::PeriodicCell;
use periscope_core::Point;
use periscope_kdtree::{KdTree, DEFAULT_BUCKET_SIZE};

/// Radius neighbour search over points in a periodic orthorhombic cell.
///
/// Stored coordinates are wrapped into the primary cell and indexed by a
/// k-d tree. A query wraps its centre too, then visits every periodic image
/// of the centre that could reach a stored point within the cutoff; results
/// from all images are deduplicated by original index in first-discovery
/// order (untranslated image first, then faces, edges, vertex).
///
/// The engine keeps the result of the most recent [`search`](Self::search)
/// in a single slot read by [`get_indices`](Self::get_indices), so one
/// instance must not serve interleaved queries from several callers. Across
/// trajectory frames the intended pattern is one engine, with
/// [`set_coords`](Self::set_coords) called once per frame.
///
/// # Examples
///
/// ```
/// use periscope_search::PeriodicSearch;
///
/// let mut engine = PeriodicSearch::new([10.0, 10.0, 10.0, 90.0, 90.0, 90.0])?;
/// engine.set_coords(&[
///     [2.0, 2.0, 2.0],
///     [5.0, 5.0, 5.0],
///     [1.1, 1.1, 1.1],
///     [11.0, -11.0, 11.0],
///     [21.0, 21.0, 3.0],
/// ])?;
///
/// // Only the stored point at (1.1, 1.1, 1.1) lies within 1.5 of (1, 1, 1).
/// engine.search(&[1.0, 1.0, 1.0], 1.5)?;
/// assert_eq!(engine.get_indices(), Some(&[2_usize][..]));
///
/// // (11, -11, 11) wrapped to (1, 9, 1); a far-outside query finds it.
/// engine.search(&[21.0, -31.0, 1.0], 1.5)?;
/// assert_eq!(engine.get_indices(), Some(&[3_usize][..]));
/// # Ok::<(), periscope_search::SearchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PeriodicSearch {
    cell: PeriodicCell,
    bucket_size: usize,
    /// Stored points wrapped into the primary cell, in original order.
    wrapped: Vec<Point>,
    /// `None` until the first successful `set_coords`.
    tree: Option<KdTree>,
    /// Single-slot result of the most recent `search`; `None` when the last
    /// search found nothing or no search has run since the last rebuild.
    last_result: Option<Vec<usize>>,
    metrics: SearchMetrics,
}

impl PeriodicSearch {
    /// Create an engine for the box descriptor
    /// `[lx, ly, lz, alpha, beta, gamma]` (angles in degrees, 90° required).
    ///
    /// Returns `Err(SearchError::Cell)` if the box fails validation. The
    /// engine starts without coordinates; [`search`](Self::search) fails
    /// until [`set_coords`](Self::set_coords) runs.
    pub fn new(dimensions: [f64; 6]) -> Result<Self, SearchError> {
        Ok(Self::from_cell(PeriodicCell::from_dimensions(dimensions)?))
    }

    /// As [`new`](Self::new), with an explicit k-d leaf bucket size.
    pub fn with_bucket_size(dimensions: [f64; 6], bucket_size: usize) -> Result<Self, SearchError> {
        Ok(Self::from_cell_with_bucket_size(
            PeriodicCell::from_dimensions(dimensions)?,
            bucket_size,
        ))
    }

    /// Create an engine from an already validated cell.
    pub fn from_cell(cell: PeriodicCell) -> Self {
        Self::from_cell_with_bucket_size(cell, DEFAULT_BUCKET_SIZE)
    }

    /// As [`from_cell`](Self::from_cell), with an explicit k-d leaf bucket
    /// size (zero is treated as one).
    pub fn from_cell_with_bucket_size(cell: PeriodicCell, bucket_size: usize) -> Self {
        Self {
            cell,
            bucket_size: bucket_size.max(1),
            wrapped: Vec::new(),
            tree: None,
            last_result: None,
            metrics: SearchMetrics::default(),
        }
    }

    /// Set (or replace) the stored coordinates and rebuild the index.
    ///
    /// Every row must have exactly 3 components; otherwise this fails with
    /// [`SearchError::Dimension`] and the engine keeps its previous state.
    /// Points are wrapped into the primary cell before indexing; callers
    /// keep their unwrapped originals for lookups by returned index. Any
    /// cached search result is cleared.
    ///
    /// Rows may be anything slice-like: `[f64; 3]` arrays, `Vec<f64>`, or
    /// slices.
    pub fn set_coords<P: AsRef<[f64]>>(&mut self, coords: &[P]) -> Result<(), SearchError> {
        let mut wrapped = Vec::with_capacity(coords.len());
        for row in coords {
            let &[x, y, z] = row.as_ref() else {
                return Err(SearchError::Dimension);
            };
            wrapped.push(self.cell.wrap(&[x, y, z]));
        }
        self.tree = Some(KdTree::with_bucket_size(&wrapped, self.bucket_size));
        self.wrapped = wrapped;
        self.last_result = None;
        self.metrics.rebuilds += 1;
        Ok(())
    }

    /// Find every stored point within `radius` of `center` under
    /// periodicity, caching the result for [`get_indices`](Self::get_indices).
    ///
    /// The centre may lie anywhere; it is wrapped first. A zero radius is a
    /// degenerate exact-match query: it returns only points at exactly the
    /// wrapped centre. Fails with [`SearchError::NoCoordinates`] before any
    /// `set_coords`, with [`SearchError::InvalidRadius`] for a negative or
    /// non-finite radius, and with [`SearchError::RadiusTooLarge`] when
    /// `radius` exceeds [`PeriodicCell::max_search_radius`] (beyond that
    /// bound the single-shell image enumeration would silently miss
    /// neighbours).
    pub fn search(&mut self, center: &Point, radius: f64) -> Result<(), SearchError> {
        let Some(tree) = &self.tree else {
            return Err(SearchError::NoCoordinates);
        };
        self.check_radius(radius)?;

        let wrapped = self.cell.wrap(center);
        let shifts = self.cell.image_shifts(&wrapped, radius);
        let mut found: IndexSet<usize> = IndexSet::new();
        let mut buf = Vec::new();
        for shift in &shifts {
            let image = self.cell.translate(&wrapped, shift);
            tree.query_radius_into(&image, radius, &mut buf);
            found.extend(buf.iter().copied());
            self.metrics.images_visited += 1;
            self.metrics.candidates_returned += buf.len() as u64;
        }

        self.metrics.searches += 1;
        self.metrics.hits += found.len() as u64;
        self.last_result = if found.is_empty() {
            None
        } else {
            Some(found.into_iter().collect())
        };
        Ok(())
    }

    /// Indices found by the most recent [`search`](Self::search), in
    /// first-discovery order.
    ///
    /// `None` when the last search found nothing, no search has run yet, or
    /// [`set_coords`](Self::set_coords) cleared the slot.
    pub fn get_indices(&self) -> Option<&[usize]> {
        self.last_result.as_deref()
    }

    /// The periodic images of `center` relevant to a search at `radius`,
    /// untranslated image first, then face, edge, and vertex images.
    ///
    /// A pure query: it ignores stored coordinates and the cached search
    /// result, and works before any `set_coords`. The returned points are
    /// the wrapped centre translated by whole box edges; an interior centre
    /// yields just its wrapped position. Radius validation matches
    /// [`search`](Self::search).
    pub fn find_centers(&self, center: &Point, radius: f64) -> Result<Vec<Point>, SearchError> {
        self.check_radius(radius)?;
        let wrapped = self.cell.wrap(center);
        Ok(self
            .cell
            .image_shifts(&wrapped, radius)
            .iter()
            .map(|shift| self.cell.translate(&wrapped, shift))
            .collect())
    }

    /// The validated periodic cell this engine searches in.
    pub fn cell(&self) -> &PeriodicCell {
        &self.cell
    }

    /// Number of stored points (zero before any `set_coords`).
    pub fn n_points(&self) -> usize {
        self.wrapped.len()
    }

    /// Stored points wrapped into the primary cell, in original order.
    pub fn wrapped_points(&self) -> &[Point] {
        &self.wrapped
    }

    /// Maximum number of points per k-d leaf.
    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }

    /// Counters accumulated since construction or the last reset.
    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Zero all counters.
    pub fn reset_metrics(&mut self) {
        self.metrics = SearchMetrics::default();
    }

    fn check_radius(&self, radius: f64) -> Result<(), SearchError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(SearchError::InvalidRadius { radius });
        }
        let max = self.cell.max_search_radius();
        if radius > max {
            return Err(SearchError::RadiusTooLarge { radius, max });
        }
        Ok(())
    }
}
