//! Periscope: radius neighbour search in periodic orthorhombic cells.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all periscope sub-crates. For most users, adding `periscope` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use periscope::prelude::*;
//!
//! // A 10×10×10 box; angles are degrees and must be 90° (orthorhombic).
//! let mut engine = PeriodicSearch::new([10.0, 10.0, 10.0, 90.0, 90.0, 90.0])?;
//!
//! // Coordinates may lie outside the box; they are wrapped on ingest.
//! engine.set_coords(&[
//!     [2.0, 2.0, 2.0],
//!     [5.0, 5.0, 5.0],
//!     [1.1, 1.1, 1.1],
//!     [11.0, -11.0, 11.0], // wraps to (1, 9, 1)
//!     [21.0, 21.0, 3.0],   // wraps to (1, 1, 3)
//! ])?;
//!
//! // A cutoff query near the cell vertex: only (1.1, 1.1, 1.1) is in range.
//! engine.search(&[1.0, 1.0, 1.0], 1.5)?;
//! assert_eq!(engine.get_indices(), Some(&[2_usize][..]));
//!
//! // The periodic images of a probe point near a face.
//! let centers = engine.find_centers(&[1.0, 5.0, 5.0], 1.5)?;
//! assert_eq!(centers, vec![[1.0, 5.0, 5.0], [11.0, 5.0, 5.0]]);
//! # Ok::<(), periscope::search::SearchError>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`geometry`] | `periscope-core` | `Point` alias and distance helpers |
//! | [`cell`] | `periscope-cell` | Periodic cell: validation, wrapping, image shifts |
//! | [`kdtree`] | `periscope-kdtree` | Balanced k-d tree with radius queries |
//! | [`search`] | `periscope-search` | The periodic search engine and its metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core geometric primitives (`periscope-core`).
///
/// The [`geometry::Point`] alias (`[f64; 3]`) and squared-distance helpers
/// shared by every other crate in the workspace.
pub use periscope_core as geometry;

/// Periodic cell model (`periscope-cell`).
///
/// [`cell::PeriodicCell`] validates a 6-component box descriptor, wraps
/// coordinates into the primary cell, computes minimum-image distances, and
/// enumerates the image shifts a radius query must visit.
pub use periscope_cell as cell;

/// Balanced k-d tree (`periscope-kdtree`).
///
/// [`kdtree::KdTree`] answers exact radius queries in plain Cartesian
/// space; the engine layers periodicity on top of it.
pub use periscope_kdtree as kdtree;

/// Periodic search engine (`periscope-search`).
///
/// [`search::PeriodicSearch`] is the main entry point: set coordinates per
/// frame, search with a cutoff, retrieve indices.
pub use periscope_search as search;

/// Common imports for typical periscope usage.
///
/// ```rust
/// use periscope::prelude::*;
/// ```
///
/// This imports the engine, the cell model, the tree, their error types,
/// and the core point helpers.
pub mod prelude {
    // Geometry
    pub use periscope_core::{distance, sq_distance, Point};

    // Cell model
    pub use periscope_cell::{CellError, ImageShift, PeriodicCell};

    // Spatial index
    pub use periscope_kdtree::{KdTree, DEFAULT_BUCKET_SIZE};

    // Engine
    pub use periscope_search::{PeriodicSearch, SearchError, SearchMetrics};
}
