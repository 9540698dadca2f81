//! Test utilities for periscope development.
//!
//! Brute-force reference searches ([`brute_force_radius`],
//! [`brute_force_periodic`]) that the k-d tree and the periodic engine are
//! cross-checked against, plus deterministic point-cloud generators in
//! [`clouds`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod clouds;

use periscope_cell::PeriodicCell;
use periscope_core::{sq_distance, Point};

/// Indices of `points` within `radius` of `center` under plain Euclidean
/// distance, ascending. Boundary inclusive, matching the tree contract.
pub fn brute_force_radius(points: &[Point], center: &Point, radius: f64) -> Vec<usize> {
    let r_sq = radius * radius;
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| sq_distance(center, p) <= r_sq)
        .map(|(i, _)| i)
        .collect()
}

/// Indices of `points` within `radius` of `center` through the nearest
/// periodic image, ascending.
///
/// Periodic distance is unchanged by wrapping either argument, so this is
/// the reference the engine must agree with on the *set* of indices.
/// Engine output is in discovery order; sort it before comparing.
pub fn brute_force_periodic(
    cell: &PeriodicCell,
    points: &[Point],
    center: &Point,
    radius: f64,
) -> Vec<usize> {
    let r_sq = radius * radius;
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| cell.min_image_sq_distance(center, p) <= r_sq)
        .map(|(i, _)| i)
        .collect()
}
