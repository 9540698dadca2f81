//! Core geometric primitives for the periscope neighbour-search toolkit.
//!
//! This crate defines the [`Point`] alias used throughout the workspace and
//! the squared-distance helpers shared by the spatial index and the periodic
//! search engine. It has no dependencies and no opinions about periodicity;
//! everything here is plain Cartesian geometry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod point;

pub use point::{distance, sq_distance, Point};
