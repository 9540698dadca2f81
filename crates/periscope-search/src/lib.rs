//! Periodic radius neighbour search engine.
//!
//! [`PeriodicSearch`] ties the periodic cell and the k-d tree together:
//! stored coordinates are wrapped into the primary cell when set, and a
//! query is answered by replicating its wrapped centre into every periodic
//! image that could reach a stored point, running the inner tree query per
//! image, and deduplicating the union in first-discovery order.
//!
//! The engine moves through three states: no coordinates yet, coordinates
//! set (index built), and searched (a result cached). [`PeriodicSearch::search`]
//! stores its result on the engine; [`PeriodicSearch::get_indices`] reads it
//! back. That single result slot makes one engine instance unsuitable for
//! interleaved queries from several callers; use one engine per thread.
//!
//! The intended usage pattern across trajectory frames is one engine,
//! rebuilt per frame via [`PeriodicSearch::set_coords`] and queried as often
//! as needed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod metrics;

pub use engine::PeriodicSearch;
pub use error::SearchError;
pub use metrics::SearchMetrics;
