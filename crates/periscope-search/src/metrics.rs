//! Cumulative counters for engine activity.
//!
//! [`SearchMetrics`] tracks how much work the engine has done since
//! construction (or the last reset), enabling per-frame telemetry and
//! sanity checks on image-enumeration cost.

/// Counters accumulated across engine calls.
///
/// [`PeriodicSearch::search`](crate::PeriodicSearch::search) and
/// [`PeriodicSearch::set_coords`](crate::PeriodicSearch::set_coords) update
/// these; `find_centers` and retrievals do not. Read via
/// [`PeriodicSearch::metrics`](crate::PeriodicSearch::metrics), zero via
/// [`PeriodicSearch::reset_metrics`](crate::PeriodicSearch::reset_metrics).
#[derive(Clone, Debug, Default)]
pub struct SearchMetrics {
    /// Number of completed `search` calls.
    pub searches: u64,
    /// Number of `set_coords` index rebuilds.
    pub rebuilds: u64,
    /// Cumulative periodic images visited across searches (at least one per
    /// search, at most eight).
    pub images_visited: u64,
    /// Cumulative indices returned by inner tree queries, before cross-image
    /// deduplication.
    pub candidates_returned: u64,
    /// Cumulative unique neighbours stored as search results.
    pub hits: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SearchMetrics::default();
        assert_eq!(m.searches, 0);
        assert_eq!(m.rebuilds, 0);
        assert_eq!(m.images_visited, 0);
        assert_eq!(m.candidates_returned, 0);
        assert_eq!(m.hits, 0);
    }

    #[test]
    fn metrics_fields_accessible() {
        let m = SearchMetrics {
            searches: 4,
            rebuilds: 2,
            images_visited: 11,
            candidates_returned: 30,
            hits: 9,
        };
        assert_eq!(m.searches, 4);
        assert_eq!(m.rebuilds, 2);
        assert_eq!(m.images_visited, 11);
        assert_eq!(m.candidates_returned, 30);
        assert_eq!(m.hits, 9);
    }
}
