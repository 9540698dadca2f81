use periscope_cell::PeriodicCell;
use periscope_search::PeriodicSearch;
use periscope_test_utils::brute_force_periodic;
use periscope_test_utils::clouds::{point_cloud, scattered_cloud};
use proptest::prelude::*;

fn sorted(indices: Option<&[usize]>) -> Vec<usize> {
    let mut v = indices.map(<[usize]>::to_vec).unwrap_or_default();
    v.sort_unstable();
    v
}

#[test]
fn dense_cloud_agrees_with_minimum_image_reference() {
    let lengths = [10.0, 10.0, 10.0];
    let cell = PeriodicCell::from_lengths(lengths).unwrap();
    let points = point_cloud(3, 400, lengths);

    let mut engine = PeriodicSearch::from_cell(cell.clone());
    engine.set_coords(&points).unwrap();

    for center in &[
        [5.0, 5.0, 5.0],
        [0.05, 0.05, 0.05],
        [9.95, 0.1, 5.0],
        [0.0, 0.0, 0.0],
    ] {
        for radius in [0.4, 1.5, 3.0, 5.0] {
            engine.search(center, radius).unwrap();
            assert_eq!(
                sorted(engine.get_indices()),
                brute_force_periodic(&cell, &points, center, radius),
                "center {center:?} radius {radius}"
            );
        }
    }
}

#[test]
fn unwrapped_input_coordinates_do_not_change_results() {
    // The same cloud handed to the engine unwrapped must produce the same
    // neighbour sets: ingest wraps, and periodic distance is wrap-invariant.
    let lengths = [8.0, 6.0, 10.0];
    let cell = PeriodicCell::from_lengths(lengths).unwrap();
    let scattered = scattered_cloud(17, 250, lengths);
    let wrapped: Vec<_> = scattered.iter().map(|p| cell.wrap(p)).collect();

    let mut a = PeriodicSearch::from_cell(cell.clone());
    a.set_coords(&scattered).unwrap();
    let mut b = PeriodicSearch::from_cell(cell.clone());
    b.set_coords(&wrapped).unwrap();

    for center in &[[4.0, 3.0, 5.0], [-3.5, 12.0, 0.2]] {
        a.search(center, 2.5).unwrap();
        b.search(center, 2.5).unwrap();
        assert_eq!(a.get_indices(), b.get_indices());
        assert_eq!(
            sorted(a.get_indices()),
            brute_force_periodic(&cell, &scattered, center, 2.5)
        );
    }
}

#[test]
fn per_frame_rebuild_reuses_engine() {
    let lengths = [10.0, 10.0, 10.0];
    let cell = PeriodicCell::from_lengths(lengths).unwrap();
    let mut engine = PeriodicSearch::from_cell(cell.clone());

    for frame in 0..5u64 {
        let points = scattered_cloud(100 + frame, 120, lengths);
        engine.set_coords(&points).unwrap();
        engine.search(&[1.0, 9.0, 1.0], 2.0).unwrap();
        assert_eq!(
            sorted(engine.get_indices()),
            brute_force_periodic(&cell, &points, &[1.0, 9.0, 1.0], 2.0),
            "frame {frame}"
        );
    }
    assert_eq!(engine.metrics().rebuilds, 5);
    assert_eq!(engine.metrics().searches, 5);
}

proptest! {
    #[test]
    fn random_clouds_agree_with_minimum_image_reference(
        seed in 0u64..500,
        n in 0usize..150,
        cx in -20.0..30.0f64,
        cy in -20.0..30.0f64,
        cz in -20.0..30.0f64,
        radius_frac in 0.01..1.0f64,
    ) {
        let lengths = [10.0, 7.0, 12.0];
        let cell = PeriodicCell::from_lengths(lengths).unwrap();
        let points = scattered_cloud(seed, n, lengths);
        let radius = radius_frac * cell.max_search_radius();

        let mut engine = PeriodicSearch::from_cell(cell.clone());
        engine.set_coords(&points).unwrap();
        engine.search(&[cx, cy, cz], radius).unwrap();

        prop_assert_eq!(
            sorted(engine.get_indices()),
            brute_force_periodic(&cell, &points, &[cx, cy, cz], radius)
        );
    }

    #[test]
    fn bucket_size_never_changes_results(
        seed in 0u64..200,
        bucket in 1usize..24,
        cx in 0.0..10.0f64,
        cy in 0.0..10.0f64,
        cz in 0.0..10.0f64,
    ) {
        let lengths = [10.0, 10.0, 10.0];
        let points = point_cloud(seed, 80, lengths);

        let mut reference = PeriodicSearch::new([10.0, 10.0, 10.0, 90.0, 90.0, 90.0]).unwrap();
        reference.set_coords(&points).unwrap();
        reference.search(&[cx, cy, cz], 2.0).unwrap();

        let mut tuned = PeriodicSearch::with_bucket_size(
            [10.0, 10.0, 10.0, 90.0, 90.0, 90.0],
            bucket,
        ).unwrap();
        tuned.set_coords(&points).unwrap();
        tuned.search(&[cx, cy, cz], 2.0).unwrap();

        prop_assert_eq!(reference.get_indices(), tuned.get_indices());
    }
}
