use periscope_kdtree::KdTree;
use periscope_test_utils::brute_force_radius;
use periscope_test_utils::clouds::point_cloud;
use proptest::prelude::*;

#[test]
fn dense_cloud_matches_brute_force_across_radii() {
    let points = point_cloud(11, 500, [10.0, 10.0, 10.0]);
    let tree = KdTree::build(&points);
    for center in &[[5.0, 5.0, 5.0], [0.1, 0.1, 0.1], [9.9, 0.2, 5.0]] {
        for radius in [0.0, 0.5, 1.5, 4.0, 20.0] {
            assert_eq!(
                tree.query_radius(center, radius),
                brute_force_radius(&points, center, radius),
                "center {center:?} radius {radius}"
            );
        }
    }
}

#[test]
fn single_point_buckets_match_brute_force() {
    let points = point_cloud(23, 200, [6.0, 8.0, 4.0]);
    let tree = KdTree::with_bucket_size(&points, 1);
    for center in &[[3.0, 4.0, 2.0], [0.0, 0.0, 0.0]] {
        assert_eq!(
            tree.query_radius(center, 2.0),
            brute_force_radius(&points, center, 2.0)
        );
    }
}

proptest! {
    #[test]
    fn random_clouds_match_brute_force(
        seed in 0u64..1_000,
        n in 0usize..200,
        bucket in 1usize..32,
        cx in -5.0..15.0f64,
        cy in -5.0..15.0f64,
        cz in -5.0..15.0f64,
        radius in 0.0..12.0f64,
    ) {
        let points = point_cloud(seed, n, [10.0, 10.0, 10.0]);
        let tree = KdTree::with_bucket_size(&points, bucket);
        let center = [cx, cy, cz];
        prop_assert_eq!(
            tree.query_radius(&center, radius),
            brute_force_radius(&points, &center, radius)
        );
    }
}
