//! End-to-end trajectory sweep example.
//!
//! Demonstrates: build engine → per-frame set_coords → cutoff searches at
//! interior/face/vertex probes → read indices and metrics.

use periscope_bench::{frame_cloud, probe_points};
use periscope_search::PeriodicSearch;

fn main() {
    println!("=== Periscope Trajectory Sweep ===\n");

    const LENGTHS: [f64; 3] = [50.0, 50.0, 50.0];
    let mut engine = PeriodicSearch::new([50.0, 50.0, 50.0, 90.0, 90.0, 90.0]).unwrap();
    let probes = probe_points(LENGTHS);

    // --- Sweep: 10 frames, 4 probes each ---
    println!("10 frames, 5000 points, cutoff 4.0");
    for frame in 0..10u64 {
        engine.set_coords(&frame_cloud(frame, 5_000, LENGTHS)).unwrap();

        let mut per_probe = Vec::with_capacity(probes.len());
        for probe in &probes {
            engine.search(probe, 4.0).unwrap();
            per_probe.push(engine.get_indices().map_or(0, <[usize]>::len));
        }

        println!(
            "  frame {:>2}: neighbours per probe = {:?}",
            frame, per_probe
        );
    }

    let m = engine.metrics();
    println!(
        "\nmetrics: rebuilds={}, searches={}, images_visited={}, candidates={}, hits={}",
        m.rebuilds, m.searches, m.images_visited, m.candidates_returned, m.hits,
    );

    // --- Periodic images of a probe near the cell vertex ---
    let centers = engine.find_centers(&[1.0, 1.0, 1.0], 4.0).unwrap();
    println!("\nvertex probe (1,1,1) has {} periodic images in range:", centers.len());
    for c in centers {
        println!("  [{:>5.1}, {:>5.1}, {:>5.1}]", c[0], c[1], c[2]);
    }
}
