//! Print shortest paths around a 2×2 square for a few endpoint pairs.
//!
//! Usage:
//!   cargo run -p hullpath --example square_detour
//!   cargo run -p hullpath --example square_detour -- random
//!
//! `random` swaps the square for a seeded random ring and random endpoints.

use hullpath::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "square".to_string());
    match mode.as_str() {
        "square" => show_square(),
        "random" => show_random(),
        _ => {
            eprintln!("usage: square_detour [square|random]");
        }
    }
}

fn show_square() {
    let square = ConvexPolygon::new(vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
    ])
    .unwrap();
    let queries = [
        (vector![-1.0, 1.0], vector![3.0, 1.0]),
        (vector![-1.0, 0.0], vector![3.0, 0.0]),
        (vector![0.0, 0.0], vector![3.0, 3.0]),
        (vector![1.0, 1.0], vector![3.0, 3.0]),
    ];
    for (i, (p1, p2)) in queries.into_iter().enumerate() {
        match square.shortest_path(p1, p2) {
            Ok(path) => println!("query {i}: {} points, length {:.4}", path.len(), path_length(&path)),
            Err(e) => println!("query {i}: {e}"),
        }
    }
}

fn show_random() {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 20 },
        ..RadialCfg::default()
    };
    for index in 0..5 {
        let ring = draw_ring_radial(cfg, ReplayToken { seed: 2025, index }).unwrap();
        let poly = ConvexPolygon::new(ring).unwrap();
        let (p1, p2) = draw_exterior_pair(poly.vertices(), 1.5, ReplayToken { seed: 7, index }).unwrap();
        let path = poly.shortest_path(p1, p2).unwrap();
        println!(
            "ring {index}: n={}, path points={}, length={:.4}, straight={:.4}",
            poly.vertex_count(),
            path.len(),
            path_length(&path),
            distance(p1, p2)
        );
    }
}
