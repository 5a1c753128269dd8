use super::*;
use nalgebra::vector;
use ::rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn distance_symmetric_and_zero_iff_equal() {
    let a = vector![1.0, 2.0];
    let b = vector![4.0, 6.0];
    assert!((distance(a, b) - 5.0).abs() < 1e-12);
    assert_eq!(distance(a, b), distance(b, a));
    assert_eq!(distance(a, a), 0.0);
}

#[test]
fn cross_product_sign_and_area() {
    let o = vector![0.0, 0.0];
    // x-axis then y-axis: counter-clockwise
    let ccw = cross_product(o, vector![2.0, 0.0], o, vector![0.0, 3.0]);
    assert_eq!(ccw, 6.0);
    assert_eq!(Turn::of(ccw), Turn::Left);
    let cw = cross_product(o, vector![0.0, 3.0], o, vector![2.0, 0.0]);
    assert_eq!(Turn::of(cw), Turn::Right);
    // Vectors need not share an origin.
    let shifted = cross_product(vector![1.0, 1.0], vector![3.0, 1.0], vector![5.0, 5.0], vector![5.0, 8.0]);
    assert_eq!(shifted, 6.0);
    let parallel = cross_product(o, vector![1.0, 1.0], vector![2.0, 0.0], vector![4.0, 2.0]);
    assert_eq!(Turn::of(parallel), Turn::Straight);
}

#[test]
fn line_coefficients_and_relation() {
    let p1 = vector![1.0, 2.0];
    let p2 = vector![3.0, 5.0];
    let l = Line::through(p1, p2).unwrap();
    assert_eq!((l.a, l.b, l.c), (-3.0, 2.0, 1.0 * 5.0 - 3.0 * 2.0));
    assert_eq!(line_relation(p1, &l), 0.0);
    assert_eq!(line_relation(p2, &l), 0.0);
    // left of p1 -> p2 is positive, right is negative
    assert!(line_relation(vector![0.0, 5.0], &l) > 0.0);
    assert!(line_relation(vector![5.0, 0.0], &l) < 0.0);
}

#[test]
fn line_through_coincident_points_fails() {
    let p = vector![0.5, -1.0];
    assert_eq!(Line::through(p, p), Err(DegenerateLine));
}

#[test]
fn relation_sign_matches_cross_product_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let mut pt = || vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
        let (p1, p2, q) = (pt(), pt(), pt());
        let l = Line::through(p1, p2).unwrap();
        let rel = line_relation(q, &l);
        let cross = cross_product(p1, p2, p1, q);
        assert!((rel - cross).abs() < 1e-9);
    }
}

#[test]
fn path_length_sums_segments() {
    let pts = [vector![0.0, 0.0], vector![3.0, 4.0], vector![3.0, 0.0]];
    assert!((path_length(&pts) - 9.0).abs() < 1e-12);
    assert_eq!(path_length(&pts[..1]), 0.0);
}

#[test]
fn hull_drops_interior_and_collinear_points() {
    let points = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
        vector![1.0, 1.0],
        vector![0.0, 2.0],
    ];
    let hull = convex_hull(&points).unwrap();
    assert_eq!(
        hull,
        vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![2.0, 2.0], vector![0.0, 2.0]]
    );
    assert!(convex_hull(&[vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]]).is_none());
}
