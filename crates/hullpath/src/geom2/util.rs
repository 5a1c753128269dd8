use std::cmp::Ordering;

use super::types::{Line, Point};

/// Euclidean distance between `p1` and `p2`.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p1 - p2).norm()
}

/// Cross product of the vectors `a2 − a1` and `b2 − b1`.
///
/// Positive when turning from the first vector to the second is
/// counter-clockwise; for a shared origin the magnitude is twice the
/// triangle area.
#[inline]
pub fn cross_product(a1: Point, a2: Point, b1: Point, b2: Point) -> f64 {
    let a = a2 - a1;
    let b = b2 - b1;
    a.x * b.y - a.y * b.x
}

/// Signed evaluation of `point` against `line`; zero means on the line.
#[inline]
pub fn line_relation(point: Point, line: &Line) -> f64 {
    line.eval(point)
}

/// Total length of the polyline through `points` (0 for fewer than two).
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Andrew's monotone chain convex hull (returns hull in CCW order, collinear
/// points dropped). `None` when fewer than three non-collinear points remain.
pub fn convex_hull(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup();
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}

#[inline]
fn turn(a: Point, b: Point, c: Point) -> f64 {
    cross_product(a, b, a, c)
}
