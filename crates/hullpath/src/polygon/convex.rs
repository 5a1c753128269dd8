//! `ConvexPolygon`: construction-time validation and point classification.

use super::route::Direction;
use super::{Endpoint, PolygonError};
use crate::geom2::{convex_hull, cross_product, distance, line_relation, Line, Point, Turn};

/// Validated convex vertex ring.
///
/// Invariants (checked once in `new`, never re-checked):
/// - At least three vertices, not all collinear.
/// - Consecutive vertices are distinct (every edge defines a line).
/// - Turn signs never flip along the ring and the ring winds exactly once.
/// - `orientation` is `Left` for counter-clockwise rings, `Right` for clockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Point>,
    orientation: Turn,
}

/// Result of `ConvexPolygon::classify`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Strictly inside; boundary points are not interior.
    pub interior: bool,
    /// Index of the nearest vertex (first one on ties).
    pub nearest: usize,
}

impl ConvexPolygon {
    /// Validate `points` as a convex ring, keeping their order and orientation.
    pub fn new(points: Vec<Point>) -> Result<Self, PolygonError> {
        if !is_polygon(&points) {
            return Err(PolygonError::NotAPolygon {
                vertices: points.len(),
            });
        }
        let n = points.len();
        for i in 0..n {
            Line::through(points[i], points[(i + 1) % n])?;
        }
        let orientation = check_convex(&points)?;
        check_single_winding(&points)?;
        Ok(Self {
            vertices: points,
            orientation,
        })
    }

    /// Convex hull of an arbitrary point cloud, as a counter-clockwise polygon.
    pub fn hull_of(points: &[Point]) -> Result<Self, PolygonError> {
        let hull = convex_hull(points).ok_or(PolygonError::NotAPolygon {
            vertices: points.len(),
        })?;
        Self::new(hull)
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Ring orientation: `Turn::Left` (counter-clockwise) or `Turn::Right`.
    #[inline]
    pub fn orientation(&self) -> Turn {
        self.orientation
    }

    /// Classify `q` as interior or not and report its nearest vertex.
    ///
    /// The wedge at the nearest vertex (its two incident edges) rejects most
    /// exterior points. A point inside that wedge is confirmed against every
    /// edge: an exterior point beside a long edge can have its nearest vertex
    /// on the far side of the polygon. At a collinear vertex the wedge is flat
    /// and the all-edges test decides alone.
    pub fn classify(&self, q: Point) -> Result<Classification, PolygonError> {
        let v = &self.vertices;
        let mut nearest = 0;
        let mut best = distance(q, v[0]);
        for (i, p) in v.iter().enumerate().skip(1) {
            let d = distance(q, *p);
            if d < best {
                best = d;
                nearest = i;
            }
        }
        let prev = self.step(nearest, Direction::Backward);
        let next = self.step(nearest, Direction::Forward);

        let to_prev = Line::through(v[nearest], v[prev])?;
        let to_next = Line::through(v[nearest], v[next])?;
        let next_side = line_relation(v[next], &to_prev);
        let prev_side = line_relation(v[prev], &to_next);
        let in_wedge = if next_side == 0.0 || prev_side == 0.0 {
            true
        } else {
            line_relation(q, &to_prev) * next_side > 0.0 && line_relation(q, &to_next) * prev_side > 0.0
        };
        let interior = in_wedge && self.contains_strict(q);
        Ok(Classification { interior, nearest })
    }

    /// `q` lies strictly inside every edge line.
    pub fn contains_strict(&self, q: Point) -> bool {
        let s = self.orientation.signum();
        let v = &self.vertices;
        (0..v.len()).all(|i| s * cross_product(v[i], v[self.step(i, Direction::Forward)], v[i], q) > 0.0)
    }

    /// Fail with `PointInsidePolygon` if `q` is strictly interior.
    pub(super) fn exterior(&self, q: Point, endpoint: Endpoint) -> Result<Classification, PolygonError> {
        let c = self.classify(q)?;
        if c.interior {
            return Err(PolygonError::PointInsidePolygon { endpoint });
        }
        Ok(c)
    }

    /// Neighbor of vertex `i` in direction `dir` (cyclic).
    #[inline]
    pub(super) fn step(&self, i: usize, dir: Direction) -> usize {
        let n = self.vertices.len();
        match dir {
            Direction::Forward => (i + 1) % n,
            Direction::Backward => (i + n - 1) % n,
        }
    }

    /// `p` is on the outer side of, or on, the line of the edge leaving vertex
    /// `k` in direction `dir`.
    #[inline]
    pub(super) fn sees(&self, p: Point, k: usize, dir: Direction) -> bool {
        let v = &self.vertices;
        let next = self.step(k, dir);
        let sense = self.orientation.signum() * dir.signum();
        sense * cross_product(p, v[k], v[k], v[next]) <= 0.0
    }

    /// Walk from `start` in `dir` until `stop` holds; after a full lap without
    /// a hit, returns `start`.
    pub(super) fn walk_until(&self, start: usize, dir: Direction, stop: impl Fn(usize) -> bool) -> usize {
        let mut k = start;
        for _ in 0..self.vertices.len() {
            if stop(k) {
                return k;
            }
            k = self.step(k, dir);
        }
        k
    }
}

/// Vertex count > 2.
fn is_polygon(points: &[Point]) -> bool {
    points.len() > 2
}

/// Running-sign scan over consecutive triples. Returns the ring orientation.
fn check_convex(points: &[Point]) -> Result<Turn, PolygonError> {
    let n = points.len();
    let mut seen = Turn::Straight;
    for i in 0..n {
        let (a, b, c) = (points[i], points[(i + 1) % n], points[(i + 2) % n]);
        let t = Turn::of(cross_product(a, b, b, c));
        if t == Turn::Straight {
            continue;
        }
        if seen == Turn::Straight {
            seen = t;
        } else if t != seen {
            return Err(PolygonError::NotConvex { at: (i + 1) % n });
        }
    }
    if seen == Turn::Straight {
        return Err(PolygonError::NotAPolygon { vertices: n });
    }
    Ok(seen)
}

/// With consistent turns, each edge-direction component changes sign exactly
/// twice per winding; more means a star-shaped ring such as a pentagram.
fn check_single_winding(points: &[Point]) -> Result<(), PolygonError> {
    let n = points.len();
    let edge = |i: usize| points[(i + 1) % n] - points[i];
    for axis in 0..2 {
        let mut last = (0..n)
            .rev()
            .map(|i| edge(i)[axis])
            .find(|c| *c != 0.0)
            .map(|c| c > 0.0);
        let mut flips = 0;
        for i in 0..n {
            let c = edge(i)[axis];
            if c == 0.0 {
                continue;
            }
            let positive = c > 0.0;
            if last != Some(positive) {
                flips += 1;
                if flips > 2 {
                    return Err(PolygonError::NotConvex { at: i });
                }
            }
            last = Some(positive);
        }
    }
    Ok(())
}
