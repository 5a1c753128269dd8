//! Shortest obstacle-avoiding paths around a `ConvexPolygon`.
//!
//! Model
//! - From `p1`, walk the ring in one direction to the anchor: the last vertex
//!   of the chain `p1` sees, i.e. the tangent point on that side.
//! - If `p2` lies outside the tangent ray `p1 → anchor` (or both endpoints sit
//!   on the outer side of one edge line), the straight segment is clear.
//! - Otherwise hug the ring from the anchor until `p2` sees the next edge (the
//!   exit), once per direction, and keep the shorter detour.
//!
//! References
//! - Code cross-refs: `ConvexPolygon::{classify, sees, walk_until}`

use super::convex::ConvexPolygon;
use super::{Endpoint, PolygonError};
use crate::geom2::{cross_product, distance, Point};

/// Traversal direction along the stored vertex order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Increasing vertex index.
    Forward,
    /// Decreasing vertex index.
    Backward,
}

impl Direction {
    /// Evaluation order; the first entry wins detour ties.
    pub const BOTH: [Direction; 2] = [Direction::Forward, Direction::Backward];

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    #[inline]
    pub(super) fn signum(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Outcome of the straight-segment test in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectCheck {
    /// The segment `p1 → p2` stays outside the interior.
    Clear,
    /// Blocked; `anchor` is where a detour in this direction leaves `p1`'s view.
    Blocked { anchor: usize },
}

/// One polygon-hugging detour: `p1 → v[entry] → … → v[exit] → p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detour {
    pub direction: Direction,
    pub entry: usize,
    pub exit: usize,
    pub length: f64,
}

/// How a query is answered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Direct,
    /// `chosen` is never longer than `alternate`.
    Around { chosen: Detour, alternate: Detour },
}

impl ConvexPolygon {
    /// Shortest path from `p1` to `p2` that does not cross the interior.
    ///
    /// Returns `[p1, p2]` when the segment is clear, otherwise `p1`, the ring
    /// vertices from entry to exit (inclusive) in the chosen direction, `p2`.
    pub fn shortest_path(&self, p1: Point, p2: Point) -> Result<Vec<Point>, PolygonError> {
        match self.route(p1, p2)? {
            Route::Direct => Ok(vec![p1, p2]),
            Route::Around { chosen, .. } => Ok(self.splice(p1, p2, &chosen)),
        }
    }

    /// Decide between the direct segment and the two detours.
    pub fn route(&self, p1: Point, p2: Point) -> Result<Route, PolygonError> {
        let start = self.exterior(p1, Endpoint::First)?.nearest;
        self.exterior(p2, Endpoint::Second)?;

        let mut anchors = [start; 2];
        for (slot, dir) in anchors.iter_mut().zip(Direction::BOTH) {
            match self.direct_path(p1, p2, start, dir) {
                DirectCheck::Clear => return Ok(Route::Direct),
                DirectCheck::Blocked { anchor } => *slot = anchor,
            }
        }

        let forward = self.detour(p1, p2, anchors[0], Direction::Forward);
        let backward = self.detour(p1, p2, anchors[1], Direction::Backward);
        let (chosen, alternate) = if backward.length < forward.length {
            (backward, forward)
        } else {
            (forward, backward)
        };
        Ok(Route::Around { chosen, alternate })
    }

    /// Straight-segment feasibility seen from `p1`, walking in `dir` from `start`.
    pub fn direct_path(&self, p1: Point, p2: Point, start: usize, dir: Direction) -> DirectCheck {
        let anchor = self.anchor(p1, start, dir);
        let a = self.vertices()[anchor];
        let sense = self.orientation().signum() * dir.signum();
        if sense * cross_product(p1, a, a, p2) <= 0.0 {
            return DirectCheck::Clear;
        }
        // p2 inside the tangent cone but in front of the ring.
        if self.shares_outer_side(p1, p2) {
            return DirectCheck::Clear;
        }
        DirectCheck::Blocked { anchor }
    }

    /// Hug the ring from `anchor` in `dir` until `p2` sees the next edge.
    pub fn detour(&self, p1: Point, p2: Point, anchor: usize, dir: Direction) -> Detour {
        let v = self.vertices();
        let mut length = distance(p1, v[anchor]);
        let mut k = anchor;
        for _ in 0..v.len() {
            if self.sees(p2, k, dir) {
                break;
            }
            let next = self.step(k, dir);
            length += distance(v[k], v[next]);
            k = next;
        }
        length += distance(v[k], p2);
        Detour {
            direction: dir,
            entry: anchor,
            exit: k,
            length,
        }
    }

    fn anchor(&self, p1: Point, start: usize, dir: Direction) -> usize {
        let mut k = start;
        // The nearest vertex can sit behind the ring; move onto p1's visible chain.
        if !self.sees(p1, k, dir) && !self.sees(p1, k, dir.reversed()) {
            k = self.walk_until(k, dir, |i| self.sees(p1, i, dir));
        }
        self.walk_until(k, dir, |i| !self.sees(p1, i, dir))
    }

    fn shares_outer_side(&self, p1: Point, p2: Point) -> bool {
        (0..self.vertex_count())
            .any(|i| self.sees(p1, i, Direction::Forward) && self.sees(p2, i, Direction::Forward))
    }

    fn splice(&self, p1: Point, p2: Point, d: &Detour) -> Vec<Point> {
        let v = self.vertices();
        let mut path = vec![p1];
        let mut k = d.entry;
        loop {
            path.push(v[k]);
            if k == d.exit {
                break;
            }
            k = self.step(k, d.direction);
        }
        path.push(p2);
        path
    }
}
