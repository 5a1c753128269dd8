//! Convex polygon obstacle: validation, point classification, shortest paths.
//!
//! Purpose
//! - Hold a validated convex vertex ring (`ConvexPolygon`) and answer
//!   "shortest path from p1 to p2 that never crosses the interior" queries.
//! - Touching the boundary is allowed; only the open interior is blocked.
//!
//! Conventions
//! - The ring keeps the caller's orientation; it is detected once at
//!   construction and used as the reference sign for every turn test.
//! - `Direction::Forward` walks increasing indices, `Backward` decreasing.
//!   Detour ties resolve to `Forward`.
//! - All comparisons are exact (see `geom2::Turn`).
//!
//! References
//! - Code cross-refs: `geom2::{Line, Turn, cross_product}`, `route::Route`

mod convex;
mod route;

pub use convex::{Classification, ConvexPolygon};
pub use route::{Detour, DirectCheck, Direction, Route};

use crate::geom2::DegenerateLine;
use std::fmt;

/// Which endpoint of a path query failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    First,
    Second,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::First => write!(f, "first"),
            Endpoint::Second => write!(f, "second"),
        }
    }
}

/// Errors surfaced by polygon construction and path queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// Fewer than three vertices, or all vertices on one line.
    NotAPolygon { vertices: usize },
    /// Turn direction flips (or the ring winds more than once) at vertex `at`.
    NotConvex { at: usize },
    /// Two coincident points where a line is required.
    DegenerateLine,
    /// A query endpoint lies strictly inside the polygon.
    PointInsidePolygon { endpoint: Endpoint },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::NotAPolygon { vertices } if *vertices < 3 => write!(
                f,
                "a polygon must have at least three points (got {vertices})"
            ),
            PolygonError::NotAPolygon { vertices } => {
                write!(f, "the {vertices} points are collinear and enclose no area")
            }
            PolygonError::NotConvex { at } => write!(
                f,
                "the points do not form a convex polygon (violation at vertex {at})"
            ),
            PolygonError::DegenerateLine => write!(f, "{}", DegenerateLine),
            PolygonError::PointInsidePolygon { endpoint } => {
                write!(f, "the {endpoint} point is inside the polygon")
            }
        }
    }
}

impl std::error::Error for PolygonError {}

impl From<DegenerateLine> for PolygonError {
    fn from(_: DegenerateLine) -> Self {
        PolygonError::DegenerateLine
    }
}
