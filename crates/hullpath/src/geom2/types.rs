//! Basic 2D types used by the polygon routines.
//!
//! - `Point`: plain coordinate pair (nalgebra column vector).
//! - `Line`: implicit line `a·x + b·y + c = 0` through two distinct points.
//! - `Turn`: exact sign of a cross product; the one place that decides how
//!   zero is treated.
//!
//! References
//! - Code cross-refs: `util::{cross_product, line_relation}`, `polygon::ConvexPolygon`

use nalgebra::Vector2;
use std::fmt;

/// A point in the plane. Equality is exact coordinate equality.
pub type Point = Vector2<f64>;

/// Error for a line requested through two coincident points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegenerateLine;

impl fmt::Display for DegenerateLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a line must be defined by two distinct points")
    }
}

impl std::error::Error for DegenerateLine {}

/// Directed line `a·x + b·y + c = 0`.
///
/// Built from `p1 → p2` as `a = p1.y − p2.y`, `b = p2.x − p1.x`,
/// `c = p1.x·p2.y − p2.x·p1.y`, so points left of the direction evaluate
/// positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Line through `p1` and `p2`; fails if the points coincide.
    pub fn through(p1: Point, p2: Point) -> Result<Self, DegenerateLine> {
        if p1 == p2 {
            return Err(DegenerateLine);
        }
        Ok(Self {
            a: p1.y - p2.y,
            b: p2.x - p1.x,
            c: p1.x * p2.y - p2.x * p1.y,
        })
    }

    /// Signed value `a·x + b·y + c` at `p`.
    #[inline]
    pub fn eval(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }
}

/// Exact turn classification of a signed cross product.
///
/// Tolerance policy: none. Zero means collinear, and only zero. Callers that
/// need "outside or touching" compare against `Straight` explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Counter-clockwise (positive cross product).
    Left,
    /// Clockwise (negative cross product).
    Right,
    /// Collinear (zero cross product).
    Straight,
}

impl Turn {
    #[inline]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Turn::Left
        } else if value < 0.0 {
            Turn::Right
        } else {
            Turn::Straight
        }
    }

    /// `+1.0` for `Left`, `-1.0` for `Right`, `0.0` for `Straight`.
    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            Turn::Left => 1.0,
            Turn::Right => -1.0,
            Turn::Straight => 0.0,
        }
    }
}
