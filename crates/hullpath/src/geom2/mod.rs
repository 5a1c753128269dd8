//! Plane geometry primitives: points, implicit lines, turn signs.
//!
//! Purpose
//! - Provide the small value types and predicates that `ConvexPolygon`
//!   validation and routing are written in.
//! - Keep every comparison exact; `Turn::of` is the only sign classifier.
//!
//! References
//! - Code cross-refs: `Point`, `Line`, `Turn`, `polygon::ConvexPolygon`

pub mod rand;
mod types;
mod util;

pub use types::{DegenerateLine, Line, Point, Turn};
pub use util::{convex_hull, cross_product, distance, line_relation, path_length};

#[cfg(test)]
mod tests;
