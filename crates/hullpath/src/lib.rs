//! Shortest paths around a convex polygon obstacle.
//!
//! A `ConvexPolygon` is validated once; every path query afterwards is a pure
//! function of the polygon and the two endpoints. Paths may touch the
//! boundary but never cross the interior.
//!
//! API Policy
//! - `api` is the curated import surface for the CLI and experiments; the
//!   module paths underneath may move.

pub mod api;
pub mod geom2;
pub mod polygon;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Line, Point, Turn};
pub use polygon::{ConvexPolygon, PolygonError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_exterior_pair, draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{distance, path_length, Point};
    pub use crate::polygon::{ConvexPolygon, Direction, Endpoint, PolygonError, Route};
    pub use nalgebra::vector;
}
