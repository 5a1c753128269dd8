//! Curated internal API (UNSTABLE).
//!
//! Important
//! - Convenience surface for the CLI, benches and tests. Breaking changes are
//!   allowed; prefer these re-exports over deep module paths.

// Plane primitives
pub use crate::geom2::{
    convex_hull, cross_product, distance, line_relation, path_length, DegenerateLine, Line, Point,
    Turn,
};
// Random rings
pub use crate::geom2::rand::{
    area_centroid, draw_exterior_pair, draw_ring_radial, RadialCfg, ReplayToken as RingReplay,
    VertexCount,
};
// Convex obstacle
pub use crate::polygon::{
    Classification, ConvexPolygon, Detour, DirectCheck, Direction, Endpoint, PolygonError, Route,
};
