//! Random convex rings in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for convex vertex rings used by
//!   property tests and benchmarks of the routing code.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, take the convex hull, then optionally flip to clockwise and
//!   rotate the starting vertex.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! References
//! - Code cross-refs: `convex_hull`, `polygon::ConvexPolygon`

use super::types::Point;
use super::util::convex_hull;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point,
    /// Emit the ring clockwise instead of counter-clockwise.
    pub clockwise: bool,
    /// Start the ring at a random vertex instead of the hull's lowest-leftmost one.
    pub random_start: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Point::zeros(),
            clockwise: false,
            random_start: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random convex vertex ring via radial jitter + convex hull.
///
/// The hull drops collinear points, so the ring may have fewer vertices than
/// requested; it always has at least three.
pub fn draw_ring_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Vec<Point>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let pts: Vec<Point> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Point::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    let mut ring = convex_hull(&pts)?;
    if cfg.clockwise {
        ring.reverse();
    }
    if cfg.random_start {
        let shift = rng.gen_range(0..ring.len());
        ring.rotate_left(shift);
    }
    Some(ring)
}

/// Two points on the circle of radius `radius_factor × out-radius` around the
/// ring's area centroid. With `radius_factor > 1` both lie outside the ring.
pub fn draw_exterior_pair(
    ring: &[Point],
    radius_factor: f64,
    tok: ReplayToken,
) -> Option<(Point, Point)> {
    let c = area_centroid(ring)?;
    let r_out = ring.iter().map(|p| (p - c).norm()).fold(0.0, f64::max);
    let r = r_out * radius_factor.max(1.0 + 1e-6);
    let mut rng = tok.to_std_rng();
    let mut on_circle = || {
        let th = rng.gen::<f64>() * std::f64::consts::TAU;
        c + Point::new(th.cos() * r, th.sin() * r)
    };
    let a = on_circle();
    let b = on_circle();
    Some((a, b))
}

/// Area centroid of a simple ring (either orientation, non-degenerate).
pub fn area_centroid(verts: &[Point]) -> Option<Point> {
    if verts.len() < 3 {
        return None;
    }
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        let cross = p.x * q.y - q.x * p.y;
        a += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Point::new(cx / (6.0 * a), cy / (6.0 * a)))
}
