//! 2D geometry for linear-program visualization.
//!
//! Purpose
//! - Points are `nalgebra::Vector2<f64>`; polygons are CCW vertex lists.
//! - Keep the API small and numerically explicit (eps-aware where it matters).
//!
//! Contents
//! - `solve_intersection`: boundary-line intersection, `None` for parallels.
//! - `convex_hull`: gift wrapping (Jarvis march), CCW from the lex-min point.
//! - `clip_halfplane`: Sutherland–Hodgman step used by exact region clipping.
//! - `rand`: seeded point clouds for benches and property checks.
//!
//! Code cross-refs: `lp::{ConstraintSet, RegionSampler}`, `scene::Scene`

mod clip;
mod hull;
mod polygon;
pub mod rand;
mod solvers;
mod types;
mod util;

pub use clip::clip_halfplane;
pub use hull::{convex_hull, convex_hull_eps};
pub use polygon::Polygon;
pub use solvers::solve_intersection;
pub use types::{Bounds2, GeomCfg, Line2};
pub use util::{cross, distance, points_close};

#[cfg(test)]
mod tests;
