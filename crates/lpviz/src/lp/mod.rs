//! Two-variable linear programs: constraints, feasible-region samplers,
//! objective line.
//!
//! Data flow
//! - `ConstraintSet` → (`pairwise_intersections` | `RegionSampler::sample`)
//!   → `geom2::convex_hull` → `Polygon` for the renderer.
//! - `objective_line` is independent of the region.
//!
//! Code cross-refs: `geom2::{solve_intersection, convex_hull, clip_halfplane}`, `scene::Scene`

mod constraint;
mod objective;
pub mod presets;
mod sampler;

pub use constraint::{Cmp, ConstraintSet, LinearConstraint};
pub use objective::{boundary_polyline, objective_line, ObjectiveSpec, TargetRange};
pub use sampler::{ClipSampler, GridSampler, GridSpec, RegionSampler, Strategy, VertexSampler};
