//! Geometry engine for visualizing two-variable linear programs.
//!
//! Layout
//! - `geom2`: points, boundary-line intersection, gift-wrapping hull, clipping.
//! - `lp`: constraints, feasible-region samplers, objective line, presets.
//! - `scene`: one renderer-facing recomputation per objective target.
//!
//! Everything is a synchronous pure function of its inputs, except the
//! one-entry hull cache inside `scene::Scene`.

pub mod error;
pub mod geom2;
pub mod lp;
pub mod scene;

pub use error::{Error, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        convex_hull, convex_hull_eps, solve_intersection, Bounds2, GeomCfg, Line2, Polygon,
    };
    pub use crate::lp::{
        objective_line, Cmp, ConstraintSet, GridSpec, LinearConstraint, ObjectiveSpec,
        RegionSampler, Strategy,
    };
    pub use crate::scene::{Frame, Scene, SceneCfg};
    pub use nalgebra::Vector2 as Vec2;
}
