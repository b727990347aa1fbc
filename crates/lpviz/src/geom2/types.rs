//! Basic 2D types and tolerances used by the LP geometry.
//!
//! - `GeomCfg`: centralizes epsilons for determinant, feasibility, and point equality.
//! - `Line2`: boundary line `a·x + b·y = c` of a constraint.
//! - `Bounds2`: axis-aligned viewing box, `[0,10]²` by default.
//!
//! Code cross-refs: `solvers::solve_intersection`, `hull::convex_hull_eps`, `clip::clip_halfplane`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeomCfg {
    /// Below this `|det|` two lines count as parallel.
    pub eps_det: f64,
    /// Slack for "satisfies within tolerance" checks on exact vertices.
    pub eps_feas: f64,
    /// Point coincidence / collinearity tolerance used by the hull.
    pub eps_point: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-10,
            eps_feas: 1e-9,
            eps_point: 1e-9,
        }
    }
}

/// Line `a·x + b·y = c`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line2 {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
    /// `a = b = 0`: not a line at all (the equation is `0 = c`).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }
}

/// Axis-aligned box `[x_min, x_max] × [y_min, y_max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::square(0.0, 10.0)
    }
}

impl Bounds2 {
    #[inline]
    pub fn square(lo: f64, hi: f64) -> Self {
        Self {
            x_min: lo,
            x_max: hi,
            y_min: lo,
            y_max: hi,
        }
    }
    #[inline]
    pub fn is_valid(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite())
            && self.x_min <= self.x_max
            && self.y_min <= self.y_max
    }
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        p.x >= self.x_min - eps
            && p.x <= self.x_max + eps
            && p.y >= self.y_min - eps
            && p.y <= self.y_max + eps
    }
    /// Corners in CCW order starting at `(x_min, y_min)`.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            Vector2::new(self.x_min, self.y_min),
            Vector2::new(self.x_max, self.y_min),
            Vector2::new(self.x_max, self.y_max),
            Vector2::new(self.x_min, self.y_max),
        ]
    }
    /// The four edge lines `x = x_min`, `x = x_max`, `y = y_min`, `y = y_max`.
    pub fn edge_lines(&self) -> [Line2; 4] {
        [
            Line2::new(1.0, 0.0, self.x_min),
            Line2::new(1.0, 0.0, self.x_max),
            Line2::new(0.0, 1.0, self.y_min),
            Line2::new(0.0, 1.0, self.y_max),
        ]
    }
}
