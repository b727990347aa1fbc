//! Objective line `c1·x + c2·y = z` and constraint boundary polylines.
//!
//! Both are produced by the same sweep: `x` runs over the grid's x-axis nodes,
//! `y = (z − c1·x)/c2`, and only points with `y` inside the grid's y-range are
//! kept. The renderer connects consecutive points.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::constraint::LinearConstraint;
use super::sampler::GridSpec;
use crate::error::{Error, Result};

/// Objective coefficients and target value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveSpec {
    pub c1: f64,
    pub c2: f64,
    pub z: f64,
}

impl ObjectiveSpec {
    #[inline]
    pub fn new(c1: f64, c2: f64, z: f64) -> Self {
        Self { c1, c2, z }
    }
    /// `c1·x + c2·y`.
    #[inline]
    pub fn value_at(&self, p: Vector2<f64>) -> f64 {
        self.c1 * p.x + self.c2 * p.y
    }
    /// Same coefficients, new target.
    #[inline]
    pub fn with_target(&self, z: f64) -> Self {
        Self { z, ..*self }
    }
}

/// Allowed range for the externally supplied target, `[0, 30]` by default.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    pub min: f64,
    pub max: f64,
}

impl Default for TargetRange {
    fn default() -> Self {
        Self { min: 0.0, max: 30.0 }
    }
}

impl TargetRange {
    /// Clamp `z` into the range. NaN maps to `min`.
    #[inline]
    pub fn clamp(&self, z: f64) -> f64 {
        if z.is_nan() {
            return self.min;
        }
        z.max(self.min).min(self.max)
    }
}

/// Objective line over the sweep; `Error::VerticalLine` when `c2 = 0`.
pub fn objective_line(spec: &ObjectiveSpec, sweep: &GridSpec) -> Result<Vec<Vector2<f64>>> {
    if ![spec.c1, spec.c2, spec.z].iter().all(|v| v.is_finite()) {
        return Err(Error::NonFinite {
            what: "objective".to_string(),
        });
    }
    if spec.c2 == 0.0 {
        return Err(Error::VerticalLine { c1: spec.c1 });
    }
    sweep.validate()?;
    Ok(sweep_line(spec.c1, spec.c2, spec.z, sweep))
}

/// Drawable boundary of one constraint.
///
/// Vertical boundaries (`b = 0`) become the segment `x = c/a` across the
/// y-range, or nothing if that x is off the sweep. `a = b = 0` yields nothing.
pub fn boundary_polyline(k: &LinearConstraint, sweep: &GridSpec) -> Result<Vec<Vector2<f64>>> {
    if !k.is_finite() {
        return Err(Error::NonFinite {
            what: format!("constraint {k}"),
        });
    }
    sweep.validate()?;
    let b = sweep.bounds;
    if k.b() == 0.0 {
        if k.a() == 0.0 {
            return Ok(Vec::new());
        }
        let x = k.c() / k.a();
        if x < b.x_min || x > b.x_max {
            return Ok(Vec::new());
        }
        return Ok(vec![Vector2::new(x, b.y_min), Vector2::new(x, b.y_max)]);
    }
    Ok(sweep_line(k.a(), k.b(), k.c(), sweep))
}

/// Pre: `c2 != 0`, sweep validated.
fn sweep_line(c1: f64, c2: f64, z: f64, sweep: &GridSpec) -> Vec<Vector2<f64>> {
    let b = sweep.bounds;
    sweep
        .axis(b.x_min, b.x_max)
        .filter_map(|x| {
            let y = (z - c1 * x) / c2;
            (y >= b.y_min && y <= b.y_max).then(|| Vector2::new(x, y))
        })
        .collect()
}
