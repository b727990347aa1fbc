//! Feasible-region point producers.
//!
//! Three interchangeable strategies feed the hull:
//! - `GridSampler`: dense grid filtered by exact membership (approximate;
//!   boundary precision is bounded by the step).
//! - `VertexSampler`: boundary intersections (incl. the viewing box) that are
//!   feasible within tolerance; exact vertices of the clipped region.
//! - `ClipSampler`: Sutherland–Hodgman clip of the viewing box by every
//!   constraint; exact polygon vertices.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::constraint::ConstraintSet;
use crate::error::{Error, Result};
use crate::geom2::{clip_halfplane, solve_intersection, Bounds2, GeomCfg, Line2, Polygon};

/// Upper limit on grid nodes per axis; keeps a typo in `step` from allocating forever.
const MAX_NODES_PER_AXIS: usize = 100_000;

/// Anything that turns a constraint set into a finite candidate point set.
pub trait RegionSampler {
    fn sample(&self, set: &ConstraintSet) -> Vec<Vector2<f64>>;
}

/// Sampling grid: bounds plus step (default `[0,10]²`, `0.1`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub bounds: Bounds2,
    pub step: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            bounds: Bounds2::default(),
            step: 0.1,
        }
    }
}

impl GridSpec {
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason| Error::InvalidGrid {
            step: self.step,
            reason,
        };
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(invalid("step must be finite and positive"));
        }
        if !self.bounds.is_valid() {
            return Err(invalid("bounds must be finite with min <= max"));
        }
        let nx = axis_count(self.bounds.x_min, self.bounds.x_max, self.step);
        let ny = axis_count(self.bounds.y_min, self.bounds.y_max, self.step);
        if nx.is_none() || ny.is_none() {
            return Err(invalid("too many grid nodes"));
        }
        Ok(())
    }

    /// Grid nodes along one axis: `min + i·step`, `i = 0..=n`, never past `max`.
    /// Empty when the axis would exceed the node limit.
    pub fn axis(&self, min: f64, max: f64) -> impl Iterator<Item = f64> {
        let step = self.step;
        let n = axis_count(min, max, step).unwrap_or(0);
        (0..n).map(move |i| (min + (i as f64) * step).min(max))
    }
}

/// Number of nodes on `[min, max]` at spacing `step` (endpoints included).
/// `None` unless the interval quotient is finite, non-negative and within
/// `MAX_NODES_PER_AXIS`; the float is checked before any integer cast.
#[inline]
fn axis_count(min: f64, max: f64, step: f64) -> Option<usize> {
    let n = ((max - min) / step + 1e-9).floor();
    if !n.is_finite() || n < 0.0 || n >= MAX_NODES_PER_AXIS as f64 {
        return None;
    }
    Some(n as usize + 1)
}

/// Dense grid filtered by `ConstraintSet::contains` (exact comparison).
#[derive(Clone, Copy, Debug)]
pub struct GridSampler {
    spec: GridSpec,
}

impl GridSampler {
    pub fn new(spec: GridSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }
}

impl RegionSampler for GridSampler {
    fn sample(&self, set: &ConstraintSet) -> Vec<Vector2<f64>> {
        let b = self.spec.bounds;
        let mut out = Vec::new();
        for x in self.spec.axis(b.x_min, b.x_max) {
            for y in self.spec.axis(b.y_min, b.y_max) {
                let p = Vector2::new(x, y);
                if set.contains(p) {
                    out.push(p);
                }
            }
        }
        out
    }
}

/// Exact vertex enumeration within a viewing box.
#[derive(Clone, Copy, Debug)]
pub struct VertexSampler {
    pub bounds: Bounds2,
    pub cfg: GeomCfg,
}

impl RegionSampler for VertexSampler {
    fn sample(&self, set: &ConstraintSet) -> Vec<Vector2<f64>> {
        let mut lines: Vec<Line2> = set
            .iter()
            .map(|k| k.boundary())
            .filter(|l| !l.is_degenerate())
            .collect();
        lines.extend(self.bounds.edge_lines());
        let mut out = Vec::new();
        for i in 0..lines.len() {
            for j in (i + 1)..lines.len() {
                let Some(p) = solve_intersection(lines[i], lines[j], self.cfg.eps_det) else {
                    continue;
                };
                if self.bounds.contains_eps(p, self.cfg.eps_feas)
                    && set.contains_eps(p, self.cfg.eps_feas)
                {
                    out.push(p);
                }
            }
        }
        out
    }
}

/// Sutherland–Hodgman clip of the viewing box by each constraint.
#[derive(Clone, Copy, Debug)]
pub struct ClipSampler {
    pub bounds: Bounds2,
    pub cfg: GeomCfg,
}

impl ClipSampler {
    /// The clipped region itself (CCW, since the box corners are CCW).
    pub fn clip(&self, set: &ConstraintSet) -> Polygon {
        let mut poly = Polygon::new(self.bounds.corners().to_vec());
        for k in set {
            for (n, c) in k.as_le_halfplanes() {
                poly = clip_halfplane(&poly, n, c, self.cfg.eps_feas);
                if poly.is_empty() {
                    return poly;
                }
            }
        }
        poly
    }
}

impl RegionSampler for ClipSampler {
    fn sample(&self, set: &ConstraintSet) -> Vec<Vector2<f64>> {
        self.clip(set).verts
    }
}

/// Strategy selector, chosen by configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Grid,
    Vertices,
    Clip,
}

impl Strategy {
    /// Build the sampler; grid validation errors surface here.
    pub fn sampler(self, grid: GridSpec, cfg: GeomCfg) -> Result<Box<dyn RegionSampler>> {
        let sampler: Box<dyn RegionSampler> = match self {
            Strategy::Grid => Box::new(GridSampler::new(grid)?),
            Strategy::Vertices => Box::new(VertexSampler {
                bounds: grid.bounds,
                cfg,
            }),
            Strategy::Clip => Box::new(ClipSampler {
                bounds: grid.bounds,
                cfg,
            }),
        };
        Ok(sampler)
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Strategy::Grid),
            "vertices" => Ok(Strategy::Vertices),
            "clip" => Ok(Strategy::Clip),
            other => Err(format!("unknown strategy '{other}' (grid|vertices|clip)")),
        }
    }
}
