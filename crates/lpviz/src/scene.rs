//! One full recomputation for a rendering collaborator.
//!
//! A `Frame` bundles everything a renderer needs for a given objective target:
//! the feasible hull, the objective polyline, labelled constraint boundaries and
//! exact boundary intersections. The hull depends only on the constraint side of
//! the configuration, so `Scene` keeps it in a one-entry cache and a change of
//! target alone never resamples.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom2::{convex_hull_eps, GeomCfg, Polygon};
use crate::lp::{
    boundary_polyline, objective_line, presets, ConstraintSet, GridSpec, ObjectiveSpec, Strategy,
    TargetRange,
};

/// Scene configuration. Missing fields fall back to the textbook problem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneCfg {
    pub constraints: ConstraintSet,
    /// Objective coefficients; `z` is the initial target.
    pub objective: ObjectiveSpec,
    pub target_range: TargetRange,
    pub grid: GridSpec,
    pub strategy: Strategy,
    pub geom: GeomCfg,
}

impl Default for SceneCfg {
    fn default() -> Self {
        let (c1, c2) = presets::TEXTBOOK_OBJECTIVE;
        Self {
            constraints: presets::textbook(),
            objective: ObjectiveSpec::new(c1, c2, 10.0),
            target_range: TargetRange::default(),
            grid: GridSpec::default(),
            strategy: Strategy::default(),
            geom: GeomCfg::default(),
        }
    }
}

impl SceneCfg {
    pub fn validate(&self) -> Result<()> {
        self.constraints.validate()?;
        self.grid.validate()?;
        let r = self.target_range;
        if !(r.min.is_finite() && r.max.is_finite()) {
            return Err(Error::NonFinite {
                what: "target_range".to_string(),
            });
        }
        if r.min > r.max {
            return Err(Error::InvalidRange {
                min: r.min,
                max: r.max,
            });
        }
        Ok(())
    }
}

/// Labelled constraint boundary polyline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub label: String,
    pub points: Vec<Vector2<f64>>,
}

/// Renderer-facing result of one recomputation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Target after clamping to the configured range.
    pub z: f64,
    pub strategy: Strategy,
    pub hull: Polygon,
    /// `false` when the hull has fewer than 3 vertices (nothing to fill).
    pub fillable: bool,
    pub area: f64,
    /// `None` when the objective line is vertical.
    pub objective: Option<Vec<Vector2<f64>>>,
    pub boundaries: Vec<Boundary>,
    /// Boundary intersections that satisfy every constraint (within `eps_feas`).
    pub vertices: Vec<Vector2<f64>>,
}

#[derive(Clone, Debug, PartialEq)]
struct HullKey {
    constraints: ConstraintSet,
    strategy: Strategy,
    grid: GridSpec,
    geom: GeomCfg,
}

impl HullKey {
    fn of(cfg: &SceneCfg) -> Self {
        Self {
            constraints: cfg.constraints.clone(),
            strategy: cfg.strategy,
            grid: cfg.grid,
            geom: cfg.geom,
        }
    }
}

/// One-entry hull cache keyed by the constraint side of a `SceneCfg`.
#[derive(Clone, Debug, Default)]
pub struct HullCache {
    entry: Option<(HullKey, Polygon)>,
    misses: u64,
}

impl HullCache {
    /// Cached hull if the key matches, else sample + hull and remember it.
    pub fn get_or_compute(&mut self, cfg: &SceneCfg) -> Result<Polygon> {
        let key = HullKey::of(cfg);
        if let Some((k, hull)) = &self.entry {
            if *k == key {
                return Ok(hull.clone());
            }
        }
        let hull = compute_hull(cfg)?;
        self.misses += 1;
        self.entry = Some((key, hull.clone()));
        Ok(hull)
    }
    /// Number of recomputations so far.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// Sample with the configured strategy and wrap the result.
pub fn compute_hull(cfg: &SceneCfg) -> Result<Polygon> {
    let sampler = cfg.strategy.sampler(cfg.grid, cfg.geom)?;
    let points = sampler.sample(&cfg.constraints);
    tracing::debug!(
        strategy = ?cfg.strategy,
        points = points.len(),
        "sampled feasible region"
    );
    Ok(convex_hull_eps(&points, cfg.geom.eps_point))
}

/// Stateful scene: configuration plus hull cache.
#[derive(Clone, Debug)]
pub struct Scene {
    cfg: SceneCfg,
    cache: HullCache,
}

impl Scene {
    pub fn new(cfg: SceneCfg) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            cache: HullCache::default(),
        })
    }

    /// Stateless one-shot: fresh scene, one frame.
    pub fn compute(cfg: &SceneCfg, z: f64) -> Result<Frame> {
        Scene::new(cfg.clone())?.frame(z)
    }

    #[inline]
    pub fn cache(&self) -> &HullCache {
        &self.cache
    }

    /// Replace the constraints; the next frame recomputes the hull.
    pub fn set_constraints(&mut self, constraints: ConstraintSet) -> Result<()> {
        constraints.validate()?;
        self.cfg.constraints = constraints;
        Ok(())
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.cfg.strategy = strategy;
    }

    /// Full frame for target `z` (clamped to the target range).
    pub fn frame(&mut self, z: f64) -> Result<Frame> {
        let z = self.cfg.target_range.clamp(z);
        let hull = self.cache.get_or_compute(&self.cfg)?;
        let objective = match objective_line(&self.cfg.objective.with_target(z), &self.cfg.grid) {
            Ok(pts) => Some(pts),
            Err(Error::VerticalLine { c1 }) => {
                tracing::debug!(c1, "vertical objective line; not drawn");
                None
            }
            Err(e) => return Err(e),
        };
        let boundaries = self
            .cfg
            .constraints
            .iter()
            .map(|k| {
                Ok(Boundary {
                    label: k.to_string(),
                    points: boundary_polyline(k, &self.cfg.grid)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let vertices = self
            .cfg
            .constraints
            .pairwise_intersections(self.cfg.geom.eps_det)
            .into_iter()
            .filter(|p| self.cfg.constraints.contains_eps(*p, self.cfg.geom.eps_feas))
            .collect();
        Ok(Frame {
            z,
            strategy: self.cfg.strategy,
            fillable: hull.is_fillable(),
            area: hull.signed_area(),
            hull,
            objective,
            boundaries,
            vertices,
        })
    }
}
