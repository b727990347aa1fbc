//! 2×2 linear solves for constraint boundaries.
//!
//! - `solve_intersection`: Cramer's rule with an explicit "parallel" outcome.
//!
//! Code cross-refs: `types::Line2`, `lp::ConstraintSet::pairwise_intersections`
use nalgebra::{matrix, Vector2};

use super::types::Line2;

/// Intersection of `l1` and `l2`, or `None` when `|det| < eps_det`
/// (parallel or coincident boundaries).
///
/// Pre: finite coefficients.
/// Post: the returned point satisfies both equations up to rounding.
pub fn solve_intersection(l1: Line2, l2: Line2, eps_det: f64) -> Option<Vector2<f64>> {
    let det = matrix![l1.a, l1.b; l2.a, l2.b].determinant();
    if !det.is_finite() || det.abs() < eps_det {
        return None;
    }
    let x = (l1.c * l2.b - l2.c * l1.b) / det;
    let y = (l1.a * l2.c - l2.a * l1.c) / det;
    Some(Vector2::new(x, y))
}
