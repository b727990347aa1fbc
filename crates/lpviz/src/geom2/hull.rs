//! Convex hull by gift wrapping (Jarvis march).
//!
//! Output order is counter-clockwise, starting at the lexicographically
//! smallest input point (min x, ties by min y). Collinear ties pick the
//! farthest candidate, so interior collinear points are never emitted.
//! Cost is O(h·n) for h hull vertices.

use nalgebra::Vector2;

use super::polygon::Polygon;
use super::types::GeomCfg;
use super::util::{cross, distance, lex_cmp, points_close};

/// Hull with the default point tolerance (`GeomCfg::default().eps_point`).
pub fn convex_hull(points: &[Vector2<f64>]) -> Polygon {
    convex_hull_eps(points, GeomCfg::default().eps_point)
}

/// Hull with explicit tolerance for coincidence, collinearity and loop termination.
/// `eps = 0` compares exactly, which suits exactly constructed vertices.
///
/// Two or fewer points are returned unchanged.
pub fn convex_hull_eps(points: &[Vector2<f64>], eps: f64) -> Polygon {
    if points.len() <= 2 {
        return Polygon::new(points.to_vec());
    }
    let Some(start) = points.iter().copied().min_by(lex_cmp) else {
        return Polygon::default();
    };
    let mut hull = Vec::new();
    let mut current = start;
    // Every hull vertex is visited once, so n+1 steps always suffice.
    for _ in 0..=points.len() {
        hull.push(current);
        let Some(next) = wrap_step(points, current, eps) else {
            // all points coincide with `current`
            break;
        };
        if points_close(next, start, eps) {
            break;
        }
        current = next;
    }
    Polygon::new(hull)
}

/// Most clockwise candidate seen from `current`: afterwards no point lies
/// strictly to the right of `current → next`.
fn wrap_step(points: &[Vector2<f64>], current: Vector2<f64>, eps: f64) -> Option<Vector2<f64>> {
    let mut next: Option<Vector2<f64>> = None;
    for &cand in points {
        if points_close(cand, current, eps) {
            continue;
        }
        let Some(best) = next else {
            next = Some(cand);
            continue;
        };
        let turn = cross(current, best, cand);
        if turn < -eps || (turn.abs() <= eps && distance(current, cand) > distance(current, best))
        {
            next = Some(cand);
        }
    }
    next
}
