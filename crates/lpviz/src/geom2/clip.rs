//! Sutherland–Hodgman clipping of a convex polygon by half-planes.
//!
//! Used by the exact `ClipSampler`: start from the viewing box and cut it by
//! each constraint in turn. Each cut keeps `{p : n·p <= c}` (within `eps`).

use nalgebra::Vector2;

use super::polygon::Polygon;

/// Clip `poly` by the closed half-plane `n·p <= c`.
///
/// Vertex order is preserved. An empty result means the half-plane misses
/// the polygon entirely.
pub fn clip_halfplane(poly: &Polygon, n: Vector2<f64>, c: f64, eps: f64) -> Polygon {
    let m = poly.verts.len();
    if m == 0 {
        return Polygon::default();
    }
    let side = |p: Vector2<f64>| n.dot(&p) - c;
    let mut out = Vec::with_capacity(m + 1);
    for k in 0..m {
        let s = poly.verts[k];
        let e = poly.verts[(k + 1) % m];
        let ds = side(s);
        let de = side(e);
        let s_in = ds <= eps;
        let e_in = de <= eps;
        if s_in {
            out.push(s);
        }
        if s_in != e_in {
            // strictly one endpoint outside, so ds != de
            let t = ds / (ds - de);
            out.push(s + (e - s) * t);
        }
    }
    dedup_cyclic(&mut out, eps);
    Polygon::new(out)
}

/// Drop consecutive (and wrap-around) duplicates produced when a cut passes
/// through a vertex.
fn dedup_cyclic(pts: &mut Vec<Vector2<f64>>, eps: f64) {
    let tol = eps.max(0.0);
    pts.dedup_by(|a, b| (*a - *b).norm() <= tol);
    while pts.len() >= 2 {
        let first = pts[0];
        let last = pts[pts.len() - 1];
        if (first - last).norm() <= tol {
            pts.pop();
        } else {
            break;
        }
    }
}
