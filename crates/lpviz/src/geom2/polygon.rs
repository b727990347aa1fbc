//! Ordered vertex polygon (V-representation) in 2D.
//!
//! Invariants:
//! - Vertices are in counter-clockwise order when produced by `convex_hull`.
//! - Closed implicitly: the last vertex connects back to the first.
//! - Fewer than 3 vertices means "no region to fill"; this is not an error.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::util::cross;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    pub verts: Vec<Vector2<f64>>,
}

impl Polygon {
    #[inline]
    pub fn new(verts: Vec<Vector2<f64>>) -> Self {
        Self { verts }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }
    /// At least three vertices, i.e. something a renderer can fill.
    #[inline]
    pub fn is_fillable(&self) -> bool {
        self.verts.len() >= 3
    }

    /// Directed edges `(v_k, v_{k+1})`, wrapping around. Empty below two vertices.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let m = self.verts.len();
        let count = if m < 2 { 0 } else { m };
        (0..count).map(move |k| (self.verts[k], self.verts[(k + 1) % m]))
    }

    /// Shoelace formula. Positive for CCW order.
    pub fn signed_area(&self) -> f64 {
        let s: f64 = self.edges().map(|(p, q)| p.x * q.y - q.x * p.y).sum();
        0.5 * s
    }

    /// Point on or inside a CCW convex polygon, with slack `eps` on each edge.
    ///
    /// Degenerate polygons (< 3 vertices) contain nothing.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        if !self.is_fillable() {
            return false;
        }
        self.edges().all(|(a, b)| cross(a, b, p) >= -eps)
    }
}

impl From<Vec<Vector2<f64>>> for Polygon {
    fn from(verts: Vec<Vector2<f64>>) -> Self {
        Self { verts }
    }
}
