use std::cmp::Ordering;

use nalgebra::Vector2;

/// z-component of `(b − a) × (c − a)`. Positive when `a → b → c` turns left.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm()
}

/// Coincidence test; `eps = 0` is exact equality.
#[inline]
pub fn points_close(a: Vector2<f64>, b: Vector2<f64>, eps: f64) -> bool {
    if eps <= 0.0 {
        a == b
    } else {
        (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
    }
}

/// Lexicographic order: x first, then y. NaN compares equal.
#[inline]
pub(crate) fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}
