//! Named constraint sets, selected by configuration instead of per-variant code.

use super::constraint::{ConstraintSet, LinearConstraint};

/// Names accepted by `by_name`.
pub const NAMES: &[&str] = &["textbook", "open-quadrant"];

/// `{x+y<=8, 3x+y<=6, 2x+3y>=3, x>=0, y>=0}`; objective `x + 3y`.
///
/// Feasible region: quadrilateral `(1.5,0), (2,0), (0,6), (0,1)`; `x+y<=8` is redundant.
pub fn textbook() -> ConstraintSet {
    ConstraintSet::new(vec![
        LinearConstraint::le(1.0, 1.0, 8.0),
        LinearConstraint::le(3.0, 1.0, 6.0),
        LinearConstraint::ge(2.0, 3.0, 3.0),
        LinearConstraint::ge(1.0, 0.0, 0.0),
        LinearConstraint::ge(0.0, 1.0, 0.0),
    ])
}

/// Objective coefficients `(c1, c2)` paired with `textbook`.
pub const TEXTBOOK_OBJECTIVE: (f64, f64) = (1.0, 3.0);

/// Unbounded region `{x>=0, y>=0, x+y>=2}`; only the viewing box closes it.
pub fn open_quadrant() -> ConstraintSet {
    ConstraintSet::new(vec![
        LinearConstraint::ge(1.0, 0.0, 0.0),
        LinearConstraint::ge(0.0, 1.0, 0.0),
        LinearConstraint::ge(1.0, 1.0, 2.0),
    ])
}

pub fn by_name(name: &str) -> Option<ConstraintSet> {
    match name {
        "textbook" => Some(textbook()),
        "open-quadrant" => Some(open_quadrant()),
        _ => None,
    }
}
