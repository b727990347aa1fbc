//! Linear constraints `a·x + b·y ⋚ c` and their conjunction.
//!
//! Constraints are plain tagged data (coefficients, operator, right-hand side)
//! so they can be serialized, printed as labels, and intersected exactly.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom2::{solve_intersection, Line2};

/// Comparison operator of a constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cmp {
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "=")]
    Eq,
}

impl Cmp {
    pub fn symbol(self) -> &'static str {
        match self {
            Cmp::Le => "<=",
            Cmp::Ge => ">=",
            Cmp::Eq => "=",
        }
    }
}

/// `a·x + b·y  op  c`. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    a: f64,
    b: f64,
    op: Cmp,
    c: f64,
}

impl LinearConstraint {
    #[inline]
    pub fn new(a: f64, b: f64, op: Cmp, c: f64) -> Self {
        Self { a, b, op, c }
    }
    #[inline]
    pub fn le(a: f64, b: f64, c: f64) -> Self {
        Self::new(a, b, Cmp::Le, c)
    }
    #[inline]
    pub fn ge(a: f64, b: f64, c: f64) -> Self {
        Self::new(a, b, Cmp::Ge, c)
    }
    #[inline]
    pub fn equal(a: f64, b: f64, c: f64) -> Self {
        Self::new(a, b, Cmp::Eq, c)
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
    #[inline]
    pub fn op(&self) -> Cmp {
        self.op
    }
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Boundary line (the inequality relaxed to equality).
    #[inline]
    pub fn boundary(&self) -> Line2 {
        Line2::new(self.a, self.b, self.c)
    }

    #[inline]
    pub fn lhs(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y
    }

    /// Exact floating comparison against the operator.
    #[inline]
    pub fn satisfies(&self, p: Vector2<f64>) -> bool {
        let lhs = self.lhs(p);
        match self.op {
            Cmp::Le => lhs <= self.c,
            Cmp::Ge => lhs >= self.c,
            Cmp::Eq => lhs == self.c,
        }
    }

    /// Membership with slack `eps` on the right-hand side.
    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let lhs = self.lhs(p);
        match self.op {
            Cmp::Le => lhs <= self.c + eps,
            Cmp::Ge => lhs >= self.c - eps,
            Cmp::Eq => (lhs - self.c).abs() <= eps,
        }
    }

    /// The constraint as one or two `n·p <= c` half-planes (`Eq` gives both sides).
    pub(crate) fn as_le_halfplanes(&self) -> Vec<(Vector2<f64>, f64)> {
        let n = Vector2::new(self.a, self.b);
        match self.op {
            Cmp::Le => vec![(n, self.c)],
            Cmp::Ge => vec![(-n, -self.c)],
            Cmp::Eq => vec![(n, self.c), (-n, -self.c)],
        }
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

impl fmt::Display for LinearConstraint {
    /// Label form, e.g. `2x + 3y >= 3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        for (coef, var) in [(self.a, "x"), (self.b, "y")] {
            if coef == 0.0 {
                continue;
            }
            let mag = coef.abs();
            let sign = if coef < 0.0 { "-" } else { "" };
            if wrote {
                f.write_str(if coef < 0.0 { " - " } else { " + " })?;
            } else {
                f.write_str(sign)?;
            }
            if mag == 1.0 {
                write!(f, "{var}")?;
            } else {
                write!(f, "{mag}{var}")?;
            }
            wrote = true;
        }
        if !wrote {
            f.write_str("0")?;
        }
        write!(f, " {} {}", self.op.symbol(), self.c)
    }
}

/// Ordered conjunction of constraints. Order does not change the feasible
/// region but fixes the pair enumeration order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintSet {
    constraints: Vec<LinearConstraint>,
}

impl ConstraintSet {
    pub fn new(constraints: Vec<LinearConstraint>) -> Self {
        Self { constraints }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LinearConstraint> {
        self.constraints.iter()
    }

    /// Return a new set with one more constraint appended.
    pub fn with(&self, k: LinearConstraint) -> ConstraintSet {
        let mut out = self.clone();
        out.constraints.push(k);
        out
    }

    /// Logical AND over all constraints, exact comparison. Empty set admits everything.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.constraints.iter().all(|k| k.satisfies(p))
    }

    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.constraints.iter().all(|k| k.satisfies_eps(p, eps))
    }

    /// Reject NaN/∞ coefficients up front.
    pub fn validate(&self) -> Result<()> {
        for (i, k) in self.constraints.iter().enumerate() {
            if !k.is_finite() {
                return Err(Error::NonFinite {
                    what: format!("constraint #{i} ({k})"),
                });
            }
        }
        Ok(())
    }

    /// All unordered index pairs `(i, j)`, `i < j`, in lexicographic order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let m = self.constraints.len();
        (0..m).flat_map(move |i| (i + 1..m).map(move |j| (i, j)))
    }

    /// Boundary intersection of every non-parallel pair, in pair order.
    /// Parallel pairs contribute nothing.
    pub fn pairwise_intersections(&self, eps_det: f64) -> Vec<Vector2<f64>> {
        self.pairs()
            .filter_map(|(i, j)| {
                let p = solve_intersection(
                    self.constraints[i].boundary(),
                    self.constraints[j].boundary(),
                    eps_det,
                );
                if p.is_none() {
                    tracing::debug!(i, j, "parallel boundaries; no vertex contributed");
                }
                p
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a LinearConstraint;
    type IntoIter = std::slice::Iter<'a, LinearConstraint>;
    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
