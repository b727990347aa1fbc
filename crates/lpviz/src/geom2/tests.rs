use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Vector2<f64>> {
    raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

#[test]
fn intersection_by_cramer() {
    // x + y = 8, 3x + y = 6 -> (-1, 9)
    let p = solve_intersection(Line2::new(1.0, 1.0, 8.0), Line2::new(3.0, 1.0, 6.0), 1e-10)
        .expect("non-parallel");
    assert!((p - vector![-1.0, 9.0]).norm() < 1e-12);
    // substitution
    assert!((p.x + p.y - 8.0).abs() < 1e-12);
    assert!((3.0 * p.x + p.y - 6.0).abs() < 1e-12);
}

#[test]
fn parallel_and_coincident_lines_have_no_intersection() {
    let a = Line2::new(1.0, 1.0, 8.0);
    assert!(solve_intersection(a, Line2::new(2.0, 2.0, 4.0), 1e-10).is_none());
    assert!(solve_intersection(a, Line2::new(2.0, 2.0, 16.0), 1e-10).is_none());
    // nearly parallel but above tolerance still solves
    assert!(solve_intersection(a, Line2::new(1.0, 1.0 + 1e-6, 8.0), 1e-10).is_some());
}

#[test]
fn hull_of_square_with_interior_and_edge_points() {
    let input = pts(&[
        (1.0, 1.0),
        (0.0, 0.0),
        (2.0, 0.0),
        (0.5, 0.5),
        (2.0, 2.0),
        (1.0, 0.0), // on bottom edge
        (0.0, 2.0),
        (0.0, 1.0), // on left edge
    ]);
    let h = convex_hull(&input);
    assert_eq!(h.verts, pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]));
    assert!(h.signed_area() > 0.0);
    assert!((h.signed_area() - 4.0).abs() < 1e-12);
}

#[test]
fn hull_start_breaks_x_ties_by_min_y() {
    let input = pts(&[(0.0, 3.0), (0.0, -1.0), (2.0, 1.0)]);
    let h = convex_hull(&input);
    assert_eq!(h.verts[0], vector![0.0, -1.0]);
    assert_eq!(h.len(), 3);
}

#[test]
fn hull_small_inputs_are_returned_unchanged() {
    assert!(convex_hull(&[]).is_empty());
    let one = pts(&[(3.0, 4.0)]);
    assert_eq!(convex_hull(&one).verts, one);
    let two = pts(&[(5.0, 5.0), (1.0, 1.0)]);
    assert_eq!(convex_hull(&two).verts, two);
    assert!(!convex_hull(&two).is_fillable());
}

#[test]
fn hull_collinear_input_degenerates_to_extremes() {
    let input = pts(&[(1.0, 1.0), (3.0, 3.0), (0.0, 0.0), (2.0, 2.0)]);
    let h = convex_hull(&input);
    assert_eq!(h.verts, pts(&[(0.0, 0.0), (3.0, 3.0)]));
    assert!(!h.is_fillable());
}

#[test]
fn hull_of_identical_points_is_single_point() {
    let input = pts(&[(1.0, 2.0), (1.0, 2.0), (1.0, 2.0)]);
    assert_eq!(convex_hull(&input).verts, pts(&[(1.0, 2.0)]));
}

#[test]
fn hull_tolerates_near_duplicates() {
    let input = pts(&[
        (0.0, 0.0),
        (1e-12, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
        (0.0, 1.0 + 1e-12),
    ]);
    let h = convex_hull_eps(&input, 1e-9);
    assert_eq!(h.len(), 3);
    assert_eq!(h.verts, pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0 + 1e-12)]));
    // exact: (1e-12, 0) loses the collinear tie and (0, 1) falls inside
    let exact = convex_hull_eps(&input, 0.0);
    assert_eq!(exact.verts, pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0 + 1e-12)]));
}

#[test]
fn polygon_contains_and_edges() {
    let sq = Polygon::new(pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]));
    assert!(sq.contains_eps(vector![0.5, 0.5], 0.0));
    assert!(sq.contains_eps(vector![1.0, 0.5], 0.0));
    assert!(!sq.contains_eps(vector![1.1, 0.5], 1e-9));
    assert!((sq.signed_area() - 1.0).abs() < 1e-12);
    assert_eq!(sq.edges().count(), 4);
    assert_eq!(Polygon::new(pts(&[(0.0, 0.0)])).edges().count(), 0);
}

#[test]
fn clip_square_by_diagonal() {
    let sq = Polygon::new(pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]));
    // x + y <= 2
    let tri = clip_halfplane(&sq, vector![1.0, 1.0], 2.0, 1e-12);
    assert_eq!(tri.len(), 3);
    assert!((tri.signed_area() - 2.0).abs() < 1e-12);
    // through a vertex only: x + y <= 0 leaves the corner
    let corner = clip_halfplane(&sq, vector![1.0, 1.0], 0.0, 1e-12);
    assert_eq!(corner.verts, pts(&[(0.0, 0.0)]));
    // miss entirely
    assert!(clip_halfplane(&sq, vector![1.0, 0.0], -1.0, 1e-12).is_empty());
}

#[test]
fn bounds_helpers() {
    let b = Bounds2::default();
    assert!(b.is_valid());
    assert_eq!(b.corners()[2], vector![10.0, 10.0]);
    assert!(b.contains_eps(vector![10.0, 0.0], 0.0));
    assert!(!Bounds2::square(1.0, 0.0).is_valid());
    assert!(points_close(vector![1.0, 1.0], vector![1.0 + 1e-12, 1.0], 1e-9));
    assert!(!points_close(vector![1.0, 1.0], vector![1.0 + 1e-12, 1.0], 0.0));
}

/// Small integer lattice keeps cross products exact.
fn lattice_points() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((-20i32..=20, -20i32..=20), 0..40).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Vector2::new(x as f64, y as f64))
            .collect()
    })
}

proptest! {
    #[test]
    fn hull_vertices_come_from_input(p in lattice_points()) {
        let h = convex_hull_eps(&p, 0.0);
        for v in &h.verts {
            prop_assert!(p.contains(v));
        }
    }

    #[test]
    fn hull_contains_every_input_point(p in lattice_points()) {
        let h = convex_hull_eps(&p, 0.0);
        if h.is_fillable() {
            prop_assert!(h.signed_area() > 0.0);
            for q in &p {
                prop_assert!(h.contains_eps(*q, 0.0));
            }
        }
    }

    #[test]
    fn hull_is_idempotent(p in lattice_points()) {
        let h = convex_hull_eps(&p, 0.0);
        let hh = convex_hull_eps(&h.verts, 0.0);
        prop_assert_eq!(hh, h);
    }

    #[test]
    fn hull_has_no_collinear_consecutive_vertices(p in lattice_points()) {
        let h = convex_hull_eps(&p, 0.0);
        if h.is_fillable() {
            let m = h.len();
            for k in 0..m {
                let turn = cross(h.verts[k], h.verts[(k + 1) % m], h.verts[(k + 2) % m]);
                prop_assert!(turn > 0.0);
            }
        }
    }
}
