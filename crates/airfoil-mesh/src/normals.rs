//! Smooth per-vertex normals for the lofted profile.
//!
//! The profile is constant along z, so every normal lies in the xy plane and
//! the back cap reuses the front cap's normals. A normal is the tangent
//! `(tx, ty)` turned to `(-ty, tx)`; the lower surface walks its neighbours
//! in reverse so that turn points away from the section.

use airfoil_core::Tolerance;
use airfoil_math::{dvec2, dvec3, DVec2, DVec3};
use tracing::debug;

use crate::RingLayout;

/// Normal used at the leading edge when its two neighbours coincide.
const NOSE_FALLBACK: DVec3 = DVec3::NEG_X;

fn xy(p: DVec3) -> DVec2 {
    dvec2(p.x, p.y)
}

/// Unit normal of `tangent`, or `None` when it is too short to normalize.
fn tangent_normal(tangent: DVec2, tol: Tolerance) -> Option<DVec3> {
    let len = tangent.length();
    if tol.is_zero(len) {
        return None;
    }
    let t = tangent / len;
    Some(dvec3(-t.y, t.x, 0.0))
}

/// Normal at `cur` from the summed edges `prev -> cur` and `cur -> next`.
fn through(prev: DVec3, cur: DVec3, next: DVec3, tol: Tolerance) -> Option<DVec3> {
    let incoming = xy(cur) - xy(prev);
    let outgoing = xy(next) - xy(cur);
    tangent_normal(incoming + outgoing, tol)
}

/// Normal of the single edge `from -> to`.
fn along(from: DVec3, to: DVec3, tol: Tolerance) -> Option<DVec3> {
    tangent_normal(xy(to) - xy(from), tol)
}

/// Compute one unit normal per vertex of a `4n` lofted ring.
///
/// Degenerate tangents never produce NaN: an interior or trailing edge vertex
/// falls back to the normal of the previous station on the same surface, and
/// the leading edge falls back to -X.
pub fn vertex_normals(positions: &[DVec3], layout: RingLayout, tol: Tolerance) -> Vec<DVec3> {
    let n = layout.stations();
    let last = n - 1;
    let top = |i: usize| positions[layout.top_front(i)];
    let bottom = |i: usize| positions[layout.bottom_front(i)];
    let mut normals = vec![DVec3::ZERO; layout.vertex_count()];
    let mut fallbacks = 0usize;

    let mut resolve = |normal: Option<DVec3>, fallback: DVec3| {
        normal.unwrap_or_else(|| {
            fallbacks += 1;
            fallback
        })
    };

    // The nose is shared: walk from the lower surface, through it, onto the upper one.
    let nose = resolve(through(bottom(1), top(0), top(1), tol), NOSE_FALLBACK);
    normals[layout.top_front(0)] = nose;
    normals[layout.bottom_front(0)] = nose;

    for i in 1..last {
        let prev = normals[layout.top_front(i - 1)];
        normals[layout.top_front(i)] = resolve(through(top(i - 1), top(i), top(i + 1), tol), prev);

        let prev = normals[layout.bottom_front(i - 1)];
        normals[layout.bottom_front(i)] =
            resolve(through(bottom(i + 1), bottom(i), bottom(i - 1), tol), prev);
    }

    let prev = normals[layout.top_front(last - 1)];
    normals[layout.top_front(last)] = resolve(along(top(last - 1), top(last), tol), prev);
    let prev = normals[layout.bottom_front(last - 1)];
    normals[layout.bottom_front(last)] = resolve(along(bottom(last), bottom(last - 1), tol), prev);

    let back = layout.back_offset();
    normals.copy_within(0..back, back);

    if fallbacks > 0 {
        debug!(fallbacks, "degenerate tangents replaced by neighbouring normals");
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ring(top: &[(f64, f64)], bottom: &[(f64, f64)]) -> Vec<DVec3> {
        let front = top.iter().chain(bottom).map(|&(x, y)| dvec3(x, y, -1.0));
        let back = top.iter().chain(bottom).map(|&(x, y)| dvec3(x, y, 1.0));
        front.chain(back).collect()
    }

    #[test]
    fn test_diamond_normals() {
        let top = [(0.0, 0.0), (0.5, 0.5), (1.0, 0.0)];
        let bottom = [(0.0, 0.0), (0.5, -0.5), (1.0, 0.0)];
        let layout = RingLayout::new(3);
        let normals = vertex_normals(&ring(&top, &bottom), layout, Tolerance::default());

        assert_eq!(normals[0], dvec3(-1.0, 0.0, 0.0));
        assert_eq!(normals[3], dvec3(-1.0, 0.0, 0.0));
        assert_relative_eq!(normals[1].y, 1.0);
        assert_relative_eq!(normals[4].y, -1.0);

        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(normals[2].x, s);
        assert_relative_eq!(normals[2].y, s);
        assert_relative_eq!(normals[5].x, s);
        assert_relative_eq!(normals[5].y, -s);

        for i in 0..6 {
            assert_eq!(normals[i], normals[i + 6]);
        }
    }

    #[test]
    fn test_flat_plate_nose_falls_back() {
        let flat = [(0.0, 0.0), (0.5, 0.0), (1.0, 0.0)];
        let layout = RingLayout::new(3);
        let normals = vertex_normals(&ring(&flat, &flat), layout, Tolerance::default());

        assert_eq!(normals[0], NOSE_FALLBACK);
        assert_eq!(normals[1], dvec3(-0.0, 1.0, 0.0));
        assert_eq!(normals[4], dvec3(0.0, -1.0, 0.0));
        assert!(normals.iter().all(|n| n.is_finite()));
    }

    #[test]
    fn test_repeated_point_reuses_previous_normal() {
        // Stations 3 and 4 coincide, leaving the trailing edge with an empty edge.
        let top = [(0.0, 0.0), (0.2, 0.1), (0.6, 0.05), (1.0, 0.0), (1.0, 0.0)];
        let bottom = [(0.0, 0.0), (0.2, -0.1), (0.6, -0.05), (1.0, 0.0), (1.0, 0.0)];
        let layout = RingLayout::new(5);
        let normals = vertex_normals(&ring(&top, &bottom), layout, Tolerance::default());

        assert_eq!(normals[layout.top_front(4)], normals[layout.top_front(3)]);
        assert_eq!(normals[layout.bottom_front(4)], normals[layout.bottom_front(3)]);
        assert!(normals.iter().all(|n| n.is_finite()));
        for n in &normals {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        }
    }
}
