//! Bevel offset vectors for contour points.

use config::constants::{EPSILON, MAX_BEVEL_VECTOR_LENGTH_SQ};
use glam::DVec2;

/// Outward offset direction for every point of a closed contour.
///
/// Multiplying a vector by the bevel distance and adding it to its point
/// moves the contour outward; the result is the miter of the two adjacent
/// edges, shrunk to at most √2 at sharp corners.
pub fn bevel_vectors(points: &[DVec2]) -> Vec<DVec2> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            bevel_vector(points[i], prev, next)
        })
        .collect()
}

/// Miter vector at `pt` between the edges `prev -> pt` and `pt -> next`.
///
/// Coincident neighbours give a zero vector.
pub fn bevel_vector(pt: DVec2, prev: DVec2, next: DVec2) -> DVec2 {
    let v_prev = pt - prev;
    let v_next = next - pt;
    let v_prev_len_sq = v_prev.length_squared();

    let cross = v_prev.perp_dot(v_next);

    let (trans, shrink_by) = if cross.abs() > EPSILON {
        // Shift both edges one unit to their left and intersect them.
        let prev_shift = prev + v_prev.perp() / v_prev.length();
        let next_shift = next + v_next.perp() / v_next.length();
        let sf = (next_shift - prev_shift).perp_dot(v_next) / cross;
        let trans = prev_shift + v_prev * sf - pt;

        let trans_len_sq = trans.length_squared();
        if trans_len_sq <= MAX_BEVEL_VECTOR_LENGTH_SQ {
            return trans;
        }
        (trans, (trans_len_sq / MAX_BEVEL_VECTOR_LENGTH_SQ).sqrt())
    } else if same_direction(v_prev, v_next) {
        // Straight run: move perpendicular to the edge.
        (v_prev.perp(), v_prev_len_sq.sqrt())
    } else {
        // The contour folds back on itself: push along the incoming edge.
        (v_prev, (v_prev_len_sq / MAX_BEVEL_VECTOR_LENGTH_SQ).sqrt())
    };

    if shrink_by > 0.0 && shrink_by.is_finite() {
        trans / shrink_by
    } else {
        DVec2::ZERO
    }
}

fn same_direction(v_prev: DVec2, v_next: DVec2) -> bool {
    if v_prev.x > EPSILON {
        v_next.x > EPSILON
    } else if v_prev.x < -EPSILON {
        v_next.x < -EPSILON
    } else {
        sign(v_prev.y) == sign(v_next.y)
    }
}

fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_corner_miter() {
        // Counter-clockwise travel around the unit square, so the left-hand
        // miter points into it along the diagonal.
        let v = bevel_vector(
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
        );
        assert_relative_eq!(v.x, -1.0);
        assert_relative_eq!(v.y, -1.0);
    }

    #[test]
    fn test_straight_run_is_perpendicular() {
        let v = bevel_vector(
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
        );
        assert_relative_eq!(v.x, 0.0);
        assert_relative_eq!(v.y, 1.0);
    }

    #[test]
    fn test_fold_back_uses_incoming_edge() {
        let v = bevel_vector(
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 0.0),
        );
        assert_relative_eq!(v.y, 0.0);
        assert_relative_eq!(v.x, std::f64::consts::SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_neighbours_are_zero() {
        let p = DVec2::new(0.5, 0.5);
        assert_eq!(bevel_vector(p, p, p), DVec2::ZERO);
    }

    #[test]
    fn test_sharp_corner_is_clamped() {
        let v = bevel_vector(
            DVec2::new(0.0, 10.0),
            DVec2::new(0.1, 0.0),
            DVec2::new(-0.1, 0.0),
        );
        assert!(v.length_squared() <= MAX_BEVEL_VECTOR_LENGTH_SQ + 1e-12);
    }

    #[test]
    fn test_one_vector_per_point() {
        let square = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
        ];
        assert_eq!(bevel_vectors(&square).len(), 4);
    }
}
