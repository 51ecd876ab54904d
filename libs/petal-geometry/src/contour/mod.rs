//! # Contour Module
//!
//! Polygonal approximation of a petal outline, ready for extrusion.
//!
//! Each quadratic segment is evaluated at evenly spaced parameters,
//! repeated points are merged and the winding is normalized to clockwise
//! so that side walls built from it face outward.

use config::constants::POINT_MERGE_THRESHOLD;

use crate::outline::{PetalOutline, Point2D};

// =============================================================================
// CONTOUR STRUCT
// =============================================================================

/// Closed polygon sampled from an outline.
///
/// The closing edge from the last point back to the first is implicit.
///
/// ## Example
///
/// ```rust
/// use petal_geometry::PetalParameters;
///
/// let contour = PetalParameters::default().outline().sample(12);
/// assert_eq!(contour.len(), 24);
/// assert!(contour.is_clockwise());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    points: Vec<Point2D>,
}

impl Contour {
    /// Build a contour from raw points, merging repeats and forcing
    /// clockwise winding.
    #[must_use]
    pub fn from_points(points: Vec<Point2D>) -> Self {
        let mut contour = Self {
            points: merge_overlapping_points(points),
        };
        if !contour.is_clockwise() {
            contour.points.reverse();
        }
        contour
    }

    /// The polygon's points in clockwise order.
    #[must_use]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Number of distinct points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the contour has no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the contour can enclose any area (at least a triangle).
    #[must_use]
    pub fn is_polygon(&self) -> bool {
        self.points.len() >= 3
    }

    /// Signed shoelace area, positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let a = self.points[(i + n - 1) % n];
            let b = self.points[i];
            twice_area += a.x * b.y - b.x * a.y;
        }
        twice_area * 0.5
    }

    /// Whether the points run clockwise (negative area).
    ///
    /// A contour with zero area counts as counter-clockwise, matching how
    /// flat petals get reversed during sampling.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }
}

// =============================================================================
// SAMPLING
// =============================================================================

impl PetalOutline {
    /// Sample the outline into a polygon with `curve_segments` subdivisions
    /// per quadratic curve.
    ///
    /// `curve_segments` of zero is treated as one, which degenerates each
    /// curve into its chord.
    #[must_use]
    pub fn sample(&self, curve_segments: u32) -> Contour {
        let divisions = curve_segments.max(1);
        let mut points = Vec::with_capacity(2 * divisions as usize + 2);
        for segment in self.segments() {
            for i in 0..=divisions {
                let p = segment.sample(f64::from(i) / f64::from(divisions));
                points.push(Point2D::new(p.x, p.y));
            }
        }
        Contour::from_points(points)
    }
}

/// Drop each point that coincides with its predecessor, including a
/// closing point equal to the first one.
fn merge_overlapping_points(mut points: Vec<Point2D>) -> Vec<Point2D> {
    if points.len() < 2 {
        return points;
    }
    let threshold_sq = POINT_MERGE_THRESHOLD * POINT_MERGE_THRESHOLD;
    let mut prev = points[0];
    let mut i = 1;
    while i <= points.len() && points.len() > 1 {
        let index = i % points.len();
        let current = points[index];
        let scale = prev.abs().max_element().max(current.abs().max_element());
        if current.distance_squared(prev) <= threshold_sq * scale * scale {
            // Keep the first point; a closing repeat is dropped from the end.
            let duplicate = if index == 0 { points.len() - 1 } else { index };
            points.remove(duplicate);
            continue;
        }
        prev = current;
        i += 1;
    }
    points
}
