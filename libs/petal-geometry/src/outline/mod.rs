//! # Outline Module
//!
//! The closed 2D petal outline: a move to the base point followed by two
//! mirrored quadratic Bézier curves.
//!
//! ## Shape
//!
//! ```text
//!              tip (0, size)
//!               /\
//!  (-dx, dy) ·  |  · (dx, dy)      control points
//!              \/
//!            base (0, 0)
//! ```
//!
//! The outline is a pure function of [`PetalParameters`]; it is never
//! mutated, only rebuilt.

use glam::DVec2;
use lyon_geom::QuadraticBezierSegment;
use lyon_tessellation::math::point;
use lyon_tessellation::path::Path;

use crate::params::PetalParameters;

/// 2D point used by outlines and contours.
pub type Point2D = DVec2;

// =============================================================================
// PATH COMMANDS
// =============================================================================

/// A single drawing command of a petal outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start the contour at a point.
    MoveTo(Point2D),
    /// Quadratic Bézier from the current point to `to`.
    QuadraticTo {
        /// Control point of the curve.
        ctrl: Point2D,
        /// End point of the curve.
        to: Point2D,
    },
}

impl PathCommand {
    /// The point the pen rests on after this command.
    #[must_use]
    pub fn end_point(&self) -> Point2D {
        match *self {
            PathCommand::MoveTo(p) => p,
            PathCommand::QuadraticTo { to, .. } => to,
        }
    }
}

// =============================================================================
// OUTLINE
// =============================================================================

/// Closed petal contour made of exactly two quadratic segments.
///
/// ## Example
///
/// ```rust
/// use petal_geometry::{build_petal_outline, PetalParameters, Point2D};
///
/// let outline = build_petal_outline(&PetalParameters::default());
/// assert!(outline.is_closed());
/// assert_eq!(outline.tip(), Point2D::new(0.0, 1.0));
/// assert_eq!(
///     outline.control_points(),
///     (Point2D::new(0.4, 0.8), Point2D::new(-0.4, 0.8))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalOutline {
    base: Point2D,
    tip: Point2D,
    ctrl: Point2D,
}

/// Build the closed petal outline for a parameter set.
///
/// Total over all real inputs: `size = 0` collapses the tip onto the base
/// and zero or negative offsets flatten or flip the lobe, but the result
/// is always the same three-command closed path.
///
/// ## Example
///
/// ```rust
/// use petal_geometry::{build_petal_outline, PathCommand, PetalParameters, Point2D};
///
/// let outline = build_petal_outline(&PetalParameters::new(0.0, 0.4, 0.8));
/// let commands = outline.commands();
/// assert_eq!(commands.len(), 3);
/// assert_eq!(commands[0], PathCommand::MoveTo(Point2D::ZERO));
/// assert_eq!(outline.tip(), outline.start());
/// ```
#[must_use]
pub fn build_petal_outline(params: &PetalParameters) -> PetalOutline {
    PetalOutline {
        base: Point2D::ZERO,
        tip: Point2D::new(0.0, params.size),
        ctrl: Point2D::new(params.dx, params.dy),
    }
}

impl PetalOutline {
    /// The three drawing commands in order: move, curve to tip, curve back.
    #[must_use]
    pub fn commands(&self) -> [PathCommand; 3] {
        let (right, left) = self.control_points();
        [
            PathCommand::MoveTo(self.base),
            PathCommand::QuadraticTo {
                ctrl: right,
                to: self.tip,
            },
            PathCommand::QuadraticTo {
                ctrl: left,
                to: self.base,
            },
        ]
    }

    /// First point of the contour.
    #[must_use]
    pub fn start(&self) -> Point2D {
        self.base
    }

    /// Last point of the contour.
    #[must_use]
    pub fn end(&self) -> Point2D {
        self.commands()[2].end_point()
    }

    /// Tip of the petal, `(0, size)`.
    #[must_use]
    pub fn tip(&self) -> Point2D {
        self.tip
    }

    /// Control points of the outgoing and returning curves, `(dx, dy)` and
    /// `(-dx, dy)`.
    #[must_use]
    pub fn control_points(&self) -> (Point2D, Point2D) {
        (self.ctrl, Point2D::new(-self.ctrl.x, self.ctrl.y))
    }

    /// Whether the contour ends where it starts. Always true.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.start() == self.end()
    }

    /// The two curves as lyon segments, outgoing first.
    #[must_use]
    pub fn segments(&self) -> [QuadraticBezierSegment<f64>; 2] {
        let (right, left) = self.control_points();
        [
            quadratic(self.base, right, self.tip),
            quadratic(self.tip, left, self.base),
        ]
    }

    /// Convert to a lyon path, e.g. for stroking a 2D preview.
    #[must_use]
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        for command in self.commands() {
            match command {
                PathCommand::MoveTo(p) => {
                    builder.begin(point(p.x as f32, p.y as f32));
                }
                PathCommand::QuadraticTo { ctrl, to } => {
                    builder.quadratic_bezier_to(
                        point(ctrl.x as f32, ctrl.y as f32),
                        point(to.x as f32, to.y as f32),
                    );
                }
            }
        }
        builder.end(true);
        builder.build()
    }
}

fn quadratic(from: Point2D, ctrl: Point2D, to: Point2D) -> QuadraticBezierSegment<f64> {
    QuadraticBezierSegment {
        from: lyon_geom::point(from.x, from.y),
        ctrl: lyon_geom::point(ctrl.x, ctrl.y),
        to: lyon_geom::point(to.x, to.y),
    }
}
