//! # Configuration Constants
//!
//! Centralized constants for the petal pipeline. Outline parameters,
//! extrusion settings and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Petal**: Default outline parameters (size, dx, dy)
//! - **Extrusion**: Default depth and bevel settings
//! - **Sampling**: Curve subdivision

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when deciding whether two edge directions are collinear while
/// computing bevel vectors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-17));
/// ```
pub const EPSILON: f64 = f64::EPSILON;

/// Relative threshold below which two consecutive contour points are
/// considered the same point.
///
/// The threshold is scaled by the largest absolute coordinate of the two
/// points being compared, so it behaves the same for tiny and huge petals.
///
/// # Example
///
/// ```rust
/// use config::constants::POINT_MERGE_THRESHOLD;
///
/// fn same_point(a: [f64; 2], b: [f64; 2]) -> bool {
///     let scale = a[0].abs().max(a[1].abs()).max(b[0].abs()).max(b[1].abs());
///     let limit = POINT_MERGE_THRESHOLD * scale;
///     let (dx, dy) = (a[0] - b[0], a[1] - b[1]);
///     dx * dx + dy * dy <= limit * limit
/// }
///
/// assert!(same_point([1.0, 1.0], [1.0, 1.0 + 1e-12]));
/// assert!(!same_point([1.0, 1.0], [1.0, 1.001]));
/// ```
pub const POINT_MERGE_THRESHOLD: f64 = 1e-10;

/// Maximum squared length of a bevel vector before it gets shrunk.
///
/// Sharp corners produce long miters; anything longer than √2 is scaled
/// back down so the bevel never spikes out of the petal.
pub const MAX_BEVEL_VECTOR_LENGTH_SQ: f64 = 2.0;

// =============================================================================
// PETAL PARAMETER DEFAULTS
// =============================================================================

/// Default distance from the base point to the petal tip.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_PETAL_SIZE;
/// assert!(DEFAULT_PETAL_SIZE > 0.0);
/// ```
pub const DEFAULT_PETAL_SIZE: f64 = 1.0;

/// Default horizontal offset of the two control points.
pub const DEFAULT_PETAL_DX: f64 = 0.4;

/// Default vertical offset of the two control points.
pub const DEFAULT_PETAL_DY: f64 = 0.8;

// =============================================================================
// EXTRUSION DEFAULTS
// =============================================================================

/// Default number of points sampled per quadratic segment.
///
/// Matches the curve resolution WebGL shape extruders use by default.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CURVE_SEGMENTS;
///
/// // Two quadratic segments, shared endpoints removed
/// let contour_points = 2 * DEFAULT_CURVE_SEGMENTS;
/// assert_eq!(contour_points, 24);
/// ```
pub const DEFAULT_CURVE_SEGMENTS: u32 = 12;

/// Default number of body subdivisions along the extrusion axis.
pub const DEFAULT_EXTRUDE_STEPS: u32 = 1;

/// Default extrusion depth.
pub const DEFAULT_EXTRUDE_DEPTH: f64 = 0.005;

/// Whether beveling is enabled by default.
pub const DEFAULT_BEVEL_ENABLED: bool = true;

/// Default bevel thickness along the extrusion axis.
pub const DEFAULT_BEVEL_THICKNESS: f64 = 0.005;

/// Default outward bevel distance in the contour plane.
pub const DEFAULT_BEVEL_SIZE: f64 = 0.01;

/// Default bevel offset applied on top of the bevel size.
pub const DEFAULT_BEVEL_OFFSET: f64 = 0.0;

/// Default number of layers used to round each bevel.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_BEVEL_SEGMENTS, DEFAULT_EXTRUDE_STEPS};
///
/// // Front bevel, body layers, back bevel
/// let layers = DEFAULT_BEVEL_SEGMENTS * 2 + DEFAULT_EXTRUDE_STEPS + 1;
/// assert_eq!(layers, 22);
/// ```
pub const DEFAULT_BEVEL_SEGMENTS: u32 = 10;

// =============================================================================
// MATERIAL GROUPS
// =============================================================================

/// Material index assigned to the front and back caps.
pub const CAP_MATERIAL_INDEX: u32 = 0;

/// Material index assigned to the side walls and bevels.
pub const SIDE_MATERIAL_INDEX: u32 = 1;
