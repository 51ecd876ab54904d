//! Parametric flower-petal geometry.
//!
//! A petal is a closed outline made of two mirrored quadratic Bézier
//! curves, extruded into a thin solid with rounded (beveled) edges. This
//! crate builds the outline from three scalars, samples it into a polygon,
//! triangulates the caps with lyon and stacks bevel and body layers into a
//! flat-shaded mesh ready for WebGL.
//!
//! ```
//! use petal_geometry::{build_petal_mesh, ExtrudeOptions, PetalParameters};
//!
//! let mesh = build_petal_mesh(&PetalParameters::default(), &ExtrudeOptions::default()).unwrap();
//! assert_eq!(mesh.groups.len(), 2);
//! ```

pub mod batch;
pub mod component;
pub mod contour;
pub mod error;
pub mod extrude;
pub mod mesh;
pub mod outline;
pub mod params;
pub mod triangulate;

pub use batch::{build_merged, build_petals};
pub use component::{MeshBuilder, PetalComponent};
pub use contour::Contour;
pub use error::{PetalError, PetalResult};
pub use extrude::{extrude, ExtrudeOptions, Extruder};
pub use mesh::{Mesh, MeshGroup};
pub use outline::{build_petal_outline, PathCommand, PetalOutline, Point2D};
pub use params::PetalParameters;
pub use triangulate::triangulate;

/// Build the outline for `params` and extrude it with `options`.
///
/// # Errors
/// See [`extrude`].
pub fn build_petal_mesh(params: &PetalParameters, options: &ExtrudeOptions) -> PetalResult<Mesh> {
    Extruder::new(*options).build_mesh(&build_petal_outline(params))
}
