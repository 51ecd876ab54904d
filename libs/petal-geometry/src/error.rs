//! # Error Types
//!
//! Error types for petal mesh construction. Building the outline itself
//! never fails; everything here comes from the extrusion stage or from the
//! host-facing component.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when operations fail
//! - Failures from lyon are propagated unmodified
//! - Errors include context for debugging

use lyon_tessellation::TessellationError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while turning a petal outline into a mesh.
///
/// ## Example
///
/// ```rust
/// use petal_geometry::{ExtrudeOptions, Extruder, MeshBuilder, PetalError, PetalParameters};
///
/// let options = ExtrudeOptions { steps: 0, ..ExtrudeOptions::default() };
/// let outline = PetalParameters::default().outline();
///
/// match Extruder::new(options).build_mesh(&outline) {
///     Ok(mesh) => println!("{} triangles", mesh.triangle_count()),
///     Err(PetalError::InvalidOptions(msg)) => eprintln!("rejected: {}", msg),
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum PetalError {
    /// The extrusion configuration was rejected before any geometry was built.
    #[error("Invalid extrude options: {0}")]
    InvalidOptions(String),

    /// Cap triangulation failed inside the tessellator.
    #[error("Tessellation failed: {0}")]
    Tessellation(#[from] TessellationError),

    /// A host tried to set an attribute the petal does not have.
    #[error("Unknown petal attribute '{0}'")]
    UnknownAttribute(String),

    /// Parameters handed over as JSON could not be decoded.
    #[error("Malformed petal JSON: {0}")]
    Json(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for petal operations.
///
/// ## Example
///
/// ```rust
/// use petal_geometry::error::PetalResult;
/// use petal_geometry::{build_petal_mesh, Mesh, PetalParameters, ExtrudeOptions};
///
/// fn default_petal() -> PetalResult<Mesh> {
///     build_petal_mesh(&PetalParameters::default(), &ExtrudeOptions::default())
/// }
/// # assert!(default_petal().is_ok());
/// ```
pub type PetalResult<T> = Result<T, PetalError>;

// =============================================================================
// TESTS
// =============================================================================
