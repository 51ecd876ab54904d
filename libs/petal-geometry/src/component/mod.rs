//! # Petal Component
//!
//! Host-facing wrapper around the outline builder.
//!
//! A host (a UI framework binding, a scene loader, the WASM layer) owns a
//! [`PetalComponent`], sets its attributes and asks for its mesh. The
//! component rebuilds the outline and hands it to an injected
//! [`MeshBuilder`] whenever a parameter actually changed since the last
//! build.
//!
//! ## Example
//!
//! ```rust
//! use petal_geometry::{Extruder, PetalComponent};
//!
//! let mut petal = PetalComponent::new(Extruder::default());
//! let first = petal.mesh().unwrap().triangle_count();
//!
//! petal.set_attribute("dx", 0.6).unwrap();
//! assert!(petal.is_dirty());
//! assert_eq!(petal.mesh().unwrap().triangle_count(), first);
//! ```

use log::debug;

use crate::error::PetalError;
use crate::outline::PetalOutline;
use crate::params::PetalParameters;

// =============================================================================
// MESH BUILDER
// =============================================================================

/// Capability that turns an outline into renderable geometry.
///
/// [`crate::Extruder`] is the built-in implementation; hosts can inject
/// their own (for instance one that feeds a renderer's native extruder).
pub trait MeshBuilder {
    /// Geometry produced for an outline.
    type Mesh;
    /// Failure reported by the builder, passed through untouched.
    type Error;

    /// Build geometry for one outline.
    fn build_mesh(&self, outline: &PetalOutline) -> Result<Self::Mesh, Self::Error>;
}

impl<B: MeshBuilder + ?Sized> MeshBuilder for &B {
    type Mesh = B::Mesh;
    type Error = B::Error;

    fn build_mesh(&self, outline: &PetalOutline) -> Result<Self::Mesh, Self::Error> {
        (**self).build_mesh(outline)
    }
}

// =============================================================================
// COMPONENT
// =============================================================================

/// A petal whose mesh follows its parameters.
#[derive(Debug, Clone)]
pub struct PetalComponent<B: MeshBuilder> {
    params: PetalParameters,
    builder: B,
    mesh: Option<B::Mesh>,
}

impl<B: MeshBuilder> PetalComponent<B> {
    /// Component with default parameters and no mesh yet.
    #[must_use]
    pub fn new(builder: B) -> Self {
        Self::with_params(builder, PetalParameters::default())
    }

    /// Component with explicit parameters and no mesh yet.
    #[must_use]
    pub fn with_params(builder: B, params: PetalParameters) -> Self {
        Self {
            params,
            builder,
            mesh: None,
        }
    }

    /// Current parameters.
    #[must_use]
    pub fn params(&self) -> &PetalParameters {
        &self.params
    }

    /// The injected builder.
    #[must_use]
    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// Outline for the current parameters.
    #[must_use]
    pub fn outline(&self) -> PetalOutline {
        self.params.outline()
    }

    /// Whether the next [`mesh`](Self::mesh) call will rebuild.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.mesh.is_none()
    }

    /// Replace all parameters; the mesh is dropped only if they differ.
    pub fn set_params(&mut self, params: PetalParameters) {
        if params != self.params {
            self.params = params;
            self.mesh = None;
        }
    }

    /// Set one parameter by attribute name: `size` (or `length`), `dx`, `dy`.
    ///
    /// # Errors
    /// [`PetalError::UnknownAttribute`] for any other name; the component is
    /// left untouched.
    pub fn set_attribute(&mut self, name: &str, value: f64) -> Result<(), PetalError> {
        let mut params = self.params;
        match name {
            "size" | "length" => params.size = value,
            "dx" => params.dx = value,
            "dy" => params.dy = value,
            _ => return Err(PetalError::UnknownAttribute(name.to_string())),
        }
        self.set_params(params);
        Ok(())
    }

    /// The mesh for the current parameters, building it if needed.
    ///
    /// # Errors
    /// Whatever the builder reports; nothing is cached on failure.
    pub fn mesh(&mut self) -> Result<&B::Mesh, B::Error> {
        let mesh = match self.mesh.take() {
            Some(mesh) => mesh,
            None => {
                debug!(
                    "building petal mesh (size={}, dx={}, dy={})",
                    self.params.size, self.params.dx, self.params.dy
                );
                self.builder.build_mesh(&self.params.outline())?
            }
        };
        Ok(&*self.mesh.insert(mesh))
    }

    /// Drop the cached mesh and build a fresh one.
    ///
    /// # Errors
    /// Whatever the builder reports.
    pub fn rebuild(&mut self) -> Result<&B::Mesh, B::Error> {
        self.mesh = None;
        self.mesh()
    }

    /// Take the cached mesh out, leaving the component dirty.
    pub fn take_mesh(&mut self) -> Option<B::Mesh> {
        self.mesh.take()
    }
}
