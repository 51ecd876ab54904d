//! WASM-facing entry points for petal meshes.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `_internal` helpers, which return
//! Rust errors instead of `JsValue`s and so do not need a JS host.
//!
//! ```
//! let mesh = petal_wasm::create_petal_internal(1.0, 0.4, 0.8).unwrap();
//! assert_eq!(mesh.triangle_count(), 1052);
//! ```

use petal_geometry::{
    ExtrudeOptions, Extruder, MeshBuilder, PetalComponent, PetalError, PetalParameters,
    PetalResult,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "petal_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: PetalError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// =============================================================================
// PETAL REQUEST
// =============================================================================

/// Everything a host can send as JSON: petal parameters at the top level
/// plus an optional `extrude` block. Missing fields take their defaults.
///
/// ```
/// use petal_wasm::PetalRequest;
///
/// let request: PetalRequest =
///     serde_json::from_str(r#"{"length": 2.0, "extrude": {"depth": 0.01}}"#).unwrap();
/// assert_eq!(request.params.size, 2.0);
/// assert_eq!(request.params.dx, 0.4);
/// assert_eq!(request.extrude.depth, 0.01);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PetalRequest {
    /// Outline parameters.
    #[serde(flatten)]
    pub params: PetalParameters,
    /// Extrusion settings.
    #[serde(default)]
    pub extrude: ExtrudeOptions,
}

impl PetalRequest {
    /// Decode a request from JSON.
    ///
    /// # Errors
    /// [`PetalError::Json`] when the text is not a valid request.
    pub fn from_json(json: &str) -> PetalResult<Self> {
        serde_json::from_str(json).map_err(|err| PetalError::Json(err.to_string()))
    }
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Returns the default petal request (parameters and extrusion) as JSON.
///
/// # Examples
/// ```
/// let json = petal_wasm::default_parameters_json_internal().unwrap();
/// assert!(json.contains("\"size\":1.0"));
/// ```
#[wasm_bindgen]
pub fn default_parameters_json() -> Result<String, JsValue> {
    default_parameters_json_internal().map_err(to_js)
}

/// Host-only variant of [`default_parameters_json`].
pub fn default_parameters_json_internal() -> PetalResult<String> {
    serde_json::to_string(&PetalRequest::default()).map_err(|err| PetalError::Json(err.to_string()))
}

/// Builds a petal mesh with the default extrusion settings.
///
/// # Errors
/// Returns a JavaScript error containing a human-readable message when
/// the mesh cannot be built.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = create_petal(1.0, 0.4, 0.8);
/// // console.log("Triangles:", mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn create_petal(size: f64, dx: f64, dy: f64) -> Result<MeshHandle, JsValue> {
    create_petal_internal(size, dx, dy).map_err(to_js)
}

/// Host-only variant of [`create_petal`].
pub fn create_petal_internal(size: f64, dx: f64, dy: f64) -> PetalResult<MeshHandle> {
    build(&PetalRequest {
        params: PetalParameters::new(size, dx, dy),
        extrude: ExtrudeOptions::default(),
    })
}

/// Builds a petal mesh from a JSON request such as
/// `{"size": 1.2, "dx": 0.5, "extrude": {"bevel_enabled": false}}`.
///
/// # Errors
/// Returns a JavaScript error for malformed JSON, rejected extrusion
/// settings or tessellation failures.
#[wasm_bindgen]
pub fn create_petal_from_json(json: &str) -> Result<MeshHandle, JsValue> {
    create_petal_from_json_internal(json).map_err(to_js)
}

/// Host-only variant of [`create_petal_from_json`].
pub fn create_petal_from_json_internal(json: &str) -> PetalResult<MeshHandle> {
    build(&PetalRequest::from_json(json)?)
}

fn build(request: &PetalRequest) -> PetalResult<MeshHandle> {
    let mesh = Extruder::new(request.extrude).build_mesh(&request.params.outline())?;
    Ok(MeshHandle::from_mesh(&mesh))
}

// =============================================================================
// PETAL COMPONENT
// =============================================================================

/// A petal component for JavaScript hosts.
///
/// Attributes are set by name; the mesh is rebuilt on the next `mesh()`
/// call only if an attribute changed.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const petal = new Petal();
/// petal.set_attribute("size", 1.5);
/// const mesh = petal.mesh();
/// ```
#[wasm_bindgen]
#[derive(Debug)]
pub struct Petal {
    inner: PetalComponent<Extruder>,
}

impl Default for Petal {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Petal {
    /// Creates a petal with default parameters and extrusion.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Petal {
        Petal {
            inner: PetalComponent::new(Extruder::default()),
        }
    }

    /// Creates a petal from a JSON request.
    ///
    /// # Errors
    /// Returns a JavaScript error for malformed JSON.
    pub fn from_json(json: &str) -> Result<Petal, JsValue> {
        Self::from_json_internal(json).map_err(to_js)
    }

    /// Sets `size` (alias `length`), `dx` or `dy`.
    ///
    /// # Errors
    /// Returns a JavaScript error for unknown attribute names.
    pub fn set_attribute(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        self.inner.set_attribute(name, value).map_err(to_js)
    }

    /// Current tip distance.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> f64 {
        self.inner.params().size
    }

    /// Current horizontal control offset.
    #[wasm_bindgen(getter)]
    pub fn dx(&self) -> f64 {
        self.inner.params().dx
    }

    /// Current vertical control offset.
    #[wasm_bindgen(getter)]
    pub fn dy(&self) -> f64 {
        self.inner.params().dy
    }

    /// Whether the next `mesh()` call rebuilds.
    #[wasm_bindgen(getter)]
    pub fn dirty(&self) -> bool {
        self.inner.is_dirty()
    }

    /// Returns the mesh for the current attributes.
    ///
    /// # Errors
    /// Returns a JavaScript error when the mesh cannot be built.
    pub fn mesh(&mut self) -> Result<MeshHandle, JsValue> {
        self.mesh_internal().map_err(to_js)
    }
}

impl Petal {
    /// Host-only variant of [`Petal::from_json`].
    pub fn from_json_internal(json: &str) -> PetalResult<Petal> {
        let request = PetalRequest::from_json(json)?;
        Ok(Petal {
            inner: PetalComponent::with_params(Extruder::new(request.extrude), request.params),
        })
    }

    /// Host-only variant of [`Petal::set_attribute`].
    pub fn set_attribute_internal(&mut self, name: &str, value: f64) -> PetalResult<()> {
        self.inner.set_attribute(name, value)
    }

    /// Host-only variant of [`Petal::mesh`].
    pub fn mesh_internal(&mut self) -> PetalResult<MeshHandle> {
        self.inner.mesh().map(MeshHandle::from_mesh)
    }
}

#[cfg(test)]
mod tests;
