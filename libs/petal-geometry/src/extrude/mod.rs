//! # Extrusion
//!
//! Turns a sampled petal contour into a thin beveled solid.
//!
//! ## Layers
//!
//! The contour is copied onto a stack of layers along z:
//!
//! ```text
//! z = depth + bevel_thickness   back bevel (bevel_segments layers)
//!     ...
//! z = depth                     body (steps + 1 layers)
//! z = 0
//!     ...
//! z = -bevel_thickness          front bevel (bevel_segments layers)
//! ```
//!
//! Bevel layers follow a quarter circle: they shrink back towards the
//! sampled contour as they approach the outer caps. Consecutive layers
//! are stitched with side walls and the first and last layers are closed
//! with caps.

mod bevel;
mod uv;

pub use bevel::{bevel_vector, bevel_vectors};

use std::f64::consts::FRAC_PI_2;

use config::constants::{
    CAP_MATERIAL_INDEX, DEFAULT_BEVEL_ENABLED, DEFAULT_BEVEL_OFFSET, DEFAULT_BEVEL_SEGMENTS,
    DEFAULT_BEVEL_SIZE, DEFAULT_BEVEL_THICKNESS, DEFAULT_CURVE_SEGMENTS, DEFAULT_EXTRUDE_DEPTH,
    DEFAULT_EXTRUDE_STEPS, SIDE_MATERIAL_INDEX,
};
use glam::{DVec2, DVec3};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::component::MeshBuilder;
use crate::contour::Contour;
use crate::error::{PetalError, PetalResult};
use crate::mesh::Mesh;
use crate::outline::PetalOutline;
use crate::triangulate::triangulate;

// =============================================================================
// OPTIONS
// =============================================================================

/// Extrusion configuration.
///
/// The defaults give the thin, rounded petal used in the flower scenes:
/// depth 0.005, one step, a 10-segment bevel 0.005 thick and 0.01 wide.
///
/// ## Example
///
/// ```rust
/// use petal_geometry::ExtrudeOptions;
///
/// let options = ExtrudeOptions::default();
/// assert_eq!(options.bevel_segments, 10);
/// assert_eq!(options.layer_count(), 22);
///
/// let flat = ExtrudeOptions { bevel_enabled: false, ..options };
/// assert_eq!(flat.layer_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrudeOptions {
    /// Samples per quadratic curve when flattening the outline.
    pub curve_segments: u32,
    /// Body subdivisions along z.
    pub steps: u32,
    /// Body thickness along z.
    pub depth: f64,
    /// Whether to round the edges.
    pub bevel_enabled: bool,
    /// How far the bevel extends beyond the body along z.
    pub bevel_thickness: f64,
    /// How far the bevel pushes the contour outward.
    pub bevel_size: f64,
    /// Extra outward offset where the bevel starts.
    pub bevel_offset: f64,
    /// Layers per bevel.
    pub bevel_segments: u32,
}

impl Default for ExtrudeOptions {
    fn default() -> Self {
        Self {
            curve_segments: DEFAULT_CURVE_SEGMENTS,
            steps: DEFAULT_EXTRUDE_STEPS,
            depth: DEFAULT_EXTRUDE_DEPTH,
            bevel_enabled: DEFAULT_BEVEL_ENABLED,
            bevel_thickness: DEFAULT_BEVEL_THICKNESS,
            bevel_size: DEFAULT_BEVEL_SIZE,
            bevel_offset: DEFAULT_BEVEL_OFFSET,
            bevel_segments: DEFAULT_BEVEL_SEGMENTS,
        }
    }
}

impl ExtrudeOptions {
    /// Reject configurations that cannot describe a solid.
    ///
    /// # Errors
    /// [`PetalError::InvalidOptions`] naming the offending field.
    pub fn validate(&self) -> PetalResult<()> {
        if self.curve_segments == 0 {
            return Err(invalid("curve_segments must be at least 1"));
        }
        if self.steps == 0 {
            return Err(invalid("steps must be at least 1"));
        }
        if !self.depth.is_finite() || self.depth < 0.0 {
            return Err(invalid("depth must be a finite, non-negative number"));
        }
        if self.bevel_enabled {
            if self.bevel_segments == 0 {
                return Err(invalid("bevel_segments must be at least 1 when beveling"));
            }
            let finite = [self.bevel_thickness, self.bevel_size, self.bevel_offset]
                .iter()
                .all(|v| v.is_finite());
            if !finite {
                return Err(invalid("bevel thickness, size and offset must be finite"));
            }
        }
        Ok(())
    }

    /// Number of contour copies stacked along z.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.effective_bevel_segments() as usize * 2 + self.steps as usize + 1
    }

    fn effective_bevel_segments(&self) -> u32 {
        if self.bevel_enabled {
            self.bevel_segments
        } else {
            0
        }
    }
}

fn invalid(message: &str) -> PetalError {
    PetalError::InvalidOptions(message.to_string())
}

// =============================================================================
// EXTRUDER
// =============================================================================

/// Mesh builder that samples an outline and extrudes it.
///
/// ## Example
///
/// ```rust
/// use petal_geometry::{Extruder, MeshBuilder, PetalParameters};
///
/// let extruder = Extruder::default();
/// let mesh = extruder.build_mesh(&PetalParameters::default().outline()).unwrap();
/// assert_eq!(mesh.triangle_count(), 2 * 22 + 24 * 21 * 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extruder {
    options: ExtrudeOptions,
}

impl Extruder {
    /// Create an extruder with explicit options.
    #[must_use]
    pub fn new(options: ExtrudeOptions) -> Self {
        Self { options }
    }

    /// Options applied to every outline.
    #[must_use]
    pub fn options(&self) -> &ExtrudeOptions {
        &self.options
    }
}

impl MeshBuilder for Extruder {
    type Mesh = Mesh;
    type Error = PetalError;

    fn build_mesh(&self, outline: &PetalOutline) -> PetalResult<Mesh> {
        let contour = outline.sample(self.options.curve_segments);
        extrude(&contour, &self.options)
    }
}

// =============================================================================
// EXTRUDE
// =============================================================================

/// Extrude a contour into a flat-shaded mesh.
///
/// Contours that enclose no area give an empty mesh.
///
/// # Errors
/// [`PetalError::InvalidOptions`] for rejected options and
/// [`PetalError::Tessellation`] when the caps cannot be triangulated.
pub fn extrude(contour: &Contour, options: &ExtrudeOptions) -> PetalResult<Mesh> {
    options.validate()?;

    if !contour.is_polygon() {
        warn!(
            "petal contour has {} point(s), nothing to extrude",
            contour.len()
        );
        return Ok(Mesh::new());
    }

    let faces = triangulate(contour)?;
    let layers = build_layers(contour, options);
    let len = contour.len();

    let triangle_count = faces.len() * 2 + len * (layers.len() - 1) * 2;
    let mut mesh = Mesh::with_capacity(triangle_count * 3, triangle_count);

    // Caps: the first layer faces -z, the last +z.
    if let (Some(bottom), Some(top)) = (layers.first(), layers.last()) {
        for &[a, b, c] in &faces {
            add_cap_triangle(&mut mesh, [bottom[c as usize], bottom[b as usize], bottom[a as usize]]);
        }
        for &[a, b, c] in &faces {
            add_cap_triangle(&mut mesh, [top[a as usize], top[b as usize], top[c as usize]]);
        }
    }
    mesh.add_group(0, CAP_MATERIAL_INDEX);

    let walls_start = mesh.indices.len() as u32;
    for j in (0..len).rev() {
        let k = if j == 0 { len - 1 } else { j - 1 };
        for pair in layers.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            add_side_quad(&mut mesh, [lower[j], lower[k], upper[k], upper[j]]);
        }
    }
    mesh.add_group(walls_start, SIDE_MATERIAL_INDEX);

    debug!(
        "extruded petal: {} contour points, {} cap triangles, {} layers, {} triangles",
        len,
        faces.len(),
        layers.len(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

/// Positions of every contour point on every layer, front to back.
fn build_layers(contour: &Contour, options: &ExtrudeOptions) -> Vec<Vec<DVec3>> {
    let points = contour.points();
    let segments = options.effective_bevel_segments();
    let (thickness, size, offset) = if options.bevel_enabled {
        (options.bevel_thickness, options.bevel_size, options.bevel_offset)
    } else {
        (0.0, 0.0, 0.0)
    };
    let movements = if options.bevel_enabled {
        bevel_vectors(points)
    } else {
        vec![DVec2::ZERO; points.len()]
    };

    let layer = |distance: f64, z: f64| -> Vec<DVec3> {
        points
            .iter()
            .zip(&movements)
            .map(|(p, m)| (*p + *m * distance).extend(z))
            .collect()
    };
    let bevel_step = |b: u32| -> (f64, f64) {
        let angle = f64::from(b) / f64::from(segments) * FRAC_PI_2;
        (thickness * angle.cos(), size * angle.sin() + offset)
    };

    let mut layers = Vec::with_capacity(options.layer_count());

    for b in 0..segments {
        let (z, distance) = bevel_step(b);
        layers.push(layer(distance, -z));
    }

    let body = size + offset;
    for s in 0..=options.steps {
        let z = options.depth / f64::from(options.steps) * f64::from(s);
        layers.push(layer(body, z));
    }

    for b in (0..segments).rev() {
        let (z, distance) = bevel_step(b);
        layers.push(layer(distance, options.depth + z));
    }

    layers
}

fn add_cap_triangle(mesh: &mut Mesh, corners: [DVec3; 3]) {
    let normal = face_normal(corners[0], corners[1], corners[2]);
    let uvs = uv::cap_uvs(corners);
    let first = push_vertex(mesh, corners[0], normal, uvs[0]);
    let second = push_vertex(mesh, corners[1], normal, uvs[1]);
    let third = push_vertex(mesh, corners[2], normal, uvs[2]);
    mesh.add_triangle(first, second, third);
}

/// Quad `a b c d` as triangles `a b d` and `b c d`.
fn add_side_quad(mesh: &mut Mesh, quad: [DVec3; 4]) {
    let uvs = uv::side_wall_uvs(quad);
    for [i, j, k] in [[0, 1, 3], [1, 2, 3]] {
        let normal = face_normal(quad[i], quad[j], quad[k]);
        let first = push_vertex(mesh, quad[i], normal, uvs[i]);
        let second = push_vertex(mesh, quad[j], normal, uvs[j]);
        let third = push_vertex(mesh, quad[k], normal, uvs[k]);
        mesh.add_triangle(first, second, third);
    }
}

fn push_vertex(mesh: &mut Mesh, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
    mesh.add_vertex(
        position.as_vec3().to_array(),
        normal.as_vec3().to_array(),
        uv.as_vec2().to_array(),
    )
}

/// Counter-clockwise face normal; degenerate triangles get a zero normal.
fn face_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

#[cfg(test)]
mod tests;
