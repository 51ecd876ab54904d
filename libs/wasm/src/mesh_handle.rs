//! # Mesh Handle
//!
//! WASM-friendly wrapper for petal mesh data that can be transferred to
//! JavaScript.

use petal_geometry::Mesh;
use wasm_bindgen::prelude::*;

/// A handle to mesh data that can be accessed from JavaScript.
///
/// Buffer getters copy into fresh JavaScript typed arrays. Host code reads
/// the buffers in place through the slice accessors.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = create_petal(1.0, 0.4, 0.8);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setAttribute('uv', new THREE.BufferAttribute(mesh.uvs(), 2));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///
/// const groups = mesh.groups();
/// for (let i = 0; i < groups.length; i += 3) {
///   geometry.addGroup(groups[i], groups[i + 1], groups[i + 2]);
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Texture coordinates as [u, v, u, v, ...]
    uvs: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Material groups as [start, count, material, ...]
    groups: Vec<u32>,
    /// Number of vertices
    vertex_count: u32,
    /// Number of triangles
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }

    /// Returns the texture coordinates as a Float32Array.
    ///
    /// Length: vertex_count * 2
    pub fn uvs(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.uvs[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the material groups as a Uint32Array of
    /// `[start, count, materialIndex]` triples.
    pub fn groups(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.groups[..])
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a Mesh.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let groups = mesh
            .groups
            .iter()
            .flat_map(|g| [g.start, g.count, g.material_index])
            .collect();

        Self {
            vertices: mesh.vertices.clone(),
            normals: mesh.normals.clone(),
            uvs: mesh.uvs.clone(),
            indices: mesh.indices.clone(),
            groups,
            vertex_count: u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX),
            triangle_count: u32::try_from(mesh.triangle_count()).unwrap_or(u32::MAX),
        }
    }

    /// Vertex positions, read in place.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertices
    }

    /// Vertex normals, read in place.
    pub fn normal_data(&self) -> &[f32] {
        &self.normals
    }

    /// Texture coordinates, read in place.
    pub fn uv_data(&self) -> &[f32] {
        &self.uvs
    }

    /// Triangle indices, read in place.
    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    /// Flattened `[start, count, material]` group triples, read in place.
    pub fn group_data(&self) -> &[u32] {
        &self.groups
    }
}
