//! # Mesh Module
//!
//! Triangle mesh representation for extruded petals.
//!
//! ## Example
//!
//! ```rust
//! use petal_geometry::Mesh;
//!
//! let mut mesh = Mesh::new();
//! let v0 = mesh.add_vertex([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]);
//! let v1 = mesh.add_vertex([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]);
//! let v2 = mesh.add_vertex([0.5, 1.0, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0]);
//! mesh.add_triangle(v0, v1, v2);
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

// =============================================================================
// GROUPS
// =============================================================================

/// A contiguous range of the index buffer drawn with one material.
///
/// `start` and `count` are measured in indices, not triangles, the way
/// WebGL geometry groups are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshGroup {
    /// First index of the range.
    pub start: u32,
    /// Number of indices in the range.
    pub count: u32,
    /// Material slot used for the range.
    pub material_index: u32,
}

// =============================================================================
// MESH STRUCT
// =============================================================================

/// Triangle mesh with vertices, normals, uvs, indices and material groups.
///
/// Flat arrays optimized for WebGL rendering via Three.js.
///
/// ## Memory Layout
///
/// - `vertices`: [x0, y0, z0, x1, y1, z1, ...] - 3 floats per vertex
/// - `normals`: [nx0, ny0, nz0, ...] - 3 floats per vertex
/// - `uvs`: [u0, v0, u1, v1, ...] - 2 floats per vertex
/// - `indices`: [i0, i1, i2, ...] - 3 indices per triangle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions: [x0, y0, z0, x1, y1, z1, ...]
    pub vertices: Vec<f32>,

    /// Vertex normals: [nx0, ny0, nz0, ...]
    pub normals: Vec<f32>,

    /// Texture coordinates: [u0, v0, u1, v1, ...]
    pub uvs: Vec<f32>,

    /// Triangle indices: [i0, i1, i2, ...]
    pub indices: Vec<u32>,

    /// Material ranges over `indices`.
    pub groups: Vec<MeshGroup>,
}

impl Mesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Create a new empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create mesh with pre-allocated capacity.
    ///
    /// ## Parameters
    ///
    /// - `vertex_capacity`: Expected number of vertices
    /// - `triangle_capacity`: Expected number of triangles
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity * 3),
            normals: Vec::with_capacity(vertex_capacity * 3),
            uvs: Vec::with_capacity(vertex_capacity * 2),
            indices: Vec::with_capacity(triangle_capacity * 3),
            groups: Vec::new(),
        }
    }

    // =========================================================================
    // BUILDING
    // =========================================================================

    /// Add a vertex with position, normal and texture coordinate.
    ///
    /// Returns the vertex index for use in triangle definitions.
    pub fn add_vertex(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> u32 {
        let index = self.vertex_count() as u32;
        self.vertices.extend_from_slice(&position);
        self.normals.extend_from_slice(&normal);
        self.uvs.extend_from_slice(&uv);
        index
    }

    /// Add a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Close a material group covering every index added since `start`.
    ///
    /// Empty ranges are not recorded.
    pub fn add_group(&mut self, start: u32, material_index: u32) {
        let end = self.indices.len() as u32;
        if end > start {
            self.groups.push(MeshGroup {
                start,
                count: end - start,
                material_index,
            });
        }
    }

    // =========================================================================
    // QUERY METHODS
    // =========================================================================

    /// Get the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Get the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let mut chunks = self.vertices.chunks_exact(3);
        let first = chunks.next()?;
        let mut min = [first[0], first[1], first[2]];
        let mut max = min;
        for v in chunks {
            for axis in 0..3 {
                min[axis] = min[axis].min(v[axis]);
                max[axis] = max[axis].max(v[axis]);
            }
        }
        Some((min, max))
    }

    // =========================================================================
    // MERGE OPERATIONS
    // =========================================================================

    /// Merge another mesh into this one.
    ///
    /// Indices and group ranges are shifted past the existing data.
    pub fn merge(&mut self, other: &Mesh) {
        let vertex_offset = self.vertex_count() as u32;
        let index_offset = self.indices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices
            .extend(other.indices.iter().map(|&idx| idx + vertex_offset));
        self.groups.extend(other.groups.iter().map(|g| MeshGroup {
            start: g.start + index_offset,
            ..*g
        }));
    }
}

// =============================================================================
// TESTS
// =============================================================================
