use super::*;
use crate::mesh::MeshGroup;
use crate::params::PetalParameters;
use approx::assert_relative_eq;

fn default_mesh() -> Mesh {
    Extruder::default()
        .build_mesh(&PetalParameters::default().outline())
        .unwrap()
}

fn position(mesh: &Mesh, index: u32) -> DVec3 {
    let i = index as usize * 3;
    DVec3::new(
        f64::from(mesh.vertices[i]),
        f64::from(mesh.vertices[i + 1]),
        f64::from(mesh.vertices[i + 2]),
    )
}

/// Signed volume enclosed by the triangles; positive when they face out.
fn signed_volume(mesh: &Mesh) -> f64 {
    mesh.indices
        .chunks_exact(3)
        .map(|t| {
            let (a, b, c) = (position(mesh, t[0]), position(mesh, t[1]), position(mesh, t[2]));
            a.dot(b.cross(c)) / 6.0
        })
        .sum()
}

#[test]
fn test_default_mesh_counts() {
    let mesh = default_mesh();
    // 22 cap triangles per side, 24 edges * 21 layer gaps * 2 wall triangles
    assert_eq!(mesh.triangle_count(), 44 + 1008);
    assert_eq!(mesh.vertex_count(), mesh.triangle_count() * 3);
    assert_eq!(mesh.uvs.len(), mesh.vertex_count() * 2);
    assert_eq!(mesh.normals.len(), mesh.vertices.len());
}

#[test]
fn test_default_mesh_groups() {
    let mesh = default_mesh();
    assert_eq!(
        mesh.groups,
        vec![
            MeshGroup {
                start: 0,
                count: 132,
                material_index: CAP_MATERIAL_INDEX,
            },
            MeshGroup {
                start: 132,
                count: 3024,
                material_index: SIDE_MATERIAL_INDEX,
            },
        ]
    );
}

#[test]
fn test_indices_in_range() {
    let mesh = default_mesh();
    let count = mesh.vertex_count() as u32;
    assert!(mesh.indices.iter().all(|&i| i < count));
}

#[test]
fn test_normals_are_unit_length() {
    let mesh = default_mesh();
    for n in mesh.normals.chunks_exact(3) {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert_relative_eq!(len, 1.0, epsilon = 1e-4);
    }
}

#[test]
fn test_caps_face_along_z() {
    let mesh = default_mesh();
    let cap_vertices = 132;
    for (i, n) in mesh.normals.chunks_exact(3).take(cap_vertices).enumerate() {
        let expected = if i < cap_vertices / 2 { -1.0 } else { 1.0 };
        assert_relative_eq!(n[2], expected, epsilon = 1e-5);
    }
}

#[test]
fn test_bounds_include_bevel() {
    let mesh = default_mesh();
    let (min, max) = mesh.bounds().unwrap();
    assert_relative_eq!(min[2], -0.005, epsilon = 1e-6);
    assert_relative_eq!(max[2], 0.01, epsilon = 1e-6);
    // Widest point of each lobe is x = dx / 2, plus at most √2 bevel.
    assert!(max[0] > 0.2 && max[0] < 0.2 + 0.01 * 1.5);
    assert!(min[0] < -0.2 && min[0] > -0.2 - 0.01 * 1.5);
}

#[test]
fn test_mesh_is_outward_facing() {
    let mesh = default_mesh();
    let contour = PetalParameters::default().outline().sample(12);
    let body = contour.signed_area().abs() * 0.005;
    assert!(signed_volume(&mesh) > body);
}

#[test]
fn test_flat_extrusion_volume() {
    let options = ExtrudeOptions {
        bevel_enabled: false,
        ..ExtrudeOptions::default()
    };
    let contour = PetalParameters::default().outline().sample(12);
    let mesh = extrude(&contour, &options).unwrap();

    assert_eq!(mesh.triangle_count(), 44 + 24 * 2);
    let (min, max) = mesh.bounds().unwrap();
    assert_eq!(min[2], 0.0);
    assert_relative_eq!(max[2], 0.005, epsilon = 1e-7);

    let expected = contour.signed_area().abs() * options.depth;
    assert_relative_eq!(signed_volume(&mesh), expected, max_relative = 1e-3);
}

#[test]
fn test_steps_add_layers() {
    let options = ExtrudeOptions {
        steps: 4,
        bevel_enabled: false,
        ..ExtrudeOptions::default()
    };
    let mesh = Extruder::new(options)
        .build_mesh(&PetalParameters::default().outline())
        .unwrap();
    assert_eq!(mesh.triangle_count(), 44 + 24 * 4 * 2);
}

#[test]
fn test_curve_segments_change_resolution() {
    let options = ExtrudeOptions {
        curve_segments: 4,
        ..ExtrudeOptions::default()
    };
    let mesh = Extruder::new(options)
        .build_mesh(&PetalParameters::default().outline())
        .unwrap();
    // 8 contour points: 6 cap triangles per side
    assert_eq!(mesh.triangle_count(), 12 + 8 * 21 * 2);
}

#[test]
fn test_extrusion_is_deterministic() {
    assert_eq!(default_mesh(), default_mesh());
}

#[test]
fn test_degenerate_outline_gives_empty_mesh() {
    let mesh = Extruder::default()
        .build_mesh(&PetalParameters::new(0.0, 0.0, 0.0).outline())
        .unwrap();
    assert!(mesh.is_empty());
    assert!(mesh.groups.is_empty());
}

#[test]
fn test_zero_size_still_extrudes() {
    let result = Extruder::default().build_mesh(&PetalParameters::new(0.0, 0.4, 0.8).outline());
    assert!(result.is_ok());
}

#[test]
fn test_rejects_invalid_options() {
    let outline = PetalParameters::default().outline();
    let cases = [
        ExtrudeOptions { steps: 0, ..ExtrudeOptions::default() },
        ExtrudeOptions { curve_segments: 0, ..ExtrudeOptions::default() },
        ExtrudeOptions { bevel_segments: 0, ..ExtrudeOptions::default() },
        ExtrudeOptions { depth: -1.0, ..ExtrudeOptions::default() },
        ExtrudeOptions { depth: f64::INFINITY, ..ExtrudeOptions::default() },
        ExtrudeOptions { bevel_size: f64::NAN, ..ExtrudeOptions::default() },
    ];
    for options in cases {
        let err = Extruder::new(options).build_mesh(&outline).unwrap_err();
        assert!(matches!(err, PetalError::InvalidOptions(_)), "{options:?}");
    }
}

#[test]
fn test_bevel_segments_ignored_without_bevel() {
    let options = ExtrudeOptions {
        bevel_enabled: false,
        bevel_segments: 0,
        ..ExtrudeOptions::default()
    };
    assert!(options.validate().is_ok());
    assert_eq!(options.layer_count(), 2);
}

#[test]
fn test_options_from_partial_json() {
    let options: ExtrudeOptions = serde_json::from_str(r#"{"depth": 0.02, "bevel_enabled": false}"#).unwrap();
    assert_eq!(options.depth, 0.02);
    assert!(!options.bevel_enabled);
    assert_eq!(options.curve_segments, 12);
}
