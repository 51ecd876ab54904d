//! Native tests for the WASM surface. Only the `_internal` helpers are used
//! so no JavaScript host is needed.

use super::*;

/// Default petal matches the geometry crate's counts.
#[test]
fn test_create_default_petal() {
    let mesh = create_petal_internal(1.0, 0.4, 0.8).unwrap();
    assert_eq!(mesh.triangle_count(), 1052);
    assert_eq!(mesh.vertex_count(), 3156);
    assert_eq!(mesh.vertex_data().len(), 3156 * 3);
    assert_eq!(mesh.normal_data().len(), 3156 * 3);
    assert_eq!(mesh.uv_data().len(), 3156 * 2);
    assert_eq!(mesh.index_data().len(), 3156);
    assert!(!mesh.is_empty());
}

/// Groups flatten to `[start, count, material]` triples.
#[test]
fn test_groups_are_flattened() {
    let mesh = create_petal_internal(1.0, 0.4, 0.8).unwrap();
    assert_eq!(mesh.group_data(), &[0, 132, 0, 132, 3024, 1]);
}

/// A collapsed outline yields an empty handle, not an error.
#[test]
fn test_degenerate_petal_is_empty() {
    let mesh = create_petal_internal(0.0, 0.0, 0.0).unwrap();
    assert!(mesh.is_empty());
    assert!(mesh.group_data().is_empty());
}

/// JSON requests accept the `length` alias and partial extrude blocks.
#[test]
fn test_create_from_json() {
    let aliased = create_petal_from_json_internal(r#"{"length": 1.0}"#).unwrap();
    let direct = create_petal_internal(1.0, 0.4, 0.8).unwrap();
    assert_eq!(aliased, direct);

    let flat =
        create_petal_from_json_internal(r#"{"extrude": {"bevel_enabled": false}}"#).unwrap();
    // 22 triangles per cap, 24 edges * 2 triangles for the single wall band
    assert_eq!(flat.triangle_count(), 22 * 2 + 24 * 2);
}

/// Malformed JSON maps to a JSON error.
#[test]
fn test_malformed_json() {
    let err = create_petal_from_json_internal("{size: 1").unwrap_err();
    assert!(matches!(err, PetalError::Json(_)));
}

/// Bad extrusion settings are rejected.
#[test]
fn test_invalid_extrude_options() {
    let err = create_petal_from_json_internal(r#"{"extrude": {"steps": 0}}"#).unwrap_err();
    assert!(matches!(err, PetalError::InvalidOptions(_)));
}

/// The default request serializes and round-trips through the parser.
#[test]
fn test_default_parameters_json() {
    let json = default_parameters_json_internal().unwrap();
    assert_eq!(PetalRequest::from_json(&json).unwrap(), PetalRequest::default());
}

/// Component caches until an attribute changes.
#[test]
fn test_petal_component() {
    let mut petal = Petal::new();
    assert!(petal.dirty());
    let first = petal.mesh_internal().unwrap();
    assert!(!petal.dirty());

    petal.set_attribute_internal("size", 1.0).unwrap();
    assert!(!petal.dirty());

    petal.set_attribute_internal("length", 2.0).unwrap();
    assert!(petal.dirty());
    assert_eq!(petal.size(), 2.0);
    assert_ne!(petal.mesh_internal().unwrap(), first);
}

/// Unknown attribute names are reported.
#[test]
fn test_unknown_attribute() {
    let mut petal = Petal::new();
    let err = petal.set_attribute_internal("width", 1.0).unwrap_err();
    assert!(matches!(err, PetalError::UnknownAttribute(ref name) if name == "width"));
    assert_eq!(petal.dx(), 0.4);
    assert_eq!(petal.dy(), 0.8);
}

/// Components built from JSON keep their extrusion settings.
#[test]
fn test_petal_from_json() {
    let mut petal =
        Petal::from_json_internal(r#"{"dx": 0.5, "extrude": {"bevel_enabled": false}}"#).unwrap();
    assert_eq!(petal.dx(), 0.5);
    assert_eq!(petal.mesh_internal().unwrap().triangle_count(), 92);
}
