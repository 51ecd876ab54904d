//! World-space texture coordinates for extruded geometry.

use glam::{DVec2, DVec3};

/// UVs for a cap triangle: the xy position itself.
pub fn cap_uvs(corners: [DVec3; 3]) -> [DVec2; 3] {
    corners.map(|p| p.truncate())
}

/// UVs for a side-wall quad `a b c d`.
///
/// The wall is unrolled along whichever of x or y its bottom edge covers
/// more of; v runs down the extrusion axis as `1 - z`.
pub fn side_wall_uvs(quad: [DVec3; 4]) -> [DVec2; 4] {
    let [a, b, _, _] = quad;
    if (a.y - b.y).abs() < (a.x - b.x).abs() {
        quad.map(|p| DVec2::new(p.x, 1.0 - p.z))
    } else {
        quad.map(|p| DVec2::new(p.y, 1.0 - p.z))
    }
}
