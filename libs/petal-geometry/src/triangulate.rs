//! Cap triangulation for sampled contours.
//!
//! The fill tessellator works on the contour as a polygon; every vertex it
//! emits is mapped back to the contour point it came from so that the same
//! triangles can be reused on every extrusion layer.

use config::constants::POINT_MERGE_THRESHOLD;
use lyon_tessellation::math::{point, Point};
use lyon_tessellation::path::{EndpointId, Polygon};
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers, VertexSource,
};

use crate::contour::Contour;
use crate::error::PetalResult;
use crate::outline::Point2D;

/// Triangulate the interior of a contour.
///
/// Returns index triples into `contour.points()`, each wound
/// counter-clockwise. Contours with fewer than three points or with zero
/// area have no interior and produce no triangles.
///
/// # Errors
/// Propagates any [`lyon_tessellation::TessellationError`] unchanged.
///
/// # Examples
/// ```
/// use petal_geometry::{triangulate, PetalParameters};
///
/// let contour = PetalParameters::default().outline().sample(12);
/// let triangles = triangulate(&contour).unwrap();
/// assert_eq!(triangles.len(), contour.len() - 2);
/// ```
pub fn triangulate(contour: &Contour) -> PetalResult<Vec<[u32; 3]>> {
    if !contour.is_polygon() {
        return Ok(Vec::new());
    }
    let extent = extent(contour);
    if contour.signed_area().abs() <= POINT_MERGE_THRESHOLD * extent * extent {
        return Ok(Vec::new());
    }

    let points: Vec<Point> = contour
        .points()
        .iter()
        .map(|p| point(p.x as f32, p.y as f32))
        .collect();

    let mut buffers: VertexBuffers<u32, u32> = VertexBuffers::new();
    let polygon = Polygon {
        points: &points,
        closed: true,
    };
    // Endpoint ids are only tracked through the id-aware entry point.
    let mut tessellator = FillTessellator::new();
    tessellator.tessellate_with_ids(
        polygon.id_iter(),
        &polygon,
        None,
        &FillOptions::tolerance(FillOptions::DEFAULT_TOLERANCE * extent as f32),
        &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
            source_index(&vertex, contour.points())
        }),
    )?;

    let triangles = buffers
        .indices
        .chunks_exact(3)
        .filter_map(|tri| {
            let corners = [
                buffers.vertices[tri[0] as usize],
                buffers.vertices[tri[1] as usize],
                buffers.vertices[tri[2] as usize],
            ];
            counter_clockwise(corners, contour.points())
        })
        .collect();

    Ok(triangles)
}

/// Largest side of the contour's bounding box. Area and tessellator
/// tolerances are taken relative to it.
fn extent(contour: &Contour) -> f64 {
    let (min, max) = contour
        .points()
        .iter()
        .fold((Point2D::MAX, Point2D::MIN), |(min, max), p| {
            (min.min(*p), max.max(*p))
        });
    (max - min).max_element()
}

/// Contour index a tessellator vertex stands for.
fn source_index(vertex: &FillVertex, contour: &[Point2D]) -> u32 {
    for source in vertex.sources() {
        if let VertexSource::Endpoint { id } = source {
            if id != EndpointId::INVALID && id.to_usize() < contour.len() {
                return id.to_usize() as u32;
            }
        }
    }
    // Intersection vertices only appear on self-crossing contours. They and
    // any endpoint without a usable id snap to the closest sampled point.
    let p = vertex.position();
    let p = Point2D::new(f64::from(p.x), f64::from(p.y));
    contour
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.distance_squared(p).total_cmp(&b.distance_squared(p)))
        .map_or(0, |(i, _)| i as u32)
}

/// Reorder a triangle to counter-clockwise, or drop it if two corners map
/// to the same contour point.
fn counter_clockwise(tri: [u32; 3], contour: &[Point2D]) -> Option<[u32; 3]> {
    let [a, b, c] = tri;
    if a == b || b == c || a == c {
        return None;
    }
    let (pa, pb, pc) = (
        contour[a as usize],
        contour[b as usize],
        contour[c as usize],
    );
    if (pb - pa).perp_dot(pc - pa) < 0.0 {
        Some([a, c, b])
    } else {
        Some([a, b, c])
    }
}
