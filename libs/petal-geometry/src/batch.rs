//! Building many petals at once.
//!
//! Flowers are assembled from dozens of petals with slightly different
//! parameters. Every petal is independent, so they are extruded on rayon's
//! pool and returned in input order.

use rayon::prelude::*;

use crate::component::MeshBuilder;
use crate::error::PetalResult;
use crate::extrude::{ExtrudeOptions, Extruder};
use crate::mesh::Mesh;
use crate::params::PetalParameters;

/// Build one mesh per parameter set, in parallel.
///
/// A failure for one petal does not affect the others.
///
/// # Examples
/// ```
/// use petal_geometry::{build_petals, ExtrudeOptions, PetalParameters};
///
/// let petals = [PetalParameters::default(), PetalParameters::new(1.5, 0.5, 1.0)];
/// let meshes = build_petals(&petals, &ExtrudeOptions::default());
/// assert_eq!(meshes.len(), 2);
/// assert!(meshes.iter().all(|m| m.is_ok()));
/// ```
pub fn build_petals(params: &[PetalParameters], options: &ExtrudeOptions) -> Vec<PetalResult<Mesh>> {
    let extruder = Extruder::new(*options);
    params
        .par_iter()
        .map(|p| extruder.build_mesh(&p.outline()))
        .collect()
}

/// Build every petal and merge them into a single mesh.
///
/// # Errors
/// The first failing petal's error, in input order.
pub fn build_merged(params: &[PetalParameters], options: &ExtrudeOptions) -> PetalResult<Mesh> {
    let mut merged = Mesh::new();
    for mesh in build_petals(params, options) {
        merged.merge(&mesh?);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PetalError;

    #[test]
    fn test_batch_preserves_order() {
        let petals: Vec<PetalParameters> = (1..=8)
            .map(|i| PetalParameters::new(f64::from(i), 0.4, 0.8))
            .collect();
        let meshes = build_petals(&petals, &ExtrudeOptions::default());
        for (i, mesh) in meshes.into_iter().enumerate() {
            let (_, max) = mesh.unwrap().bounds().unwrap();
            // Tip plus bevel clamp, never reaching the next petal's size
            assert!(max[1] >= (i + 1) as f32);
            assert!(max[1] < (i + 1) as f32 + 0.1);
        }
    }

    #[test]
    fn test_batch_matches_single_build() {
        let petals = [PetalParameters::new(1.2, 0.3, 0.7)];
        let options = ExtrudeOptions::default();
        let batch = build_petals(&petals, &options).pop().unwrap().unwrap();
        let single = Extruder::new(options).build_mesh(&petals[0].outline()).unwrap();
        assert_eq!(batch, single);
    }

    #[test]
    fn test_empty_batch() {
        assert!(build_petals(&[], &ExtrudeOptions::default()).is_empty());
    }

    #[test]
    fn test_merged_mesh() {
        let petals = [PetalParameters::default(); 3];
        let merged = build_merged(&petals, &ExtrudeOptions::default()).unwrap();
        assert_eq!(merged.triangle_count(), 3 * 1052);
        assert_eq!(merged.groups.len(), 6);
    }

    #[test]
    fn test_merged_reports_errors() {
        let options = ExtrudeOptions {
            steps: 0,
            ..ExtrudeOptions::default()
        };
        let result = build_merged(&[PetalParameters::default()], &options);
        assert!(matches!(result, Err(PetalError::InvalidOptions(_))));
    }
}
