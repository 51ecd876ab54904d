//! # Petal Parameters
//!
//! The three scalars a host sets on a petal. Defaults come from the
//! `config` crate.

use config::constants::{DEFAULT_PETAL_DX, DEFAULT_PETAL_DY, DEFAULT_PETAL_SIZE};
use serde::{Deserialize, Serialize};

use crate::outline::{build_petal_outline, PetalOutline};

/// Shape parameters of a single petal.
///
/// - `size`: tip distance from the base point, positive for a visible petal
/// - `dx`: horizontal offset of both control points, mirrored about x = 0
/// - `dy`: vertical offset of both control points
///
/// Zero or negative values are allowed and simply give a flat or
/// reversed lobe.
///
/// ## Example
///
/// ```rust
/// use petal_geometry::PetalParameters;
///
/// let params = PetalParameters::default();
/// assert_eq!((params.size, params.dx, params.dy), (1.0, 0.4, 0.8));
///
/// let wide = PetalParameters::new(2.0, 1.2, 1.0);
/// assert_eq!(wide.outline().tip().y, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetalParameters {
    /// Tip distance from the base point.
    #[serde(alias = "length")]
    pub size: f64,
    /// Horizontal control point offset.
    pub dx: f64,
    /// Vertical control point offset.
    pub dy: f64,
}

impl Default for PetalParameters {
    fn default() -> Self {
        Self {
            size: DEFAULT_PETAL_SIZE,
            dx: DEFAULT_PETAL_DX,
            dy: DEFAULT_PETAL_DY,
        }
    }
}

impl PetalParameters {
    /// Create parameters from explicit values.
    #[must_use]
    pub fn new(size: f64, dx: f64, dy: f64) -> Self {
        Self { size, dx, dy }
    }

    /// Build the closed outline for these parameters.
    ///
    /// Shorthand for [`build_petal_outline`].
    #[must_use]
    pub fn outline(&self) -> PetalOutline {
        build_petal_outline(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PetalParameters::default();
        assert_eq!(params, PetalParameters::new(1.0, 0.4, 0.8));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: PetalParameters = serde_json::from_str(r#"{"dx": 0.25}"#).unwrap();
        assert_eq!(params.size, DEFAULT_PETAL_SIZE);
        assert_eq!(params.dx, 0.25);
        assert_eq!(params.dy, DEFAULT_PETAL_DY);
    }

    #[test]
    fn test_length_alias() {
        let params: PetalParameters = serde_json::from_str(r#"{"length": 3.0}"#).unwrap();
        assert_eq!(params.size, 3.0);
    }
}
