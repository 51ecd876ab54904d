//! # Config Crate
//!
//! Centralized configuration constants for the petal geometry pipeline.
//! Petal parameter defaults, extrusion defaults and numeric tolerances are
//! defined here so the geometry and WASM crates never carry literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_PETAL_SIZE, DEFAULT_PETAL_DX, DEFAULT_PETAL_DY};
//!
//! // The default petal is one unit tall with controls at (±0.4, 0.8)
//! assert_eq!(DEFAULT_PETAL_SIZE, 1.0);
//! assert_eq!((DEFAULT_PETAL_DX, DEFAULT_PETAL_DY), (0.4, 0.8));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Renderer Compatible**: Extrusion defaults match the WebGL petal look

pub mod constants;
