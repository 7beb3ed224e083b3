// src/lib.rs
//! Sphere Scene
//!
//! Builds a static 3D scene of spheres, cubes, shared materials and point
//! lights from flat CSV data. See [`builder::SceneBuilder`] for the build
//! routine and [`config::SceneConfig`] for its inputs.

pub mod builder;
pub mod config;
pub mod data;
pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use builder::SceneBuilder;
pub use config::SceneConfig;
pub use error::SceneError;

/// Builds the scene from the default `data/` inputs
pub fn default() -> Result<gfx::Scene, SceneError> {
    SceneBuilder::new(SceneConfig::default()).build()
}
