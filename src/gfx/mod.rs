//! # Graphics Module
//!
//! Everything the scene is made of, independent of any renderer.
//!
//! - **Geometry** ([`geometry`]) - Procedural sphere and cube meshes
//! - **Resources** ([`resources`]) - Material descriptors and the shared palette
//! - **Lights** ([`lights`]) - Point light sources
//! - **Scene** ([`scene`]) - Geometry, transform and group nodes plus the scene container

pub mod geometry;
pub mod lights;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use lights::PointLight;
pub use scene::Scene;
