//! # Sphere Scene Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use sphere_scene::prelude::*;
//!
//! let config = SceneConfig::from_data_dir("data").with_sphere_count(5);
//! let builder = SceneBuilder::new(config);
//! assert_eq!(builder.config().num_spheres, 5);
//! ```

pub use crate::builder::SceneBuilder;
pub use crate::config::{SceneConfig, ValidationMode};
pub use crate::data::{PlanarPosition, SphereRecord};
pub use crate::error::SceneError;
pub use crate::gfx::lights::PointLight;
pub use crate::gfx::resources::material::{
    BlendAttribute, BlendFactor, FaceAttribute, Material, MaterialLibrary,
};
pub use crate::gfx::scene::{
    GeometryNode, Group, LoadReport, Mesh, Scene, SceneStatistics, Shape, TransformNode,
};

// Math types used in the public API
pub use cgmath::{Point3, Quaternion, Vector3};
