//! # Scene Management Module
//!
//! The in-memory scene graph: a [`Scene`] owns one root [`Group`], the group
//! owns [`TransformNode`]s and [`PointLight`](crate::gfx::lights::PointLight)s,
//! and each transform owns one [`GeometryNode`] pairing a [`Mesh`] with a
//! shared material.
//!
//! ## Usage
//!
//! ```
//! use sphere_scene::gfx::resources::material::MaterialLibrary;
//! use sphere_scene::gfx::scene::{GeometryNode, Group, Mesh, Scene, TransformNode};
//! use cgmath::Vector3;
//!
//! let materials = MaterialLibrary::standard_palette();
//! let white = materials.get_material(0).unwrap();
//!
//! let mut root = Group::new("Root Node");
//! root.add_child(TransformNode::new(
//!     GeometryNode::new(Mesh::cube(), white),
//!     Vector3::new(0.0, 0.0, 500.0),
//! ));
//!
//! let mut scene = Scene::new(materials);
//! scene.set_root_node(root);
//! assert_eq!(scene.statistics().node_count, 1);
//! ```

pub mod node;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use node::{GeometryNode, Group, Mesh, Shape, TransformNode};
pub use scene::{LoadReport, Scene, SceneStatistics};
pub use vertex::Vertex3D;
