//! # Procedural Geometry Generation
//!
//! This module generates the mesh data for the scene's drawables, so no model
//! files are needed for spheres or cubes.
//!
//! ## Supported Primitives
//!
//! - **Cube**: Unit cube centered at the origin
//! - **Sphere**: UV sphere with configurable resolution and radius
//!
//! ## Usage
//!
//! ```rust
//! use sphere_scene::gfx::geometry::{generate_cube, generate_sphere};
//!
//! // Generate a unit cube
//! let cube_data = generate_cube();
//!
//! // Generate a sphere of radius 2 with 32 x 16 segments
//! let sphere_data = generate_sphere(32, 16, 2.0);
//! assert_eq!(sphere_data.vertex_count(), 33 * 17);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::scene::vertex::Vertex3D;

/// Generated geometry data, one entry per vertex in each attribute list
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleaves positions, normals and texture coordinates into the scene's
    /// vertex format
    pub fn to_scene_format(&self) -> (Vec<Vertex3D>, Vec<u32>) {
        let vertices = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                tex_coord: self.tex_coords.get(i).copied().unwrap_or([0.0, 0.0]),
            })
            .collect();

        (vertices, self.indices.clone())
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
