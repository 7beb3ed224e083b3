use std::sync::Arc;

use cgmath::{Matrix4, One, Quaternion, Vector3};

use super::vertex::Vertex3D;
use crate::gfx::geometry::{generate_cube, generate_sphere};
use crate::gfx::lights::PointLight;
use crate::gfx::resources::material::Material;

/// The primitive a mesh was generated from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere {
        longitude_segments: u32,
        latitude_segments: u32,
        radius: f32,
    },
    Cube,
}

/// Triangle mesh owned by a geometry node
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    shape: Shape,
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Generates the mesh for `shape`
    pub fn from_shape(shape: Shape) -> Self {
        let geometry = match shape {
            Shape::Sphere {
                longitude_segments,
                latitude_segments,
                radius,
            } => generate_sphere(longitude_segments, latitude_segments, radius),
            Shape::Cube => generate_cube(),
        };
        let (vertices, indices) = geometry.to_scene_format();

        Self {
            shape,
            vertices,
            indices,
        }
    }

    pub fn sphere(longitude_segments: u32, latitude_segments: u32, radius: f32) -> Self {
        Self::from_shape(Shape::Sphere {
            longitude_segments,
            latitude_segments,
            radius,
        })
    }

    pub fn cube() -> Self {
        Self::from_shape(Shape::Cube)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A drawable mesh paired with the material it is shaded with
#[derive(Debug, Clone)]
pub struct GeometryNode {
    pub name: Option<String>,
    mesh: Mesh,
    material: Arc<Material>,
}

impl GeometryNode {
    pub fn new(mesh: Mesh, material: Arc<Material>) -> Self {
        Self {
            name: None,
            mesh,
            material,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Shared handle to the material; the material itself is read-only
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

/// Positions a geometry node in world space
#[derive(Debug, Clone)]
pub struct TransformNode {
    pub name: Option<String>,
    pub translation: Vector3<f32>,
    pub orientation: Quaternion<f32>,
    child: GeometryNode,
}

impl TransformNode {
    /// Create a transform around `child` at `translation` with no rotation
    pub fn new(child: GeometryNode, translation: Vector3<f32>) -> Self {
        Self {
            name: None,
            translation,
            orientation: Quaternion::one(),
            child,
        }
    }

    pub fn with_orientation(mut self, orientation: Quaternion<f32>) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn child(&self) -> &GeometryNode {
        &self.child
    }

    /// Local-to-world matrix, `T * R`
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.translation) * Matrix4::from(self.orientation)
    }
}

/// Aggregates transform children and light sources
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub name: String,
    children: Vec<TransformNode>,
    lights: Vec<PointLight>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn add_child(&mut self, child: TransformNode) {
        self.children.push(child);
    }

    pub fn add_light_source(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn children(&self) -> &[TransformNode] {
        &self.children
    }

    pub fn light_sources(&self) -> &[PointLight] {
        &self.lights
    }

    /// Geometry nodes of all children, in child order
    pub fn geometry_nodes(&self) -> impl Iterator<Item = &GeometryNode> {
        self.children.iter().map(TransformNode::child)
    }

    /// First child transform with the given name
    pub fn find_child(&self, name: &str) -> Option<&TransformNode> {
        self.children
            .iter()
            .find(|child| child.name.as_deref() == Some(name))
    }
}
