//! Light sources registered on a [`Group`](crate::gfx::scene::Group).

use cgmath::Point3;

/// An omnidirectional light at a world position
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub name: Option<String>,
    pub position: Point3<f32>,
    /// RGB color
    pub color: [f32; 3],
}

impl PointLight {
    pub fn new(position: Point3<f32>, color: [f32; 3]) -> Self {
        Self {
            name: None,
            position,
            color,
        }
    }

    /// White light at `position`
    pub fn white(position: Point3<f32>) -> Self {
        Self::new(position, [1.0, 1.0, 1.0])
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
