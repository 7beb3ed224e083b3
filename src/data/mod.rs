//! # Input Records
//!
//! Plain numeric records read from the scene's text inputs, plus the readers
//! that fill them. Records are read once per build and never modified after.

pub mod loader;

pub use loader::{fill_positions, parse_lenient_f32, read_sphere_records, Axis, LoadedRecords};

use cgmath::{Point3, Vector3};

/// One sphere from the CSV: world position and radius
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SphereRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
}

impl SphereRecord {
    pub fn new(x: f32, y: f32, z: f32, radius: f32) -> Self {
        Self { x, y, z, radius }
    }

    pub fn position(&self) -> Point3<f32> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn translation(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// One cube position; x and y come from separate single-column files
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanarPosition {
    pub x: f32,
    pub y: f32,
}

impl PlanarPosition {
    /// Lifts the position to 3D at the given depth
    pub fn at_depth(&self, z: f32) -> Vector3<f32> {
        Vector3::new(self.x, self.y, z)
    }
}
