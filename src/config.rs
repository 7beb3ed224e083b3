//! # Scene Configuration
//!
//! [`SceneConfig`] collects every value the build routine used to hard-code:
//! input paths, object counts, sphere tessellation, the depth of the cube
//! layer and the tint of the point lights. It is passed explicitly into
//! [`SceneBuilder`](crate::builder::SceneBuilder), so scenes of any size can
//! be built from any directory without recompiling.
//!
//! ```
//! use sphere_scene::config::{SceneConfig, ValidationMode};
//!
//! let config = SceneConfig::from_data_dir("assets")
//!     .with_sphere_count(10)
//!     .with_cube_count(4)
//!     .with_validation(ValidationMode::Strict);
//! assert_eq!(config.num_spheres, 10);
//! ```

use std::path::{Path, PathBuf};

/// Default number of spheres read from the CSV
pub const DEFAULT_NUM_SPHERES: usize = 50;
/// Default number of cubes placed from the position files
pub const DEFAULT_NUM_CUBES: usize = 50;
/// Fixed z coordinate of every cube
pub const DEFAULT_CUBE_DEPTH: f32 = 500.0;

/// How the loaders treat missing or short input files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Missing files and missing lines leave records at zero
    #[default]
    Lenient,
    /// Missing files and inputs shorter than the configured count are errors
    Strict,
}

/// Inputs and constants for one scene build
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub sphere_csv: PathBuf,
    pub x_positions: PathBuf,
    pub y_positions: PathBuf,
    pub num_spheres: usize,
    pub num_cubes: usize,
    pub sphere_longitude_segments: u32,
    pub sphere_latitude_segments: u32,
    pub cube_depth: f32,
    pub light_color: [f32; 3],
    pub validation: ValidationMode,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::from_data_dir("data")
    }
}

impl SceneConfig {
    /// Uses `fire.csv`, `x_bbox.asc` and `y_bbox.asc` inside `dir`
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            sphere_csv: dir.join("fire.csv"),
            x_positions: dir.join("x_bbox.asc"),
            y_positions: dir.join("y_bbox.asc"),
            num_spheres: DEFAULT_NUM_SPHERES,
            num_cubes: DEFAULT_NUM_CUBES,
            sphere_longitude_segments: 32,
            sphere_latitude_segments: 16,
            cube_depth: DEFAULT_CUBE_DEPTH,
            light_color: [1.0, 0.0, 0.0],
            validation: ValidationMode::Lenient,
        }
    }

    /// Builder pattern: Set the number of spheres
    pub fn with_sphere_count(mut self, count: usize) -> Self {
        self.num_spheres = count;
        self
    }

    /// Builder pattern: Set the number of cubes
    pub fn with_cube_count(mut self, count: usize) -> Self {
        self.num_cubes = count;
        self
    }

    /// Builder pattern: Set sphere tessellation
    pub fn with_sphere_segments(mut self, longitude: u32, latitude: u32) -> Self {
        self.sphere_longitude_segments = longitude;
        self.sphere_latitude_segments = latitude;
        self
    }

    /// Builder pattern: Set the z coordinate shared by all cubes
    pub fn with_cube_depth(mut self, depth: f32) -> Self {
        self.cube_depth = depth;
        self
    }

    /// Builder pattern: Set the color of every point light
    pub fn with_light_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.light_color = [r, g, b];
        self
    }

    /// Builder pattern: Set the validation mode
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_live_under_data() {
        let config = SceneConfig::default();
        assert_eq!(config.sphere_csv, Path::new("data").join("fire.csv"));
        assert_eq!(config.x_positions, Path::new("data").join("x_bbox.asc"));
        assert_eq!(config.y_positions, Path::new("data").join("y_bbox.asc"));
        assert_eq!(config.cube_depth, 500.0);
        assert_eq!(config.light_color, [1.0, 0.0, 0.0]);
        assert_eq!(config.validation, ValidationMode::Lenient);
    }

    #[test]
    fn test_builder_methods() {
        let config = SceneConfig::from_data_dir("elsewhere")
            .with_sphere_count(3)
            .with_cube_count(7)
            .with_sphere_segments(8, 4)
            .with_cube_depth(10.0)
            .with_light_color(0.0, 1.0, 0.0);

        assert_eq!(config.num_spheres, 3);
        assert_eq!(config.num_cubes, 7);
        assert_eq!(config.sphere_longitude_segments, 8);
        assert_eq!(config.sphere_latitude_segments, 4);
        assert_eq!(config.cube_depth, 10.0);
        assert_eq!(config.light_color, [0.0, 1.0, 0.0]);
        assert!(config.sphere_csv.starts_with("elsewhere"));
    }
}
