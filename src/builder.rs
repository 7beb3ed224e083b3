//! # Scene Builder
//!
//! Assembles the sphere scene in one pass: load the records, build the
//! material palette, create one geometry node and transform per sphere and per
//! cube, add a point light per sphere and hang everything off a single root
//! group.
//!
//! ```no_run
//! use sphere_scene::{builder::SceneBuilder, config::SceneConfig};
//!
//! let scene = SceneBuilder::new(SceneConfig::default()).build()?;
//! println!("{}", scene.statistics());
//! # Ok::<(), sphere_scene::error::SceneError>(())
//! ```

use std::sync::Arc;

use log::{debug, info};

use crate::config::SceneConfig;
use crate::data::{fill_positions, read_sphere_records, Axis, PlanarPosition, SphereRecord};
use crate::error::{Result, SceneError};
use crate::gfx::lights::PointLight;
use crate::gfx::resources::material::{Material, MaterialId, MaterialLibrary};
use crate::gfx::scene::{GeometryNode, Group, LoadReport, Mesh, Scene, TransformNode};

/// Palette entry used by every cube
pub const CUBE_MATERIAL: MaterialId = 0;
/// Palette entry used by every sphere
pub const SPHERE_MATERIAL: MaterialId = 4;
/// Name given to the root group
pub const ROOT_NODE_NAME: &str = "Root Node";

/// Builds a [`Scene`] from the inputs named in a [`SceneConfig`]
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    config: SceneConfig,
}

impl SceneBuilder {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Reads the inputs and assembles the scene
    ///
    /// Fails without producing a scene if the sphere CSV has a line whose
    /// column count is not four, or, in strict mode, if an input is missing or
    /// short.
    pub fn build(&self) -> Result<Scene> {
        let config = &self.config;
        info!(
            "Building scene with {} spheres and {} cubes",
            config.num_spheres, config.num_cubes
        );

        let mut positions = vec![PlanarPosition::default(); config.num_cubes];
        let x_position_lines =
            fill_positions(&mut positions, &config.x_positions, Axis::X, config.validation)?;
        let y_position_lines =
            fill_positions(&mut positions, &config.y_positions, Axis::Y, config.validation)?;

        let spheres =
            read_sphere_records(&config.sphere_csv, config.num_spheres, config.validation)?;
        info!(
            "Read {} lines from {}",
            spheres.lines_read,
            config.sphere_csv.display()
        );

        let materials = MaterialLibrary::standard_palette();
        let mut root = Group::new(ROOT_NODE_NAME);

        for transform in self.sphere_transforms(&spheres.records, &materials)? {
            root.add_child(transform);
        }
        for transform in self.cube_transforms(&positions, &materials)? {
            root.add_child(transform);
        }
        for light in self.sphere_lights(&spheres.records) {
            root.add_light_source(light);
        }

        let mut scene = Scene::new(materials).with_load_report(LoadReport {
            sphere_lines: spheres.lines_read,
            x_position_lines,
            y_position_lines,
        });
        scene.set_root_node(root);

        debug!("Scene assembled: {}", scene.statistics());
        Ok(scene)
    }

    fn sphere_transforms(
        &self,
        records: &[SphereRecord],
        materials: &MaterialLibrary,
    ) -> Result<Vec<TransformNode>> {
        let material = palette_entry(materials, SPHERE_MATERIAL)?;

        Ok(records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let mesh = Mesh::sphere(
                    self.config.sphere_longitude_segments,
                    self.config.sphere_latitude_segments,
                    record.radius,
                );
                TransformNode::new(GeometryNode::new(mesh, material.clone()), record.translation())
                    .with_name(format!("Sphere Transform {}", i))
            })
            .collect())
    }

    fn cube_transforms(
        &self,
        positions: &[PlanarPosition],
        materials: &MaterialLibrary,
    ) -> Result<Vec<TransformNode>> {
        let material = palette_entry(materials, CUBE_MATERIAL)?;

        Ok(positions
            .iter()
            .enumerate()
            .map(|(i, position)| {
                TransformNode::new(
                    GeometryNode::new(Mesh::cube(), material.clone()),
                    position.at_depth(self.config.cube_depth),
                )
                .with_name(format!("Cube Transform {}", i))
            })
            .collect())
    }

    fn sphere_lights(&self, records: &[SphereRecord]) -> Vec<PointLight> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                PointLight::new(record.position(), self.config.light_color)
                    .with_name(format!("Point Light {}", i))
            })
            .collect()
    }
}

fn palette_entry(materials: &MaterialLibrary, id: MaterialId) -> Result<Arc<Material>> {
    materials
        .get_material(id)
        .ok_or(SceneError::MissingMaterial(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationMode;
    use cgmath::{Point3, Vector3};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_inputs(dir: &Path, spheres: &str, xs: &str, ys: &str) {
        fs::write(dir.join("fire.csv"), spheres).unwrap();
        fs::write(dir.join("x_bbox.asc"), xs).unwrap();
        fs::write(dir.join("y_bbox.asc"), ys).unwrap();
    }

    fn small_config(dir: &Path, spheres: usize, cubes: usize) -> SceneConfig {
        SceneConfig::from_data_dir(dir)
            .with_sphere_count(spheres)
            .with_cube_count(cubes)
            .with_sphere_segments(8, 4)
    }

    fn sample_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(
            dir.path(),
            "1.0,2.0,3.0,0.5\n-4,5,6,1\n7,8,-9,2\n",
            "10\n20\n",
            "30\n40\n",
        );
        dir
    }

    #[test]
    fn test_spheres_transforms_and_lights_match_records() {
        let dir = sample_dir();
        let scene = SceneBuilder::new(small_config(dir.path(), 3, 2))
            .build()
            .unwrap();
        let root = scene.root_node().unwrap();

        assert_eq!(root.name, ROOT_NODE_NAME);
        assert_eq!(root.children().len(), 5);
        assert_eq!(root.light_sources().len(), 3);

        let expected = [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, -9.0),
        ];
        for (i, translation) in expected.iter().enumerate() {
            let transform = &root.children()[i];
            assert_eq!(transform.translation, *translation);
            assert_eq!(
                root.light_sources()[i].position,
                Point3::new(translation.x, translation.y, translation.z)
            );
            assert_eq!(root.light_sources()[i].color, [1.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_sphere_radius_reaches_mesh() {
        let dir = sample_dir();
        let scene = SceneBuilder::new(small_config(dir.path(), 3, 2))
            .build()
            .unwrap();
        let first = scene.root_node().unwrap().children()[0].child();

        assert_eq!(
            first.mesh().shape(),
            crate::gfx::scene::Shape::Sphere {
                longitude_segments: 8,
                latitude_segments: 4,
                radius: 0.5
            }
        );
    }

    #[test]
    fn test_cubes_sit_at_fixed_depth() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path(), "0,0,0,1\n", "1.5\n2.5\n", "-1\n");
        let scene = SceneBuilder::new(small_config(dir.path(), 1, 4))
            .build()
            .unwrap();
        let root = scene.root_node().unwrap();
        let cubes: Vec<_> = root.children()[1..].iter().collect();

        assert_eq!(cubes.len(), 4);
        assert!(cubes.iter().all(|c| c.translation.z == 500.0));
        assert_eq!(cubes[0].translation, Vector3::new(1.5, -1.0, 500.0));
        assert_eq!(cubes[1].translation, Vector3::new(2.5, 0.0, 500.0));
        assert_eq!(cubes[2].translation, Vector3::new(0.0, 0.0, 500.0));
        assert_eq!(cubes[3].translation, Vector3::new(0.0, 0.0, 500.0));
        assert!(cubes
            .iter()
            .all(|c| c.child().mesh().shape() == crate::gfx::scene::Shape::Cube));
    }

    #[test]
    fn test_bad_column_count_produces_no_scene() {
        for bad in ["1,2,3\n", "1,2,3,4,5\n"] {
            let dir = tempfile::tempdir().unwrap();
            write_inputs(dir.path(), bad, "1\n", "1\n");
            let result = SceneBuilder::new(small_config(dir.path(), 1, 1)).build();
            assert!(matches!(result, Err(SceneError::ColumnCount { line: 1, .. })));
        }
    }

    #[test]
    fn test_material_assignment_is_shared() {
        let dir = sample_dir();
        let scene = SceneBuilder::new(small_config(dir.path(), 3, 2))
            .build()
            .unwrap();
        let sphere_material = scene.materials().get_material(SPHERE_MATERIAL).unwrap();
        let cube_material = scene.materials().get_material(CUBE_MATERIAL).unwrap();
        let root = scene.root_node().unwrap();

        for (i, node) in root.geometry_nodes().enumerate() {
            let expected = if i < 3 {
                &sphere_material
            } else {
                &cube_material
            };
            assert!(Arc::ptr_eq(node.material(), expected));
        }
        assert!(!sphere_material.is_translucent());
        assert!(!cube_material.is_translucent());
    }

    #[test]
    fn test_builds_are_deterministic() {
        let dir = sample_dir();
        let builder = SceneBuilder::new(small_config(dir.path(), 3, 2));
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        assert_eq!(first.statistics(), second.statistics());
        assert_eq!(first.load_report(), second.load_report());

        let a = first.root_node().unwrap();
        let b = second.root_node().unwrap();
        for (left, right) in a.children().iter().zip(b.children()) {
            assert_eq!(left.translation, right.translation);
            assert_eq!(left.name, right.name);
            assert_eq!(
                first.materials().id_of(left.child().material()),
                second.materials().id_of(right.child().material())
            );
        }
    }

    #[test]
    fn test_load_report_counts_lines() {
        let dir = sample_dir();
        let scene = SceneBuilder::new(small_config(dir.path(), 3, 2))
            .build()
            .unwrap();
        assert_eq!(
            scene.load_report(),
            LoadReport {
                sphere_lines: 3,
                x_position_lines: 2,
                y_position_lines: 2,
            }
        );
    }

    #[test]
    fn test_missing_inputs_lenient_and_strict() {
        let dir = tempfile::tempdir().unwrap();

        let scene = SceneBuilder::new(small_config(dir.path(), 2, 2))
            .build()
            .unwrap();
        let root = scene.root_node().unwrap();
        assert_eq!(root.children().len(), 4);
        assert!(root.light_sources().iter().all(|l| l.position == Point3::new(0.0, 0.0, 0.0)));

        let strict = small_config(dir.path(), 2, 2).with_validation(ValidationMode::Strict);
        assert!(matches!(
            SceneBuilder::new(strict).build(),
            Err(SceneError::Io { .. })
        ));
    }

    #[test]
    fn test_strict_mode_rejects_short_positions() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path(), "0,0,0,1\n", "1\n", "1\n2\n");
        let config = small_config(dir.path(), 1, 2).with_validation(ValidationMode::Strict);
        match SceneBuilder::new(config).build() {
            Err(SceneError::ShortInput {
                expected, found, ..
            }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
