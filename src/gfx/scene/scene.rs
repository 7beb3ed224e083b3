use std::fmt;

use crate::gfx::resources::material::MaterialLibrary;

use super::node::Group;

/// Line counts of the inputs a scene was built from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub sphere_lines: usize,
    pub x_position_lines: usize,
    pub y_position_lines: usize,
}

/// Top-level container owning the root group and the material palette
#[derive(Debug, Clone)]
pub struct Scene {
    pub back_color: [f32; 4],
    root: Option<Group>,
    materials: MaterialLibrary,
    load_report: LoadReport,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(MaterialLibrary::new())
    }
}

impl Scene {
    /// Creates an empty scene that references materials from `materials`
    pub fn new(materials: MaterialLibrary) -> Self {
        Self {
            back_color: [0.0, 0.0, 0.0, 1.0],
            root: None,
            materials,
            load_report: LoadReport::default(),
        }
    }

    pub fn with_back_color(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.back_color = [r, g, b, a];
        self
    }

    pub(crate) fn with_load_report(mut self, load_report: LoadReport) -> Self {
        self.load_report = load_report;
        self
    }

    /// Installs `root` as the root node; the scene owns it from here on
    pub fn set_root_node(&mut self, root: Group) {
        self.root = Some(root);
    }

    pub fn root_node(&self) -> Option<&Group> {
        self.root.as_ref()
    }

    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    pub fn load_report(&self) -> LoadReport {
        self.load_report
    }

    /// Gets statistics about the scene
    pub fn statistics(&self) -> SceneStatistics {
        let mut stats = SceneStatistics {
            material_count: self.materials.len(),
            ..SceneStatistics::default()
        };

        if let Some(root) = &self.root {
            stats.node_count = root.children().len();
            stats.light_count = root.light_sources().len();
            for node in root.geometry_nodes() {
                stats.total_triangles += node.mesh().triangle_count();
                stats.total_vertices += node.mesh().vertex_count();
            }
        }

        stats
    }
}

/// Scene statistics for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStatistics {
    pub node_count: usize,
    pub light_count: usize,
    pub material_count: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
}

impl fmt::Display for SceneStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} lights, {} materials, {} triangles, {} vertices",
            self.node_count,
            self.light_count,
            self.material_count,
            self.total_triangles,
            self.total_vertices
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::node::{GeometryNode, Mesh, TransformNode};
    use cgmath::Vector3;

    #[test]
    fn test_empty_scene_statistics() {
        let scene = Scene::new(MaterialLibrary::standard_palette());
        assert!(scene.root_node().is_none());
        assert_eq!(
            scene.statistics(),
            SceneStatistics {
                material_count: 5,
                ..SceneStatistics::default()
            }
        );
    }

    #[test]
    fn test_statistics_count_root_contents() {
        let materials = MaterialLibrary::standard_palette();
        let white = materials.get_material(0).unwrap();
        let mut root = Group::new("Root Node");
        for i in 0..3 {
            root.add_child(TransformNode::new(
                GeometryNode::new(Mesh::cube(), white.clone()),
                Vector3::new(i as f32, 0.0, 0.0),
            ));
        }

        let mut scene = Scene::new(materials).with_back_color(0.1, 0.2, 0.3, 1.0);
        scene.set_root_node(root);

        let stats = scene.statistics();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.light_count, 0);
        assert_eq!(stats.total_triangles, 36);
        assert_eq!(stats.total_vertices, 72);
        assert_eq!(scene.back_color, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(
            stats.to_string(),
            "3 nodes, 0 lights, 5 materials, 36 triangles, 72 vertices"
        );
    }
}
