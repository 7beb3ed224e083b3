//! Material system
//!
//! Provides the material descriptor, its optional blend and face modifiers,
//! and the library that owns the scene's palette. Materials are immutable once
//! built: the library hands out `Arc<Material>` and geometry nodes keep the
//! same allocation instead of a copy.

use std::sync::Arc;

/// Index of a material inside a [`MaterialLibrary`]
pub type MaterialId = usize;

/// Source or destination factor of a blend equation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    Zero,
    One,
    SourceAlpha,
    OneMinusSourceAlpha,
    DestinationAlpha,
    OneMinusDestinationAlpha,
}

/// Blend functions for translucent materials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendAttribute {
    pub source: BlendFactor,
    pub destination: BlendFactor,
}

impl BlendAttribute {
    pub fn new(source: BlendFactor, destination: BlendFactor) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Standard `src_alpha, 1 - src_alpha` blending
    pub fn alpha() -> Self {
        Self::new(BlendFactor::SourceAlpha, BlendFactor::OneMinusSourceAlpha)
    }
}

/// Face culling and lighting options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceAttribute {
    pub cull_front: bool,
    pub cull_back: bool,
    pub two_sided_lighting: bool,
}

impl Default for FaceAttribute {
    fn default() -> Self {
        Self {
            cull_front: false,
            cull_back: true,
            two_sided_lighting: false,
        }
    }
}

impl FaceAttribute {
    /// Renders front and back faces and lights both
    pub fn double_sided() -> Self {
        Self {
            cull_front: false,
            cull_back: false,
            two_sided_lighting: true,
        }
    }
}

/// Material descriptor with classic Phong-style parameters
///
/// Build it with [`Material::new`] and the `with_*` methods, then share it
/// through a [`MaterialLibrary`].
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub specular_exponent: f32,
    pub emissive: [f32; 3],
    pub opacity: f32,
    pub reflectivity: f32,
    pub index_of_refraction: f32,
    pub blend: Option<BlendAttribute>,
    pub face: Option<FaceAttribute>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            ambient: [0.0, 0.0, 0.0],
            diffuse: [0.8, 0.8, 0.8],
            specular: [1.0, 1.0, 1.0],
            specular_exponent: 20.0,
            emissive: [0.0, 0.0, 0.0],
            opacity: 1.0,
            reflectivity: 0.0,
            index_of_refraction: 1.0,
            blend: None,
            face: None,
        }
    }
}

impl Material {
    /// Creates a material with the full parameter set and no modifiers
    ///
    /// # Arguments
    /// * `name` - Display name; does not need to be unique
    /// * `ambient`, `diffuse`, `specular` - RGB colors
    /// * `specular_exponent` - Phong shininess
    /// * `emissive` - RGB emission
    /// * `opacity` - 1.0 is fully opaque
    /// * `reflectivity` - Mirror reflection factor
    /// * `index_of_refraction` - 1.0 for vacuum, 1.33 for water, 1.45 for glass
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        ambient: [f32; 3],
        diffuse: [f32; 3],
        specular: [f32; 3],
        specular_exponent: f32,
        emissive: [f32; 3],
        opacity: f32,
        reflectivity: f32,
        index_of_refraction: f32,
    ) -> Self {
        Self {
            name: name.to_string(),
            ambient,
            diffuse,
            specular,
            specular_exponent,
            emissive,
            opacity,
            reflectivity,
            index_of_refraction,
            blend: None,
            face: None,
        }
    }

    /// Builder pattern: Attach a blend modifier
    pub fn with_blend(mut self, blend: BlendAttribute) -> Self {
        self.blend = Some(blend);
        self
    }

    /// Builder pattern: Attach a face modifier
    pub fn with_face(mut self, face: FaceAttribute) -> Self {
        self.face = Some(face);
        self
    }

    /// True when the material carries both the blend and the face modifier
    pub fn is_translucent(&self) -> bool {
        self.blend.is_some() && self.face.is_some()
    }
}

/// Owns the scene's materials in insertion order
///
/// Objects keep an `Arc` to the material they use; ids are positions in the
/// library and stay valid because materials are never removed.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    materials: Vec<Arc<Material>>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the five-entry palette used by the sphere scene
    ///
    /// | id | name | role |
    /// |----|------|------|
    /// | 0 | White Material | opaque, used by cubes |
    /// | 1 | Red Material | translucent, water-like |
    /// | 2 | Green Material | translucent, glass-like |
    /// | 3 | Blue Material | translucent |
    /// | 4 | White Material | no modifiers, used by spheres |
    pub fn standard_palette() -> Self {
        let blend = BlendAttribute::alpha();
        let face = FaceAttribute::double_sided();

        let mut library = Self::new();
        library.add_material(Material::new(
            "White Material",
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [1.0, 0.0, 0.0],
            200.0,
            [0.0, 0.0, 0.0],
            1.0,
            0.5,
            1.0,
        ));
        library.add_material(
            Material::new(
                "Red Material",
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 1.0],
                40.0,
                [0.0, 0.0, 0.0],
                0.7,
                0.3,
                1.33,
            )
            .with_blend(blend)
            .with_face(face),
        );
        library.add_material(
            Material::new(
                "Green Material",
                [0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 1.0],
                60.0,
                [0.0, 0.0, 0.0],
                0.5,
                0.3,
                1.45,
            )
            .with_blend(blend)
            .with_face(face),
        );
        library.add_material(
            Material::new(
                "Blue Material",
                [0.0, 0.0, 0.0],
                [0.0, 0.0, 1.0],
                [1.0, 1.0, 1.0],
                80.0,
                [0.0, 0.0, 0.0],
                0.3,
                0.3,
                1.7,
            )
            .with_blend(blend)
            .with_face(face),
        );
        library.add_material(Material::new(
            "White Material",
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            100.0,
            [0.0, 0.0, 0.0],
            0.1,
            0.0,
            1.0,
        ));
        library
    }

    /// Adds a material and returns its id
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(Arc::new(material));
        self.materials.len() - 1
    }

    /// Gets a shared handle to a material by id
    pub fn get_material(&self, id: MaterialId) -> Option<Arc<Material>> {
        self.materials.get(id).cloned()
    }

    /// Finds the id of a material by its handle
    pub fn id_of(&self, material: &Arc<Material>) -> Option<MaterialId> {
        self.materials.iter().position(|m| Arc::ptr_eq(m, material))
    }

    /// Lists all material names in id order
    pub fn list_materials(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Material>> {
        self.materials.iter()
    }
}
