//! Shared resources referenced by scene nodes.

pub mod material;

pub use material::{BlendAttribute, BlendFactor, FaceAttribute, Material, MaterialId, MaterialLibrary};
