//! # Vertex Data Structures
//!
//! The vertex format stored in every [`Mesh`](super::node::Mesh).

/// A 3D vertex with position, normal and texture coordinate data.
///
/// `#[repr(C)]` plus `Pod` lets a consumer upload a mesh's vertex slice as
/// raw bytes with [`bytemuck::cast_slice`].
///
/// # Examples
///
/// ```
/// use sphere_scene::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     tex_coord: [0.5, 0.0],
/// };
/// let bytes: &[u8] = bytemuck::bytes_of(&vertex);
/// assert_eq!(bytes.len(), Vertex3D::SIZE);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
    /// Texture coordinates [u, v]
    pub tex_coord: [f32; 2],
}

impl Vertex3D {
    /// Size of one vertex in bytes
    pub const SIZE: usize = std::mem::size_of::<Self>();
}
