//! # Vertex Data Structures
//!
//! GPU-compatible interleaved vertex format produced from the shared pools
//! when they are handed to the renderer.

use cgmath::Vector3;

/// One pool vertex with its synthesized normal.
///
/// The `#[repr(C)]` attribute keeps the layout stable so the pool snapshot can
/// be cast straight to bytes for upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// Object-space position [x, y, z]
    pub position: [f32; 3],
    /// Unit normal [nx, ny, nz], zero for vertices outside every triangle
    pub normal: [f32; 3],
}

impl Vertex3D {
    pub fn new(position: Vector3<f32>, normal: Vector3<f32>) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
        }
    }

    /// Vertex buffer layout matching the `position` (location 0) and
    /// `normal` (location 1) shader inputs.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}
