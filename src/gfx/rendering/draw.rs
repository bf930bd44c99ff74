use std::ops::Range;

use cgmath::{Matrix4, Vector3};

use crate::gfx::{
    camera::convert_matrix4_to_array,
    scene::{InstanceId, Vertex3D},
};

/// How instances are shaded. The discriminant is the shader's selector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum ShadingMode {
    #[default]
    Wireframe = 0,
    Flat = 1,
    Phong = 2,
}

impl ShadingMode {
    pub fn selector(self) -> u32 {
        self as u32
    }

    /// Wireframe draws triangle outlines; the other modes fill them.
    pub fn topology(self) -> wgpu::PrimitiveTopology {
        match self {
            ShadingMode::Wireframe => wgpu::PrimitiveTopology::LineStrip,
            ShadingMode::Flat | ShadingMode::Phong => wgpu::PrimitiveTopology::TriangleList,
        }
    }
}

/// Everything the renderer needs to draw one instance.
///
/// The renderer must also write `instance_id` into the per-pixel index
/// channel (stencil reference or id attachment) so picking can read it back.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub instance_id: InstanceId,
    pub clip: Matrix4<f32>,
    pub world: Matrix4<f32>,
    pub color: Vector3<f32>,
    pub shading: ShadingMode,
    /// Range into the shared index pool.
    pub indices: Range<u32>,
}

impl DrawCall {
    pub fn stencil_reference(&self) -> u32 {
        self.instance_id.get()
    }

    pub fn uniform(&self) -> InstanceUniform {
        InstanceUniform {
            clip: convert_matrix4_to_array(self.clip),
            world: convert_matrix4_to_array(self.world),
            color: [self.color.x, self.color.y, self.color.z, 1.0],
        }
    }
}

/// Per-draw uniform block.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceUniform {
    pub clip: [[f32; 4]; 4],
    pub world: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// A consistent copy of the shared pools, produced after a load finishes.
#[derive(Debug, Clone)]
pub struct PoolUpload {
    pub vertices: Vec<Vertex3D>,
    pub indices: Vec<u32>,
    /// Set only for the first upload: vertex attributes need binding once.
    pub bind_attributes: bool,
}

impl PoolUpload {
    pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::SquareMatrix;

    #[test]
    fn test_shading_selectors() {
        assert_eq!(ShadingMode::Wireframe.selector(), 0);
        assert_eq!(ShadingMode::Flat.selector(), 1);
        assert_eq!(ShadingMode::Phong.selector(), 2);
        assert_eq!(
            ShadingMode::Phong.topology(),
            wgpu::PrimitiveTopology::TriangleList
        );
    }

    #[test]
    fn test_uniform_packing() {
        let call = DrawCall {
            instance_id: InstanceId::new(3).unwrap(),
            clip: Matrix4::identity(),
            world: Matrix4::from_scale(2.0),
            color: Vector3::new(0.5, 0.25, 1.0),
            shading: ShadingMode::Flat,
            indices: 0..36,
        };
        let uniform = call.uniform();
        assert_eq!(call.stencil_reference(), 3);
        assert_eq!(uniform.world[1][1], 2.0);
        assert_eq!(uniform.color, [0.5, 0.25, 1.0, 1.0]);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 144);
    }
}
