use cgmath::{Matrix4, Vector3};

use super::scene_camera::SceneCamera;
use crate::gfx::rendering::ShadingMode;

/// Point light used by the shading pass.
pub const LIGHT_POSITION: [f32; 3] = [0.0, 1.0, 2.0];
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Per-frame uniforms handed to the renderer alongside the draw calls.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct FrameUniforms {
    /// Light position in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub light_position: [f32; 4],
    pub light_color: [f32; 4],
    /// The eye position of the camera, used for specular highlights.
    pub camera_position: [f32; 4],
    /// Shading selector: 0 wireframe, 1 flat, 2 phong.
    pub shading: u32,
    pub _padding: [u32; 3],
}

impl FrameUniforms {
    pub fn new(camera: &SceneCamera, shading: ShadingMode) -> Self {
        Self {
            light_position: homogeneous(LIGHT_POSITION.into()),
            light_color: homogeneous(LIGHT_COLOR.into()),
            camera_position: homogeneous(camera.eye),
            shading: shading.selector(),
            _padding: [0; 3],
        }
    }
}

fn homogeneous(v: Vector3<f32>) -> [f32; 4] {
    [v.x, v.y, v.z, 1.0]
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix4[i][j];
        }
    }

    result
}
