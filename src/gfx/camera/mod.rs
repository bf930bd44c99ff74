pub mod camera_utils;
pub mod scene_camera;
pub mod transforms;

// Re-export main types
pub use camera_utils::{convert_matrix4_to_array, FrameUniforms};
pub use scene_camera::{Projection, SceneCamera};
