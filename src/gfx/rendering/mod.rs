//! Rendering boundary
//!
//! The scene does not talk to the GPU itself. It produces draw calls, frame
//! uniforms and pool snapshots in the shape a wgpu renderer consumes.

pub mod draw;

// Re-export main types
pub use draw::{DrawCall, InstanceUniform, PoolUpload, ShadingMode};
