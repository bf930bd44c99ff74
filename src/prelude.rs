//! # Prelude
//!
//! Commonly used types in one import.
//!
//! ```no_run
//! use stencilscene::prelude::*;
//!
//! let mut controller = stencilscene::default();
//! controller.insert(ObjectKind::Bunny);
//! for call in controller.scene().draw_calls() {
//!     println!("{} -> {:?}", call.instance_id, call.indices);
//! }
//! ```

// Re-export core application types
pub use crate::app::{EditMode, SceneController};
pub use crate::config::SceneConfig;
pub use crate::default;

// Re-export graphics and scene types
pub use crate::gfx::camera::{Projection, SceneCamera};
pub use crate::gfx::geometry::MeshError;
pub use crate::gfx::picking::{IndexBuffer, InstancePicker, PickPhase, PickSession};
pub use crate::gfx::rendering::{DrawCall, PoolUpload, ShadingMode};
pub use crate::gfx::scene::{
    Edit, Instance, InstanceId, ObjectKind, RotateStep, ScaleStep, Scene,
};

// Re-export commonly used external types
pub use cgmath::{Matrix4, Vector3};
