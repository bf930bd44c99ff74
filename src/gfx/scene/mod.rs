//! # Scene Management Module
//!
//! Shared mesh pools, the registry of loaded objects, placed instances and the
//! [`Scene`] aggregate that ties them to the camera and the current selection.
//!
//! ## Key Components
//!
//! - [`Scene`] - Owns everything and is the only place state is mutated
//! - [`MeshPool`] - Positions, normals, barycenters and indices of every loaded mesh
//! - [`ObjectRegistry`] - Loads each [`ObjectKind`] once and records its pool ranges
//! - [`Instance`] - A placed copy of an object with its own transforms and color
//!
//! ## Usage
//!
//! ```no_run
//! use stencilscene::config::SceneConfig;
//! use stencilscene::gfx::scene::{Edit, ObjectKind, ScaleStep, Scene};
//!
//! let mut scene = Scene::new(&SceneConfig::default());
//! let cube = scene.place(ObjectKind::UnitCube).unwrap();
//! scene.select(cube);
//! scene.edit_selected(Edit::Scale(ScaleStep::Up));
//! ```

pub mod instance;
pub mod object;
pub mod palette;
pub mod pool;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use instance::{Edit, Instance, InstanceId, RotateStep, ScaleStep};
pub use object::{Object, ObjectKind, ObjectRegistry};
pub use pool::{MeshPool, PoolRange};
pub use scene::Scene;
pub use vertex::Vertex3D;
