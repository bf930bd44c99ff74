//! # Object Picking System
//!
//! Picking works on a per-pixel index channel rather than ray casting. Every
//! instance is drawn with its id as the reference value, 0 is left where
//! nothing was drawn, and a click simply reads the value under the cursor.
//!
//! ## How it works
//!
//! 1. **Index pass**: the renderer (or [`IndexBuffer`] on the CPU) writes each
//!    instance id into the pixels it covers, nearest surface winning
//! 2. **Lookup**: [`InstancePicker::pick_at`] reads the id under a window pixel
//! 3. **Session**: [`PickSession`] turns presses, releases and cursor motion
//!    into selection and drag translation on the [`Scene`](crate::gfx::scene::Scene)
//!
//! ## Usage
//!
//! ```no_run
//! use stencilscene::config::SceneConfig;
//! use stencilscene::gfx::picking::{IndexBuffer, InstancePicker};
//! use stencilscene::gfx::scene::{ObjectKind, Scene};
//!
//! let mut scene = Scene::new(&SceneConfig::default());
//! scene.place(ObjectKind::UnitCube).unwrap();
//!
//! let mut index = IndexBuffer::new(640, 480);
//! index.render(&scene);
//! if let Some(id) = index.pick_at(320, 240) {
//!     println!("Selected instance: {}", id);
//! }
//! ```

pub mod index_buffer;
pub mod session;

pub use index_buffer::IndexBuffer;
pub use session::{PickPhase, PickSession};

use crate::gfx::scene::InstanceId;

/// Reads back the instance drawn at a window pixel.
///
/// Coordinates are in window pixels with the origin at the top-left corner.
/// Pixels where nothing was drawn, or outside the viewport, yield `None`.
pub trait InstancePicker {
    fn pick_at(&self, x: u32, y: u32) -> Option<InstanceId>;
}
