// src/lib.rs
//! Stencil Scene
//!
//! Scene composition and object picking for interactive mesh editing: OFF
//! meshes are loaded once into shared pools, placed as independently
//! transformed instances, and picked back through a per-pixel index channel.

pub mod app;
pub mod config;
pub mod gfx;
pub mod prelude;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use app::SceneController;

/// Creates a controller with the default configuration
pub fn default() -> SceneController {
    SceneController::default()
}
