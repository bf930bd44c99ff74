//! # Graphics Module
//!
//! Everything between mesh files on disk and the draw calls a GPU renderer
//! consumes.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - OFF loading and normal synthesis
//! - **Scene Management** ([`scene`]) - Shared pools, objects, instances and the [`Scene`] aggregate
//! - **Camera System** ([`camera`]) - Look-at camera, projections and transform helpers
//! - **Picking** ([`picking`]) - Per-pixel instance ids and the click-drag session
//! - **Rendering Boundary** ([`rendering`]) - Draw calls, uniforms and pool uploads
//!
//! [`Scene`]: scene::Scene

pub mod camera;
pub mod geometry;
pub mod picking;
pub mod rendering;
pub mod scene;

// Re-export commonly used types
pub use camera::SceneCamera;
pub use scene::Scene;
