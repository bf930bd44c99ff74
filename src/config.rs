//! Scene configuration.
//!
//! Every value here has a default matching the interactive application; tests
//! and demos override mesh search locations, viewport size and the jitter seed.

use std::path::PathBuf;

use cgmath::Vector3;

/// Fixed in-process settings used to build a [`Scene`](crate::gfx::scene::Scene).
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Directories searched, in order, for mesh files.
    pub mesh_dirs: Vec<PathBuf>,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    /// Half-width of the random X/Y offset applied to newly placed instances.
    pub jitter_extent: f32,
    /// Seed for placement jitter. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            mesh_dirs: vec![
                PathBuf::from("../../data"),
                PathBuf::from("../data"),
                PathBuf::from("data"),
            ],
            width: 640,
            height: 480,
            eye: Vector3::new(-1.0, 1.0, 2.0),
            target: Vector3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            jitter_extent: 0.75,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.mesh_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn camera(mut self, eye: Vector3<f32>, target: Vector3<f32>, up: Vector3<f32>) -> Self {
        self.eye = eye;
        self.target = target;
        self.up = up;
        self
    }

    pub fn jitter(mut self, extent: f32) -> Self {
        self.jitter_extent = extent.abs();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
