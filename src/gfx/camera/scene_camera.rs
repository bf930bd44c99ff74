use cgmath::{Matrix4, Vector3};

use super::transforms::{look_at, orthographic, perspective, translate};
use crate::config::SceneConfig;

pub const FOVY_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 10.0;
/// Width of the orthographic view volume in world units.
pub const ORTHO_EXTENT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

/// Camera and projection state shared by every instance in the scene.
///
/// Instances cache `projection * view * base_world`, so any mutation here must
/// be followed by a base transform refresh; [`Scene`](crate::gfx::scene::Scene)
/// does that for all of its camera setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCamera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub projection: Projection,
    width: u32,
    height: u32,
}

impl SceneCamera {
    pub fn new(
        eye: Vector3<f32>,
        target: Vector3<f32>,
        up: Vector3<f32>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            eye,
            target,
            up,
            projection: Projection::default(),
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.eye, config.target, config.up, config.width, config.height)
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        look_at(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let aspect = self.aspect();
        match self.projection {
            Projection::Perspective => perspective(FOVY_DEGREES, aspect, Z_NEAR, Z_FAR),
            Projection::Orthographic => {
                // Fixed-width volume anchored at the origin, re-centered afterwards
                let half_height = ORTHO_EXTENT / 2.0 / aspect;
                orthographic(0.0, ORTHO_EXTENT, 0.0, ORTHO_EXTENT / aspect, Z_NEAR, Z_FAR)
                    * translate(Vector3::new(ORTHO_EXTENT / 2.0, half_height, 0.0))
            }
        }
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Moves the eye by `delta`, keeping the target fixed.
    pub fn pan(&mut self, delta: Vector3<f32>) {
        self.eye += delta;
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    /// Updates the viewport size. Zero dimensions are clamped to one pixel.
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    fn ndc(m: Matrix4<f32>, p: Vector4<f32>) -> (f32, f32) {
        let clip = m * p;
        (clip.x / clip.w, clip.y / clip.w)
    }

    #[test]
    fn test_target_projects_to_center() {
        let mut camera = SceneCamera::default();
        for projection in [Projection::Perspective, Projection::Orthographic] {
            camera.set_projection(projection);
            let (x, y) = ndc(
                camera.build_view_projection_matrix(),
                camera.target.extend(1.0),
            );
            assert!(x.abs() < 1e-5, "{:?}: x = {}", projection, x);
            assert!(y.abs() < 1e-5, "{:?}: y = {}", projection, y);
        }
    }

    #[test]
    fn test_orthographic_spans_two_units() {
        let mut camera = SceneCamera::new(
            Vector3::new(0.0, 0.0, 2.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
            400,
            200,
        );
        camera.set_projection(Projection::Orthographic);

        // One world unit to the right of the target is the right edge
        let (x, _) = ndc(
            camera.build_view_projection_matrix(),
            Vector4::new(1.0, 0.0, 0.0, 1.0),
        );
        assert!((x - 1.0).abs() < 1e-5);

        // Aspect 2:1 means half a unit up is the top edge
        let (_, y) = ndc(
            camera.build_view_projection_matrix(),
            Vector4::new(0.0, 0.5, 0.0, 1.0),
        );
        assert!((y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_pan_moves_eye_only() {
        let mut camera = SceneCamera::default();
        let before = camera.target;
        camera.pan(Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(camera.eye, Vector3::new(-2.0, 1.0, 2.0));
        assert_eq!(camera.target, before);
    }

    #[test]
    fn test_resize_clamps_zero() {
        let mut camera = SceneCamera::default();
        camera.resize_projection(0, 0);
        assert_eq!(camera.viewport(), (1, 1));
        assert_eq!(camera.aspect(), 1.0);
    }
}
