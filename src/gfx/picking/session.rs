use cgmath::{Matrix4, SquareMatrix, Vector2, Vector3, Vector4};
use log::debug;

use super::InstancePicker;
use crate::gfx::scene::{Edit, InstanceId, Scene};

/// Where a click-drag-click selection currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PickPhase {
    #[default]
    Idle,
    /// Button held on a picked instance; cursor motion translates it.
    Dragging { anchor: Vector2<f32> },
    /// Button released; the instance stays selected for keyboard edits.
    Holding,
    /// Second press seen; the next release ends the selection.
    Committing,
}

/// Drives selection and drag translation from raw pointer events.
///
/// A session starts when a press lands on an instance, and ends with the
/// release that follows the next press.
#[derive(Debug, Clone, Default)]
pub struct PickSession {
    phase: PickPhase,
    cursor: (f64, f64),
    total_view: Option<Matrix4<f32>>,
}

impl PickSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PickPhase {
        self.phase
    }

    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    /// Sets the matrix whose inverse maps NDC back to world for drag deltas.
    /// Without one, NDC is used as world directly.
    pub fn set_total_view(&mut self, total_view: Option<Matrix4<f32>>) {
        self.total_view = total_view;
    }

    /// Aborts the session without touching the scene.
    pub fn reset(&mut self) {
        self.phase = PickPhase::Idle;
    }

    /// Handles a left-button press at the last known cursor position.
    ///
    /// Returns the newly selected instance, if the press started a session.
    pub fn press(&mut self, scene: &mut Scene, picker: &dyn InstancePicker) -> Option<InstanceId> {
        match self.phase {
            PickPhase::Idle => {
                let (x, y) = self.cursor_pixel();
                let id = picker.pick_at(x, y)?;
                if !scene.select(id) {
                    return None;
                }
                self.phase = PickPhase::Dragging {
                    anchor: self.cursor_world(scene),
                };
                debug!("Picked instance {} at ({}, {})", id, x, y);
                Some(id)
            }
            PickPhase::Holding => {
                self.phase = PickPhase::Committing;
                None
            }
            PickPhase::Dragging { .. } | PickPhase::Committing => None,
        }
    }

    pub fn release(&mut self, scene: &mut Scene) {
        match self.phase {
            PickPhase::Dragging { .. } => self.phase = PickPhase::Holding,
            PickPhase::Committing => {
                debug!("Releasing selection {:?}", scene.selected());
                scene.clear_selection();
                self.phase = PickPhase::Idle;
            }
            PickPhase::Idle | PickPhase::Holding => {}
        }
    }

    /// Records the cursor and, while dragging, moves the selection by the
    /// world-space distance since the previous position.
    pub fn cursor_moved(&mut self, scene: &mut Scene, x: f64, y: f64) {
        self.cursor = (x, y);
        let PickPhase::Dragging { anchor } = self.phase else {
            return;
        };

        let position = self.cursor_world(scene);
        let delta = position - anchor;
        scene.edit_selected(Edit::Translate(Vector3::new(delta.x, delta.y, 0.0)));
        self.phase = PickPhase::Dragging { anchor: position };
    }

    fn cursor_pixel(&self) -> (u32, u32) {
        (self.cursor.0.max(0.0) as u32, self.cursor.1.max(0.0) as u32)
    }

    fn cursor_world(&self, scene: &Scene) -> Vector2<f32> {
        let (width, height) = scene.camera().viewport();
        let ndc = cursor_to_ndc(self.cursor.0, self.cursor.1, width, height);
        let point = Vector4::new(ndc.x, ndc.y, 0.0, 1.0);

        match self.total_view.and_then(|view| view.invert()) {
            Some(inverse) => {
                let world = inverse * point;
                Vector2::new(world.x, world.y)
            }
            None => ndc,
        }
    }
}

/// Window pixel to normalized device coordinates, flipping Y so +1 is the top.
pub fn cursor_to_ndc(x: f64, y: f64, width: u32, height: u32) -> Vector2<f32> {
    let width = width.max(1) as f64;
    let height = height.max(1) as f64;
    Vector2::new(
        (x / width * 2.0 - 1.0) as f32,
        ((height - 1.0 - y) / height * 2.0 - 1.0) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::transforms::{assert_matrix_eq, translate};
    use crate::gfx::scene::ObjectKind;
    use crate::test_support::{config_for, mesh_dir, TempDir};

    /// Reports the same instance under every pixel.
    struct Always(Option<InstanceId>);

    impl InstancePicker for Always {
        fn pick_at(&self, _x: u32, _y: u32) -> Option<InstanceId> {
            self.0
        }
    }

    fn scene_with_cube(dir: &TempDir) -> (Scene, InstanceId) {
        let mut scene = Scene::new(&config_for(dir).size(200, 200));
        let id = scene.place(ObjectKind::UnitCube).unwrap();
        (scene, id)
    }

    #[test]
    fn test_cursor_to_ndc() {
        let ndc = cursor_to_ndc(100.0, 99.0, 200, 200);
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        let ndc = cursor_to_ndc(0.0, 199.0, 200, 200);
        assert_eq!((ndc.x, ndc.y), (-1.0, -1.0));
    }

    #[test]
    fn test_miss_stays_idle() {
        let dir = mesh_dir();
        let (mut scene, _) = scene_with_cube(&dir);
        let mut session = PickSession::new();

        assert_eq!(session.press(&mut scene, &Always(None)), None);
        assert_eq!(session.phase(), PickPhase::Idle);
        assert_eq!(scene.selected(), None);

        session.release(&mut scene);
        assert_eq!(session.phase(), PickPhase::Idle);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let dir = mesh_dir();
        let (mut scene, _) = scene_with_cube(&dir);
        let mut session = PickSession::new();

        let ghost = Always(InstanceId::new(42));
        assert_eq!(session.press(&mut scene, &ghost), None);
        assert_eq!(session.phase(), PickPhase::Idle);
    }

    #[test]
    fn test_drag_deltas_accumulate() {
        let dir = mesh_dir();
        let (mut scene, cube) = scene_with_cube(&dir);
        let mut session = PickSession::new();

        session.cursor_moved(&mut scene, 100.0, 99.0);
        assert_eq!(session.press(&mut scene, &Always(Some(cube))), Some(cube));
        session.cursor_moved(&mut scene, 120.0, 99.0);
        session.cursor_moved(&mut scene, 120.0, 69.0);
        session.release(&mut scene);

        assert_eq!(session.phase(), PickPhase::Holding);
        assert_eq!(scene.selected(), Some(cube));
        let edits = scene.instance(cube).unwrap().world_edits();
        assert_matrix_eq(edits, translate(Vector3::new(0.2, 0.3, 0.0)));
    }

    #[test]
    fn test_motion_outside_drag_is_ignored() {
        let dir = mesh_dir();
        let (mut scene, cube) = scene_with_cube(&dir);
        let before = scene.instance(cube).unwrap().clone();
        let mut session = PickSession::new();

        session.cursor_moved(&mut scene, 10.0, 10.0);
        session.cursor_moved(&mut scene, 150.0, 30.0);

        assert_eq!(scene.instance(cube).unwrap(), &before);
        assert_eq!(session.cursor(), (150.0, 30.0));
    }

    #[test]
    fn test_second_click_commits() {
        let dir = mesh_dir();
        let (mut scene, cube) = scene_with_cube(&dir);
        let picker = Always(Some(cube));
        let mut session = PickSession::new();

        session.press(&mut scene, &picker);
        session.release(&mut scene);
        scene.recolor_selected(2);
        assert!(scene.color_overridden());

        // Motion while holding does not drag
        let before = scene.instance(cube).unwrap().world_edits();
        session.cursor_moved(&mut scene, 30.0, 30.0);
        assert_eq!(scene.instance(cube).unwrap().world_edits(), before);

        assert_eq!(session.press(&mut scene, &picker), None);
        assert_eq!(session.phase(), PickPhase::Committing);
        assert_eq!(scene.selected(), Some(cube));

        session.release(&mut scene);
        assert_eq!(session.phase(), PickPhase::Idle);
        assert_eq!(scene.selected(), None);
        assert!(!scene.color_overridden());
    }

    #[test]
    fn test_total_view_maps_back_to_world() {
        let dir = mesh_dir();
        let (mut scene, cube) = scene_with_cube(&dir);
        let mut session = PickSession::new();
        // Halving in NDC doubles the world distance
        session.set_total_view(Some(Matrix4::from_scale(0.5)));

        session.cursor_moved(&mut scene, 100.0, 99.0);
        session.press(&mut scene, &Always(Some(cube)));
        session.cursor_moved(&mut scene, 120.0, 99.0);

        let edits = scene.instance(cube).unwrap().world_edits();
        assert_matrix_eq(edits, translate(Vector3::new(0.4, 0.0, 0.0)));
    }

    #[test]
    fn test_degenerate_total_view_falls_back_to_ndc() {
        let dir = mesh_dir();
        let (mut scene, cube) = scene_with_cube(&dir);
        let mut session = PickSession::new();
        session.set_total_view(Some(Matrix4::from_scale(0.0)));

        session.cursor_moved(&mut scene, 100.0, 99.0);
        session.press(&mut scene, &Always(Some(cube)));
        session.cursor_moved(&mut scene, 120.0, 99.0);

        let edits = scene.instance(cube).unwrap().world_edits();
        assert_matrix_eq(edits, translate(Vector3::new(0.2, 0.0, 0.0)));
    }

    #[test]
    fn test_reset_aborts_without_clearing() {
        let dir = mesh_dir();
        let (mut scene, cube) = scene_with_cube(&dir);
        let mut session = PickSession::new();

        session.press(&mut scene, &Always(Some(cube)));
        session.reset();

        assert_eq!(session.phase(), PickPhase::Idle);
        assert_eq!(scene.selected(), Some(cube));
    }
}
