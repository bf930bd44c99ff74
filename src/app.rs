//! Input handling for the interactive scene.
//!
//! [`SceneController`] owns the [`Scene`] and the current [`PickSession`] and
//! maps decoded window input onto scene operations. Window creation and GPU
//! submission stay with the host event loop, which forwards events here and
//! reads back draw calls.

use cgmath::Vector3;
use log::{debug, error, info};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::{
    config::SceneConfig,
    gfx::{
        camera::Projection,
        picking::{InstancePicker, PickSession},
        rendering::ShadingMode,
        scene::{palette, Edit, ObjectKind, RotateStep, ScaleStep, Scene},
    },
};

/// What number keys and the left mouse button do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// `1`-`3` place new instances.
    #[default]
    Insertion,
    /// Clicks pick and drag; number keys recolor; `Z`/`X`/`R`/`T` edit.
    Transform,
}

pub struct SceneController {
    scene: Scene,
    session: PickSession,
    mode: EditMode,
}

impl SceneController {
    pub fn new(config: &SceneConfig) -> Self {
        Self::with_scene(Scene::new(config))
    }

    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene,
            session: PickSession::new(),
            mode: EditMode::default(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn session(&self) -> &PickSession {
        &self.session
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Routes a winit window event. Returns `true` if it was consumed.
    pub fn window_event(&mut self, event: &WindowEvent, picker: &dyn InstancePicker) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Released,
                        ..
                    },
                ..
            } => self.key_released(*key_code),
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_input(*button, *state, picker)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
                true
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.resized(*width, *height);
                true
            }
            _ => false,
        }
    }

    /// Actions fire on key release. Returns `true` if the key is bound.
    pub fn key_released(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::KeyI => self.set_mode(EditMode::Insertion),
            KeyCode::KeyO => {
                self.set_mode(EditMode::Transform);
                self.clear_selection();
            }
            KeyCode::KeyW => self.scene.set_shading(ShadingMode::Wireframe),
            KeyCode::KeyF => self.scene.set_shading(ShadingMode::Flat),
            KeyCode::KeyP => self.scene.set_shading(ShadingMode::Phong),
            KeyCode::KeyZ => self.edit(Edit::Scale(ScaleStep::Up)),
            KeyCode::KeyX => self.edit(Edit::Scale(ScaleStep::Down)),
            KeyCode::KeyR => self.edit(Edit::Rotate(RotateStep::Clockwise)),
            KeyCode::KeyT => self.edit(Edit::Rotate(RotateStep::CounterClockwise)),
            KeyCode::ArrowLeft => self.scene.pan_camera(Vector3::new(-1.0, 0.0, 0.0)),
            KeyCode::ArrowRight => self.scene.pan_camera(Vector3::new(1.0, 0.0, 0.0)),
            KeyCode::ArrowUp => self.scene.pan_camera(Vector3::new(0.0, 1.0, 0.0)),
            KeyCode::ArrowDown => self.scene.pan_camera(Vector3::new(0.0, -1.0, 0.0)),
            KeyCode::KeyK => self.scene.set_projection(Projection::Perspective),
            KeyCode::KeyL => self.scene.set_projection(Projection::Orthographic),
            other => match digit(other) {
                Some(n) => self.number_key(n),
                None => return false,
            },
        }
        true
    }

    /// Left button only, and only in transform mode.
    pub fn mouse_input(
        &mut self,
        button: MouseButton,
        state: ElementState,
        picker: &dyn InstancePicker,
    ) -> bool {
        if button != MouseButton::Left || self.mode != EditMode::Transform {
            return false;
        }
        match state {
            ElementState::Pressed => {
                if let Some(id) = self.session.press(&mut self.scene, picker) {
                    info!("Selected instance {}", id);
                }
            }
            ElementState::Released => self.session.release(&mut self.scene),
        }
        true
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.session.cursor_moved(&mut self.scene, x, y);
    }

    pub fn resized(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
    }

    /// Ends any pick session and drops the selection with its color override.
    pub fn clear_selection(&mut self) {
        self.session.reset();
        self.scene.clear_selection();
    }

    /// Places `kind`, logging load failures instead of propagating them.
    pub fn insert(&mut self, kind: ObjectKind) {
        if let Err(err) = self.scene.place(kind) {
            error!("Could not place {}: {}", kind, err);
        }
    }

    fn set_mode(&mut self, mode: EditMode) {
        debug!("Edit mode {:?}", mode);
        self.mode = mode;
        self.session.reset();
    }

    fn edit(&mut self, edit: Edit) {
        if self.mode == EditMode::Transform {
            self.scene.edit_selected(edit);
        }
    }

    fn number_key(&mut self, n: usize) {
        match self.mode {
            EditMode::Insertion => {
                if let Some(kind) = n.checked_sub(1).and_then(|i| ObjectKind::ALL.get(i).copied()) {
                    self.insert(kind);
                }
            }
            EditMode::Transform => {
                // Number keys only reach the user-selectable palette entries
                let index = n - 1;
                if index < palette::USER_COLORS {
                    self.scene.recolor_selected(index);
                }
            }
        }
    }
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}

fn digit(key: KeyCode) -> Option<usize> {
    let n = match key {
        KeyCode::Digit1 => 1,
        KeyCode::Digit2 => 2,
        KeyCode::Digit3 => 3,
        KeyCode::Digit4 => 4,
        KeyCode::Digit5 => 5,
        KeyCode::Digit6 => 6,
        KeyCode::Digit7 => 7,
        KeyCode::Digit8 => 8,
        KeyCode::Digit9 => 9,
        _ => return None,
    };
    Some(n)
}
