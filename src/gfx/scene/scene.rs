use std::path::PathBuf;

use cgmath::{Vector3, Zero};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    instance::{Edit, Instance, InstanceId},
    object::{Object, ObjectKind, ObjectRegistry},
    palette,
    pool::MeshPool,
};
use crate::{
    config::SceneConfig,
    gfx::{
        camera::{
            transforms::{scale, translate},
            FrameUniforms, Projection, SceneCamera,
        },
        geometry::MeshError,
        rendering::{DrawCall, PoolUpload, ShadingMode},
    },
};

/// Granularity of the placement jitter.
const JITTER_STEP: f32 = 0.01;

/// The whole scene: shared pools, loaded objects, placed instances, camera and
/// selection.
///
/// All state lives here and is mutated through `&mut self`, so a single owner
/// (normally [`SceneController`](crate::app::SceneController)) serializes every
/// change between frames.
pub struct Scene {
    camera: SceneCamera,
    pool: MeshPool,
    registry: ObjectRegistry,
    instances: Vec<Instance>,
    selected: Option<InstanceId>,
    color_overridden: bool,
    shading: ShadingMode,
    mesh_dirs: Vec<PathBuf>,
    jitter_extent: f32,
    rng: StdRng,
    next_id: InstanceId,
    pools_dirty: bool,
    attributes_bound: bool,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            camera: SceneCamera::from_config(config),
            pool: MeshPool::new(),
            registry: ObjectRegistry::new(),
            instances: Vec::new(),
            selected: None,
            color_overridden: false,
            shading: ShadingMode::default(),
            mesh_dirs: config.mesh_dirs.clone(),
            jitter_extent: config.jitter_extent,
            rng,
            next_id: InstanceId::FIRST,
            pools_dirty: false,
            attributes_bound: false,
        }
    }

    pub fn camera(&self) -> &SceneCamera {
        &self.camera
    }

    pub fn pool(&self) -> &MeshPool {
        &self.pool
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn instance(&self, id: InstanceId) -> Option<&Instance> {
        self.instances.iter().find(|instance| instance.id() == id)
    }

    fn instance_mut(&mut self, id: InstanceId) -> Option<&mut Instance> {
        self.instances.iter_mut().find(|instance| instance.id() == id)
    }

    /// Loads `kind` into the shared pools if it is not there yet.
    pub fn ensure_loaded(&mut self, kind: ObjectKind) -> Result<Object, MeshError> {
        let loaded_before = self.registry.len();
        let object = self
            .registry
            .ensure_loaded(kind, &mut self.pool, &self.mesh_dirs)?;
        if self.registry.len() != loaded_before {
            self.pools_dirty = true;
        }
        Ok(object)
    }

    /// Places a new instance of `kind` near the camera target.
    ///
    /// The base world transform scales the mesh, moves its center onto the
    /// target and adds a small random X/Y offset so repeated placements do not
    /// overlap exactly.
    pub fn place(&mut self, kind: ObjectKind) -> Result<InstanceId, MeshError> {
        let object = self.ensure_loaded(kind)?;

        let base_world = translate(self.jitter())
            * translate(self.camera.target - object.center)
            * scale(kind.display_scale());
        let base_clip = self.camera.build_view_projection_matrix() * base_world;
        let color = palette::PALETTE[kind.palette_index()].into();

        let id = self.next_id;
        self.next_id = id.next();
        self.instances
            .push(Instance::new(id, object, base_world, base_clip, color));

        info!("Placed {} as instance {}", kind, id);
        Ok(id)
    }

    fn jitter(&mut self) -> Vector3<f32> {
        if self.jitter_extent <= 0.0 {
            return Vector3::zero();
        }
        let steps = (self.jitter_extent * 2.0 / JITTER_STEP).round() as u32;
        let x = self.rng.random_range(0..=steps) as f32 * JITTER_STEP - self.jitter_extent;
        let y = self.rng.random_range(0..=steps) as f32 * JITTER_STEP - self.jitter_extent;
        Vector3::new(x, y, 0.0)
    }

    pub fn selected(&self) -> Option<InstanceId> {
        self.selected
    }

    /// Whether the user recolored the current selection, which suppresses
    /// the highlight color.
    pub fn color_overridden(&self) -> bool {
        self.color_overridden
    }

    /// Selects `id` if such an instance exists. Moving the selection to a
    /// different instance brings the highlight back.
    pub fn select(&mut self, id: InstanceId) -> bool {
        if self.instance(id).is_none() {
            debug!("Ignoring selection of unknown instance {}", id);
            return false;
        }
        if self.selected != Some(id) {
            self.color_overridden = false;
        }
        self.selected = Some(id);
        true
    }

    /// Drops the selection and its color override. An in-flight
    /// [`PickSession`](crate::gfx::picking::PickSession) is not touched; use
    /// [`SceneController::clear_selection`](crate::app::SceneController::clear_selection)
    /// to end both together.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.color_overridden = false;
    }

    /// Recolors `id` from the palette. Unknown ids and palette indices are ignored.
    ///
    /// Only recoloring the selected instance suppresses its highlight.
    pub fn set_color(&mut self, id: InstanceId, palette_index: usize) -> bool {
        let Some(color) = palette::color(palette_index) else {
            debug!("Ignoring out-of-range palette index {}", palette_index);
            return false;
        };
        let Some(instance) = self.instance_mut(id) else {
            return false;
        };
        instance.color = color;
        if self.selected == Some(id) {
            self.color_overridden = true;
        }
        true
    }

    pub fn recolor_selected(&mut self, palette_index: usize) -> bool {
        match self.selected {
            Some(id) => self.set_color(id, palette_index),
            None => {
                debug!("Recolor ignored: nothing selected");
                false
            }
        }
    }

    pub fn apply_rigid_transform(&mut self, id: InstanceId, matrix: cgmath::Matrix4<f32>) -> bool {
        match self.instance_mut(id) {
            Some(instance) => {
                instance.apply_rigid_transform(matrix);
                true
            }
            None => false,
        }
    }

    /// Applies `edit` to `id`, pivoting scale and rotation around the
    /// instance's object center.
    pub fn apply_edit(&mut self, id: InstanceId, edit: Edit) -> bool {
        let target = self.camera.target;
        let Some(instance) = self.instance_mut(id) else {
            return false;
        };
        let matrix = edit.matrix(instance.object().center, target);
        instance.apply_rigid_transform(matrix);
        true
    }

    pub fn edit_selected(&mut self, edit: Edit) -> bool {
        match self.selected {
            Some(id) => self.apply_edit(id, edit),
            None => {
                debug!("{:?} ignored: nothing selected", edit);
                false
            }
        }
    }

    pub fn pan_camera(&mut self, delta: Vector3<f32>) {
        self.camera.pan(delta);
        self.recompute_all_base_transforms();
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.camera.set_projection(projection);
        self.recompute_all_base_transforms();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize_projection(width, height);
        self.recompute_all_base_transforms();
    }

    /// Rebuilds every instance's clip base from its world base and the
    /// current camera. World bases and edit accumulators are untouched.
    pub fn recompute_all_base_transforms(&mut self) {
        let view_proj = self.camera.build_view_projection_matrix();
        for instance in &mut self.instances {
            let base_clip = view_proj * instance.base_world();
            instance.set_base_clip(base_clip);
        }
    }

    pub fn shading(&self) -> ShadingMode {
        self.shading
    }

    pub fn set_shading(&mut self, shading: ShadingMode) {
        self.shading = shading;
    }

    /// One draw call per instance, in placement order.
    pub fn draw_calls(&self) -> Vec<DrawCall> {
        self.instances
            .iter()
            .map(|instance| {
                let highlighted =
                    self.selected == Some(instance.id()) && !self.color_overridden;
                DrawCall {
                    instance_id: instance.id(),
                    clip: instance.clip_transform(),
                    world: instance.world_transform(),
                    color: if highlighted {
                        palette::highlight()
                    } else {
                        instance.color
                    },
                    shading: self.shading,
                    indices: instance.object().indices.index_range(),
                }
            })
            .collect()
    }

    pub fn frame_uniforms(&self) -> FrameUniforms {
        FrameUniforms::new(&self.camera, self.shading)
    }

    /// Returns a pool snapshot if a load changed the pools since the last call.
    ///
    /// `bind_attributes` is set on the first snapshot only.
    pub fn take_pool_upload(&mut self) -> Option<PoolUpload> {
        if !self.pools_dirty {
            return None;
        }
        self.pools_dirty = false;

        let bind_attributes = !self.attributes_bound;
        self.attributes_bound = true;
        Some(PoolUpload {
            vertices: self.pool.vertices(),
            indices: self.pool.indices().to_vec(),
            bind_attributes,
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}
