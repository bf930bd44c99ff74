use std::{fmt, num::NonZeroU32};

use cgmath::{Matrix4, SquareMatrix, Vector3};

use super::object::Object;
use crate::gfx::camera::transforms::{about_pivot, rotate_z, scale, translate};

/// Identifier of a placed instance. Ids start at 1 and are never reused; 0 is
/// reserved for "no instance" in the picking index channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(NonZeroU32);

impl InstanceId {
    pub const FIRST: InstanceId = InstanceId(NonZeroU32::MIN);

    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleStep {
    Up,
    Down,
}

impl ScaleStep {
    pub fn factor(self) -> f32 {
        match self {
            ScaleStep::Up => 1.25,
            ScaleStep::Down => 0.75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateStep {
    Clockwise,
    CounterClockwise,
}

impl RotateStep {
    /// Rotation about Z, in degrees.
    pub fn degrees(self) -> f32 {
        match self {
            RotateStep::Clockwise => 10.0,
            RotateStep::CounterClockwise => -10.0,
        }
    }
}

/// A user edit applied to an instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    Scale(ScaleStep),
    Rotate(RotateStep),
    Translate(Vector3<f32>),
}

impl Edit {
    /// The matrix to left-multiply into the instance accumulators.
    ///
    /// Scale and rotate pivot through `center`, mapped onto `target`; translate
    /// is applied as is.
    pub fn matrix(&self, center: Vector3<f32>, target: Vector3<f32>) -> Matrix4<f32> {
        match *self {
            Edit::Scale(step) => about_pivot(scale(step.factor()), center, target),
            Edit::Rotate(step) => about_pivot(rotate_z(step.degrees()), center, target),
            Edit::Translate(offset) => translate(offset),
        }
    }
}

/// A placed copy of an [`Object`].
///
/// The base transforms come from placement and the camera. Every user edit is
/// folded into two separate accumulators, so
/// `clip = clip_edits * base_clip` and `world = world_edits * base_world`.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    id: InstanceId,
    object: Object,
    base_clip: Matrix4<f32>,
    base_world: Matrix4<f32>,
    clip_edits: Matrix4<f32>,
    world_edits: Matrix4<f32>,
    pub color: Vector3<f32>,
}

impl Instance {
    pub fn new(
        id: InstanceId,
        object: Object,
        base_world: Matrix4<f32>,
        base_clip: Matrix4<f32>,
        color: Vector3<f32>,
    ) -> Self {
        Self {
            id,
            object,
            base_clip,
            base_world,
            clip_edits: Matrix4::identity(),
            world_edits: Matrix4::identity(),
            color,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn base_world(&self) -> Matrix4<f32> {
        self.base_world
    }

    pub fn base_clip(&self) -> Matrix4<f32> {
        self.base_clip
    }

    pub fn clip_edits(&self) -> Matrix4<f32> {
        self.clip_edits
    }

    pub fn world_edits(&self) -> Matrix4<f32> {
        self.world_edits
    }

    /// Effective object-to-clip transform.
    pub fn clip_transform(&self) -> Matrix4<f32> {
        self.clip_edits * self.base_clip
    }

    /// Effective object-to-world transform.
    pub fn world_transform(&self) -> Matrix4<f32> {
        self.world_edits * self.base_world
    }

    /// Left-multiplies both accumulators by `matrix`, so the newest edit
    /// takes effect after all earlier ones.
    pub fn apply_rigid_transform(&mut self, matrix: Matrix4<f32>) {
        self.clip_edits = matrix * self.clip_edits;
        self.world_edits = matrix * self.world_edits;
    }

    /// Replaces the camera-dependent base; edits and `base_world` are kept.
    pub fn set_base_clip(&mut self, base_clip: Matrix4<f32>) {
        self.base_clip = base_clip;
    }
}
