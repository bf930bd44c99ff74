use std::{fmt, path::Path};

use cgmath::Vector3;
use log::info;

use super::pool::{MeshPool, PoolRange};
use crate::gfx::geometry::{load_off, MeshError};

/// The closed set of meshes the scene knows how to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    UnitCube,
    BumpyCube,
    Bunny,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 3] = [ObjectKind::UnitCube, ObjectKind::BumpyCube, ObjectKind::Bunny];

    pub fn file_name(self) -> &'static str {
        match self {
            ObjectKind::UnitCube => "unit_cube_TRIANGLES.off",
            ObjectKind::BumpyCube => "bumpy_cube.off",
            ObjectKind::Bunny => "bunny.off",
        }
    }

    /// Uniform scale bringing the raw mesh to a comparable on-screen size.
    pub fn display_scale(self) -> f32 {
        match self {
            ObjectKind::UnitCube => 0.2,
            ObjectKind::BumpyCube => 0.07,
            ObjectKind::Bunny => 2.5,
        }
    }

    /// Default palette entry for new instances of this kind.
    pub fn palette_index(self) -> usize {
        match self {
            ObjectKind::UnitCube => 9,
            ObjectKind::BumpyCube => 10,
            ObjectKind::Bunny => 11,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::UnitCube => "unit cube",
            ObjectKind::BumpyCube => "bumpy cube",
            ObjectKind::Bunny => "bunny",
        };
        f.write_str(name)
    }
}

/// One loaded mesh: where it lives in the shared pools and its centroid.
///
/// Objects are immutable once registered and are copied into every instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object {
    /// 1-based load order.
    pub id: u32,
    pub kind: ObjectKind,
    pub vertices: PoolRange,
    pub indices: PoolRange,
    /// Mean of the mesh's vertex positions, in object space.
    pub center: Vector3<f32>,
}

/// Loads each [`ObjectKind`] at most once and remembers where it landed.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: Vec<Object>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ObjectKind) -> Option<&Object> {
        self.objects.iter().find(|object| object.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    /// Returns the object for `kind`, loading it into `pool` on first use.
    ///
    /// The file is parsed completely before the pool is touched, so a failed
    /// load leaves both the pool and the registry as they were.
    pub fn ensure_loaded<P: AsRef<Path>>(
        &mut self,
        kind: ObjectKind,
        pool: &mut MeshPool,
        search_dirs: &[P],
    ) -> Result<Object, MeshError> {
        if let Some(object) = self.get(kind) {
            return Ok(*object);
        }

        let mesh = load_off(kind.file_name(), search_dirs)?;
        let center = mesh.center;
        let (vertices, indices) = pool.append(mesh);
        pool.compute_normals_and_barycenters(vertices, indices);

        let object = Object {
            id: self.objects.len() as u32 + 1,
            kind,
            vertices,
            indices,
            center,
        };
        info!(
            "Loaded {}: {} vertices, {} triangles",
            kind,
            vertices.len,
            indices.len / 3
        );
        self.objects.push(object);
        Ok(object)
    }
}
