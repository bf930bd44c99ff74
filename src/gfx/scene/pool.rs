use std::ops::Range;

use cgmath::{Vector3, Zero};

use super::vertex::Vertex3D;
use crate::gfx::geometry::{compute_normals_and_barycenters, OffMesh};

/// An `{offset, length}` view into one of the shared pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolRange {
    pub offset: u32,
    pub len: u32,
}

impl PoolRange {
    pub fn new(offset: usize, len: usize) -> Self {
        Self {
            offset: offset as u32,
            len: len as u32,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.offset as usize..(self.offset + self.len) as usize
    }

    /// The same view as a `u32` range, the form draw calls use.
    pub fn index_range(&self) -> Range<u32> {
        self.offset..self.offset + self.len
    }
}

/// Append-only vertex, normal, barycenter and index storage shared by every
/// loaded object.
///
/// Positions never change once appended. Normals and barycenters run parallel
/// to positions and are written once per object, right after it is appended.
#[derive(Debug, Default, Clone)]
pub struct MeshPool {
    positions: Vec<Vector3<f32>>,
    normals: Vec<Vector3<f32>>,
    barycenters: Vec<Vector3<f32>>,
    indices: Vec<u32>,
}

impl MeshPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn positions(&self) -> &[Vector3<f32>] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    pub fn barycenters(&self) -> &[Vector3<f32>] {
        &self.barycenters
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Commits a parsed mesh, rebasing its file-local ids onto the pool.
    ///
    /// Returns the vertex and index ranges the mesh now occupies. Normals for
    /// the new range are zero until [`Self::compute_normals_and_barycenters`]
    /// runs.
    pub fn append(&mut self, mesh: OffMesh) -> (PoolRange, PoolRange) {
        let vertex_offset = self.positions.len();
        let index_offset = self.indices.len();
        let base = vertex_offset as u32;

        let vertex_count = mesh.positions.len();
        self.positions.extend(mesh.positions);
        self.normals.resize(self.positions.len(), Vector3::zero());
        self.barycenters.resize(self.positions.len(), Vector3::zero());
        self.indices.extend(mesh.indices.iter().map(|id| id + base));

        (
            PoolRange::new(vertex_offset, vertex_count),
            PoolRange::new(index_offset, self.indices.len() - index_offset),
        )
    }

    /// Runs normal synthesis over one object's ranges.
    pub fn compute_normals_and_barycenters(&mut self, vertices: PoolRange, indices: PoolRange) {
        compute_normals_and_barycenters(
            &self.positions,
            &self.indices[indices.range()],
            vertices.range(),
            &mut self.normals,
            &mut self.barycenters,
        );
    }

    /// Interleaved snapshot of every vertex, ready for upload.
    pub fn vertices(&self) -> Vec<Vertex3D> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(&position, &normal)| Vertex3D::new(position, normal))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::parse_off;
    use crate::test_support::{CUBE_OFF, TETRA_OFF};
    use cgmath::InnerSpace;

    #[test]
    fn test_append_rebases_ids() {
        let mut pool = MeshPool::new();
        let (cube_vertices, cube_indices) = pool.append(parse_off(CUBE_OFF).unwrap());
        let (tetra_vertices, tetra_indices) = pool.append(parse_off(TETRA_OFF).unwrap());

        assert_eq!(cube_vertices, PoolRange { offset: 0, len: 8 });
        assert_eq!(cube_indices, PoolRange { offset: 0, len: 36 });
        assert_eq!(tetra_vertices, PoolRange { offset: 8, len: 4 });
        assert_eq!(tetra_indices, PoolRange { offset: 36, len: 12 });

        assert_eq!(&pool.indices()[36..39], &[8, 10, 9]);
        assert!(pool.indices().iter().all(|&id| (id as usize) < pool.vertex_count()));
        assert_eq!(pool.normals().len(), pool.vertex_count());
        assert_eq!(pool.barycenters().len(), pool.vertex_count());
    }

    #[test]
    fn test_second_object_keeps_first_normals() {
        let mut pool = MeshPool::new();
        let (v0, i0) = pool.append(parse_off(CUBE_OFF).unwrap());
        pool.compute_normals_and_barycenters(v0, i0);
        let cube_normals = pool.normals().to_vec();

        let (v1, i1) = pool.append(parse_off(TETRA_OFF).unwrap());
        pool.compute_normals_and_barycenters(v1, i1);

        assert_eq!(&pool.normals()[..8], &cube_normals[..]);
        for normal in &pool.normals()[8..] {
            assert!((normal.magnitude() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_ranges() {
        let range = PoolRange::new(36, 12);
        assert_eq!(range.range(), 36..48);
        assert_eq!(range.index_range(), 36u32..48u32);
    }
}
