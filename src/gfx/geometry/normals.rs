use std::ops::Range;

use cgmath::{InnerSpace, Vector3, Zero};

/// Writes smooth normals and barycenters for one object's slice of the pools.
///
/// `indices` is the object's index range (global vertex ids) and `vertices` its
/// vertex range. Only entries inside `vertices` are written; every other
/// object's normals stay as they were.
///
/// Each adjacent face contributes its unit normal once, with no area or angle
/// weighting, and the average is normalized. The barycenter of a vertex is
/// the mean centroid of its adjacent triangles. Vertices that no triangle
/// references get a zero normal and their own position as barycenter.
pub fn compute_normals_and_barycenters(
    positions: &[Vector3<f32>],
    indices: &[u32],
    vertices: Range<usize>,
    normals: &mut [Vector3<f32>],
    barycenters: &mut [Vector3<f32>],
) {
    let count = vertices.len();
    let mut normal_sums = vec![Vector3::zero(); count];
    let mut centroid_sums = vec![Vector3::zero(); count];
    let mut shared_faces = vec![0u32; count];

    for triangle in indices.chunks_exact(3) {
        let corners = [
            triangle[0] as usize,
            triangle[1] as usize,
            triangle[2] as usize,
        ];
        let (v0, v1, v2) = (
            positions[corners[0]],
            positions[corners[1]],
            positions[corners[2]],
        );

        let face_normal = (v1 - v0).cross(v2 - v0).normalize();
        let centroid = (v0 + v1 + v2) / 3.0;

        for corner in corners {
            if !vertices.contains(&corner) {
                continue;
            }
            let local = corner - vertices.start;
            normal_sums[local] += face_normal;
            centroid_sums[local] += centroid;
            shared_faces[local] += 1;
        }
    }

    for (local, vertex) in vertices.enumerate() {
        match shared_faces[local] {
            0 => {
                normals[vertex] = Vector3::zero();
                barycenters[vertex] = positions[vertex];
            }
            faces => {
                let faces = faces as f32;
                normals[vertex] = (normal_sums[local] / faces).normalize();
                barycenters[vertex] = centroid_sums[local] / faces;
            }
        }
    }
}
