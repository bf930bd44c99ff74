use cgmath::{Vector2, Vector3};
use log::debug;

use super::InstancePicker;
use crate::gfx::scene::{InstanceId, Scene};

/// A vertex after projection: window position (top-left origin) and NDC depth.
#[derive(Debug, Clone, Copy)]
struct ScreenVertex {
    position: Vector2<f32>,
    depth: f32,
}

/// CPU index channel: one instance id and one depth value per pixel.
///
/// This is the software counterpart of the stencil pass. Triangles are filled
/// regardless of winding and resolved with a less-than depth test, so the
/// nearest instance owns each pixel.
#[derive(Debug, Clone)]
pub struct IndexBuffer {
    width: u32,
    height: u32,
    ids: Vec<u32>,
    depth: Vec<f32>,
}

impl IndexBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            ids: vec![0; len],
            depth: vec![f32::INFINITY; len],
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn clear(&mut self) {
        self.ids.fill(0);
        self.depth.fill(f32::INFINITY);
    }

    /// Redraws the whole channel from the scene's current draw calls.
    ///
    /// The buffer is resized to the camera viewport first.
    pub fn render(&mut self, scene: &Scene) {
        let (width, height) = scene.camera().viewport();
        if (width, height) != self.size() {
            *self = Self::new(width, height);
        } else {
            self.clear();
        }

        let positions = scene.pool().positions();
        let indices = scene.pool().indices();
        let mut skipped = 0usize;

        for call in scene.draw_calls() {
            let id = call.stencil_reference();
            let range = call.indices.start as usize..call.indices.end as usize;
            for triangle in indices[range].chunks_exact(3) {
                let corners = [
                    self.project(call.clip, positions[triangle[0] as usize]),
                    self.project(call.clip, positions[triangle[1] as usize]),
                    self.project(call.clip, positions[triangle[2] as usize]),
                ];
                match corners {
                    [Some(a), Some(b), Some(c)] => self.fill(a, b, c, id),
                    _ => skipped += 1,
                }
            }
        }

        if skipped > 0 {
            debug!("Index pass skipped {} triangles behind the eye", skipped);
        }
    }

    /// Raw id at a pixel, 0 for background or out-of-range coordinates.
    pub fn index_at(&self, x: u32, y: u32) -> u32 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.ids[self.slot(x, y)]
    }

    fn slot(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn project(&self, clip: cgmath::Matrix4<f32>, position: Vector3<f32>) -> Option<ScreenVertex> {
        let clip = clip * position.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(ScreenVertex {
            position: Vector2::new(
                (ndc.x + 1.0) * 0.5 * self.width as f32,
                (1.0 - ndc.y) * 0.5 * self.height as f32,
            ),
            depth: ndc.z,
        })
    }

    fn fill(&mut self, a: ScreenVertex, b: ScreenVertex, c: ScreenVertex, id: u32) {
        let area = edge(a.position, b.position, c.position);
        if area == 0.0 {
            return;
        }

        let min_x = a.position.x.min(b.position.x).min(c.position.x).floor().max(0.0) as u32;
        let min_y = a.position.y.min(b.position.y).min(c.position.y).floor().max(0.0) as u32;
        let max_x = a.position.x.max(b.position.x).max(c.position.x).ceil();
        let max_y = a.position.y.max(b.position.y).max(c.position.y).ceil();
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }
        let max_x = (max_x as u32).min(self.width - 1);
        let max_y = (max_y as u32).min(self.height - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vector2::new(x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(b.position, c.position, p) / area;
                let w1 = edge(c.position, a.position, p) / area;
                let w2 = edge(a.position, b.position, p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * a.depth + w1 * b.depth + w2 * c.depth;
                let slot = self.slot(x, y);
                if depth < self.depth[slot] {
                    self.depth[slot] = depth;
                    self.ids[slot] = id;
                }
            }
        }
    }
}

/// Twice the signed area of `(a, b, p)`.
fn edge(a: Vector2<f32>, b: Vector2<f32>, p: Vector2<f32>) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

impl InstancePicker for IndexBuffer {
    fn pick_at(&self, x: u32, y: u32) -> Option<InstanceId> {
        InstanceId::new(self.index_at(x, y))
    }
}
