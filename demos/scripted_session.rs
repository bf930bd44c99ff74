//! # Scripted Session
//!
//! Drives a scene through the same input path a window would, without opening
//! one. Instances are picked through the CPU index buffer.
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=debug cargo run --example scripted_session
//! ```
//!
//! Only `data/unit_cube_TRIANGLES.off` ships with the crate. Drop
//! `bumpy_cube.off` and `bunny.off` next to it to place those kinds too;
//! until then the failed loads are logged and skipped.

use anyhow::{ensure, Context, Result};
use log::info;
use stencilscene::prelude::*;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SceneConfig::new()
        .mesh_dirs([
            concat!(env!("CARGO_MANIFEST_DIR"), "/data"),
            "data",
        ])
        .seed(7);
    let mut controller = SceneController::new(&config);

    // Insertion mode: 1 = unit cube, 3 = bunny
    controller.key_released(KeyCode::Digit1);
    controller.key_released(KeyCode::Digit3);
    ensure!(
        !controller.scene().instances().is_empty(),
        "no mesh could be loaded from {:?}",
        config.mesh_dirs
    );

    let upload = controller
        .scene_mut()
        .take_pool_upload()
        .context("loading a mesh should produce a pool upload")?;
    info!(
        "Pool upload: {} vertices ({} bytes), {} indices, bind attributes: {}",
        upload.vertices.len(),
        upload.vertex_bytes().len(),
        upload.indices.len(),
        upload.bind_attributes
    );

    let (width, height) = controller.scene().camera().viewport();
    let mut index = IndexBuffer::new(width, height);

    // Transform mode, then pick whatever lies under the first instance's center
    controller.key_released(KeyCode::KeyO);
    index.render(controller.scene());
    let first = controller.scene().instances()[0].clone();
    let (x, y) = center_pixel(first.clip_transform(), first.object().center, width, height);
    controller.cursor_moved(x, y);
    controller.mouse_input(MouseButton::Left, ElementState::Pressed, &index);

    // Drag a little to the right and up, then let go
    controller.cursor_moved(x + 40.0, y);
    controller.cursor_moved(x + 40.0, y - 30.0);
    controller.mouse_input(MouseButton::Left, ElementState::Released, &index);
    info!("Selection after drag: {:?}", controller.scene().selected());

    // Scale up, rotate, recolor with palette entry 4
    for key in [KeyCode::KeyZ, KeyCode::KeyR, KeyCode::KeyR, KeyCode::Digit5] {
        controller.key_released(key);
    }

    // Second click commits and releases the selection
    controller.mouse_input(MouseButton::Left, ElementState::Pressed, &index);
    controller.mouse_input(MouseButton::Left, ElementState::Released, &index);

    controller.key_released(KeyCode::KeyP);
    controller.key_released(KeyCode::KeyL);

    let uniforms = controller.scene().frame_uniforms();
    info!(
        "Frame: camera at {:?}, shading selector {}",
        uniforms.camera_position, uniforms.shading
    );
    for call in controller.scene().draw_calls() {
        info!(
            "Draw {} indices {:?} color {:?} stencil ref {}",
            call.instance_id,
            call.indices,
            call.color,
            call.stencil_reference()
        );
    }

    Ok(())
}

/// Window pixel where `clip` maps the object center.
fn center_pixel(clip: Matrix4<f32>, center: Vector3<f32>, width: u32, height: u32) -> (f64, f64) {
    let p = clip * center.extend(1.0);
    let (ndc_x, ndc_y) = (p.x / p.w, p.y / p.w);
    (
        ((ndc_x + 1.0) * 0.5 * width as f32) as f64,
        ((1.0 - ndc_y) * 0.5 * height as f32) as f64,
    )
}
