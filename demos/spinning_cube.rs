//! # Spinning Cube Demo
//!
//! Drives the full transform pipeline against the real clock, standing
//! in for the excluded render loop: build the cube geometry, advance the
//! animator once per "frame", and show the uniform payload that would be
//! pushed to the vertex stage before each draw call.
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=debug cargo run --example spinning_cube
//! ```

use std::thread;
use std::time::Duration;

use spindle::prelude::*;

const FRAME_COUNT: u32 = 120;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();

    // The geometry a real application would upload once at startup.
    let cube = colored_cube();
    log::info!(
        "cube geometry: {} vertices, {} triangles, {} vertex bytes",
        cube.vertex_count(),
        cube.triangle_count(),
        bytemuck::cast_slice::<ColorVertex, u8>(&cube.vertices).len()
    );

    let mut animator = spindle::default();
    let viewport = Viewport::new(1280, 720);

    for frame in 0..FRAME_COUNT {
        let uniforms = animator.advance(viewport);

        // This byte slice is exactly what a render loop would hand to
        // its uniform upload call.
        let payload = bytemuck::bytes_of(&uniforms);

        let state = animator.state();
        log::info!(
            "frame {frame:3}: elapsed {:5}ms rot=({:.3}, {:.3}) mvp diag=({:.3}, {:.3}, {:.3}) [{} bytes]",
            state.elapsed_time,
            state.rotation_x,
            state.rotation_y,
            uniforms.mvp[0][0],
            uniforms.mvp[1][1],
            uniforms.mvp[2][2],
            payload.len()
        );

        thread::sleep(FRAME_INTERVAL);
    }
}
