//! # Rotating Triangle Demo
//!
//! The flat predecessor of the spinning cube: a clip-space triangle spun
//! by a single angle uniform, one full turn every 1.5 seconds.
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=info cargo run --example rotating_triangle
//! ```

use std::thread;
use std::time::Duration;

use spindle::prelude::*;

const SPIN_PERIOD_MS: u64 = 1500;

fn main() {
    env_logger::init();

    let triangle = clip_space_triangle();
    log::info!(
        "triangle geometry: {} vertices, {} triangle(s)",
        triangle.vertex_count(),
        triangle.triangle_count()
    );

    let clock = SystemClock::new();
    for frame in 0..90 {
        let angle = spin_angle(clock.now_ms(), SPIN_PERIOD_MS);

        // A real vertex shader would rotate the triangle by this angle;
        // here we rotate the first vertex on the CPU to show the motion.
        let rotation = Matrix4x4::rotation_axis_angle(Vector3::UNIT_Z, angle);
        let tip = Vector4::from(triangle.vertices[0].position) * rotation;

        log::info!(
            "frame {frame:2}: angle {angle:.3} rad, tip at ({:+.3}, {:+.3})",
            tip.x,
            tip.y
        );

        thread::sleep(Duration::from_millis(16));
    }
}
