//! # Animation State
//!
//! The per-application accumulators the frame updater advances. One
//! instance lives for the rendering lifetime of its owner and is mutated
//! exactly once per frame; it is never shared.

use crate::gfx::TransformUniforms;

/// Accumulated animation state.
///
/// Rotation angles are radians and grow without bound; trig periodicity
/// wraps them naturally. Times are millisecond ticks in the owning
/// clock's units.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// Clock reading at the end of the previous frame.
    pub last_frame_time: u64,
    /// Total animated time, accumulated from clamped per-frame deltas.
    pub elapsed_time: u64,
    /// Accumulated rotation around the x axis, radians.
    pub rotation_x: f32,
    /// Accumulated rotation around the y axis, radians.
    pub rotation_y: f32,
    /// The uniform payload computed by the most recent frame advance.
    pub uniforms: TransformUniforms,
}

impl AnimationState {
    /// Fresh state with the clock seeded to `start_time_ms`.
    ///
    /// Rotations and elapsed time start at zero; the uniform slot holds
    /// the identity until the first advance.
    pub fn new(start_time_ms: u64) -> Self {
        Self {
            last_frame_time: start_time_ms,
            elapsed_time: 0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            uniforms: TransformUniforms::default(),
        }
    }

    /// Animated time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_time as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Matrix4x4;

    #[test]
    fn test_new_state_is_zeroed() {
        let state = AnimationState::new(1234);
        assert_eq!(state.last_frame_time, 1234);
        assert_eq!(state.elapsed_time, 0);
        assert_eq!(state.rotation_x, 0.0);
        assert_eq!(state.rotation_y, 0.0);
        assert_eq!(state.uniforms.matrix(), Matrix4x4::IDENTITY);
    }
}
