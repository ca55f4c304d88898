//! # Frame Transform Updater
//!
//! Advances the animation once per rendered frame and produces the
//! uniform matrix for that frame. Purely synchronous; the only outside
//! input is the clock reading and viewport aspect the caller passes in.

use std::f32::consts::PI;

use crate::gfx::TransformUniforms;
use crate::math::{Matrix4x4, Vector3};
use crate::time::{FrameClock, SystemClock};
use crate::viewport::Viewport;

use super::config::{AnimationConfig, ConfigError};
use super::state::AnimationState;

/// Advance `state` to `now_ms` and compute the frame's MVP matrix.
///
/// The per-frame delta is clamped to `config.max_frame_delta_ms` before
/// it is accumulated, so a stall shows up as one bounded step instead of
/// a discontinuous jump. A clock reading earlier than the previous frame
/// saturates to a zero delta.
///
/// The composed matrix is written to `state.uniforms` and also returned.
pub fn advance_frame(
    state: &mut AnimationState,
    config: &AnimationConfig,
    now_ms: u64,
    aspect: f32,
) -> Matrix4x4 {
    let mut delta = now_ms.saturating_sub(state.last_frame_time);
    if delta > config.max_frame_delta_ms {
        log::debug!(
            "frame delta {}ms clamped to {}ms",
            delta,
            config.max_frame_delta_ms
        );
        delta = config.max_frame_delta_ms;
    }
    state.elapsed_time += delta;

    let dt = delta as f32 / 1000.0;
    state.rotation_x += dt * config.rotation_rate_x;
    state.rotation_y += dt * config.rotation_rate_y;

    let scale_factor =
        (config.pulse_rate * state.elapsed_seconds()).sin() * config.pulse_amplitude + 1.0;

    // Row-vector order: the rotations apply first, the pulse scales the
    // already-tumbling cube.
    let x_rotation = Matrix4x4::rotation_axis_angle(Vector3::UNIT_X, state.rotation_x);
    let y_rotation = Matrix4x4::rotation_axis_angle(Vector3::UNIT_Y, state.rotation_y);
    let model = x_rotation * y_rotation * Matrix4x4::uniform_scale(scale_factor);

    let view = Matrix4x4::translation(config.camera_offset);
    let projection = Matrix4x4::perspective(aspect, config.fov_y, config.z_near, config.z_far);

    let mvp = model * view * projection;
    state.uniforms = TransformUniforms::from(mvp);
    state.last_frame_time = now_ms;
    mvp
}

/// Elapsed time mapped to a spin angle, one full turn per `period_ms`.
///
/// This is the time-to-angle mapping of the flat rotating-triangle
/// stage: the angle sweeps `0..2pi` and wraps. A zero period pins the
/// angle at zero.
pub fn spin_angle(elapsed_ms: u64, period_ms: u64) -> f32 {
    if period_ms == 0 {
        return 0.0;
    }
    let phase = (elapsed_ms % period_ms) as f32 / (period_ms as f32 / 2.0);
    phase * PI
}

/// Owns the animation state and its collaborators.
///
/// This is the composition the consuming application talks to: a
/// [`FrameClock`] is read once per [`advance`](Self::advance), the
/// viewport value supplies the aspect ratio, and the returned
/// [`TransformUniforms`] is ready to bind before the draw call.
pub struct SceneAnimator<C: FrameClock = SystemClock> {
    clock: C,
    config: AnimationConfig,
    state: AnimationState,
}

impl SceneAnimator<SystemClock> {
    /// Animator over the wall clock with the default motion constants.
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for SceneAnimator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FrameClock> SceneAnimator<C> {
    /// Animator over a caller-supplied clock with default constants.
    pub fn with_clock(clock: C) -> Self {
        let state = AnimationState::new(clock.now_ms());
        Self {
            clock,
            config: AnimationConfig::default(),
            state,
        }
    }

    /// Animator with a custom configuration, validated up front.
    pub fn with_config(clock: C, config: AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = AnimationState::new(clock.now_ms());
        Ok(Self {
            clock,
            config,
            state,
        })
    }

    /// Run one frame step and return the uniform payload for binding.
    pub fn advance(&mut self, viewport: Viewport) -> TransformUniforms {
        let now = self.clock.now_ms();
        advance_frame(&mut self.state, &self.config, now, viewport.aspect());
        self.state.uniforms
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_delta_is_clamped_to_max() {
        let config = AnimationConfig::default();
        let mut state = AnimationState::new(1000);

        advance_frame(&mut state, &config, 1300, 1.0);

        // 300ms passed on the clock but only 200ms are accumulated.
        assert_eq!(state.elapsed_time, 200);
        assert_eq!(state.last_frame_time, 1300);
    }

    #[test]
    fn test_zero_delta_changes_nothing_but_the_clock() {
        let config = AnimationConfig::default();
        let mut state = AnimationState::new(1000);
        advance_frame(&mut state, &config, 1100, 1.0);

        let before = state.clone();
        advance_frame(&mut state, &config, 1100, 1.0);

        assert_eq!(state.elapsed_time, before.elapsed_time);
        assert_eq!(state.rotation_x, before.rotation_x);
        assert_eq!(state.rotation_y, before.rotation_y);
        assert_eq!(state.uniforms, before.uniforms);
    }

    #[test]
    fn test_backwards_clock_reading_saturates() {
        let config = AnimationConfig::default();
        let mut state = AnimationState::new(1000);
        advance_frame(&mut state, &config, 1100, 1.0);

        let rotation_before = state.rotation_x;
        advance_frame(&mut state, &config, 900, 1.0);

        assert_eq!(state.rotation_x, rotation_before);
        assert_eq!(state.last_frame_time, 900);
    }

    #[test]
    fn test_rotation_rates_accumulate_independently() {
        let config = AnimationConfig::default();
        let mut state = AnimationState::new(0);

        // One simulated second in 100ms steps, under the clamp.
        for frame in 1..=10 {
            advance_frame(&mut state, &config, frame * 100, 1.0);
        }

        assert!((state.rotation_x - config.rotation_rate_x).abs() < EPS);
        assert!((state.rotation_y - config.rotation_rate_y).abs() < EPS);
    }

    #[test]
    fn test_mvp_matches_manual_composition() {
        let config = AnimationConfig::default();
        let mut state = AnimationState::new(0);
        let aspect = 16.0 / 9.0;

        let mvp = advance_frame(&mut state, &config, 100, aspect);

        let scale_factor =
            (config.pulse_rate * state.elapsed_seconds()).sin() * config.pulse_amplitude + 1.0;
        let model = Matrix4x4::rotation_axis_angle(Vector3::UNIT_X, state.rotation_x)
            * Matrix4x4::rotation_axis_angle(Vector3::UNIT_Y, state.rotation_y)
            * Matrix4x4::uniform_scale(scale_factor);
        let view = Matrix4x4::translation(config.camera_offset);
        let projection =
            Matrix4x4::perspective(aspect, config.fov_y, config.z_near, config.z_far);
        let expected = model * view * projection;

        assert_eq!(mvp, expected);
        assert_eq!(state.uniforms, TransformUniforms::from(expected));
    }

    #[test]
    fn test_pulse_stays_within_band() {
        let config = AnimationConfig::default();
        let mut state = AnimationState::new(0);

        for frame in 1..=300 {
            advance_frame(&mut state, &config, frame * 16, 1.0);
            let scale = (config.pulse_rate * state.elapsed_seconds()).sin()
                * config.pulse_amplitude
                + 1.0;
            assert!((0.75..=1.25).contains(&scale));
        }
    }

    #[test]
    fn test_spin_angle_wraps_per_period() {
        assert_eq!(spin_angle(0, 1500), 0.0);
        assert!((spin_angle(750, 1500) - PI).abs() < EPS);
        assert_eq!(spin_angle(1500, 1500), 0.0);
        assert!((spin_angle(2250, 1500) - PI).abs() < EPS);
        assert_eq!(spin_angle(12345, 0), 0.0);
    }

    #[test]
    fn test_animator_drives_state_from_its_clock() {
        let clock = ManualClock::new(0);
        let mut animator = SceneAnimator::with_clock(clock);
        let viewport = Viewport::new(800, 600);

        let first = animator.advance(viewport);

        // No time passed, so a second advance reproduces the payload.
        let second = animator.advance(viewport);
        assert_eq!(first, second);
    }

    #[test]
    fn test_animator_rejects_bad_config() {
        let config = AnimationConfig {
            z_near: -1.0,
            ..Default::default()
        };
        assert!(SceneAnimator::with_config(ManualClock::new(0), config).is_err());
    }

    #[test]
    fn test_animator_moves_with_the_clock() {
        let clock = ManualClock::new(0);
        let mut animator = SceneAnimator::with_clock(clock);
        let viewport = Viewport::new(800, 600);

        let first = animator.advance(viewport);
        animator.clock().advance(100);
        let second = animator.advance(viewport);

        assert_ne!(first, second);
        assert_eq!(animator.state().elapsed_time, 100);
    }
}
