//! # Animation Configuration
//!
//! The fixed constants of the spinning-cube animation, exposed as
//! configuration. The defaults reproduce the original motion exactly;
//! change them to retune the animation without touching the updater.

use std::f32::consts::PI;

use thiserror::Error;

use crate::math::Vector3;

/// Tunable parameters for the frame transform updater.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Upper bound on a single frame's delta time, in milliseconds.
    /// Bounds the jump after a stall (a debugger pause, a dragged
    /// window).
    pub max_frame_delta_ms: u64,
    /// Angular velocity around the x axis, radians per second.
    pub rotation_rate_x: f32,
    /// Angular velocity around the y axis, radians per second.
    pub rotation_rate_y: f32,
    /// Frequency of the pulsing scale, radians per second of elapsed
    /// time.
    pub pulse_rate: f32,
    /// Amplitude of the pulsing scale around 1.0.
    pub pulse_amplitude: f32,
    /// Fixed camera translation; the default pulls back along -z.
    pub camera_offset: Vector3,
    /// Vertical field of view, radians.
    pub fov_y: f32,
    /// Near clip plane distance.
    pub z_near: f32,
    /// Far clip plane distance.
    pub z_far: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            max_frame_delta_ms: 200,
            rotation_rate_x: PI / 2.0,
            rotation_rate_y: PI / 3.0,
            pulse_rate: 5.0,
            pulse_amplitude: 0.25,
            camera_offset: Vector3::new(0.0, 0.0, -5.0),
            fov_y: 2.0 * PI / 5.0,
            z_near: 1.0,
            z_far: 100.0,
        }
    }
}

impl AnimationConfig {
    /// Reject parameter combinations the projection math cannot
    /// represent.
    ///
    /// The math constructors themselves stay unchecked; this is the one
    /// place degenerate frustum parameters are caught, before they reach
    /// [`Matrix4x4::perspective`](crate::math::Matrix4x4::perspective).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.z_near <= 0.0 {
            return Err(ConfigError::NonPositiveNear(self.z_near));
        }
        if self.z_far <= self.z_near {
            return Err(ConfigError::FarNotBeyondNear {
                near: self.z_near,
                far: self.z_far,
            });
        }
        if self.fov_y <= 0.0 || self.fov_y >= PI {
            return Err(ConfigError::FovOutOfRange(self.fov_y));
        }
        Ok(())
    }
}

/// Rejected animation configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("near clip plane must be positive, got {0}")]
    NonPositiveNear(f32),

    #[error("far clip plane ({far}) must lie beyond the near plane ({near})")]
    FarNotBeyondNear { near: f32, far: f32 },

    #[error("vertical field of view must lie in (0, pi) radians, got {0}")]
    FovOutOfRange(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(AnimationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_motion_constants() {
        let config = AnimationConfig::default();
        assert_eq!(config.max_frame_delta_ms, 200);
        assert!((config.rotation_rate_x - PI / 2.0).abs() < 1e-6);
        assert!((config.rotation_rate_y - PI / 3.0).abs() < 1e-6);
        assert_eq!(config.pulse_amplitude, 0.25);
        assert_eq!(config.camera_offset, Vector3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_rejects_degenerate_frustum() {
        let mut config = AnimationConfig {
            z_near: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveNear(0.0)));

        config.z_near = 10.0;
        config.z_far = 10.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::FarNotBeyondNear {
                near: 10.0,
                far: 10.0
            })
        );
    }

    #[test]
    fn test_rejects_fov_outside_open_interval() {
        let config = AnimationConfig {
            fov_y: PI,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FovOutOfRange(PI)));
    }
}
