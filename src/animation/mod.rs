//! # Animation
//!
//! The frame transform pipeline: per-frame state, the motion constants
//! as configuration, and the updater that composes the model, view, and
//! projection matrices into the uniform payload each frame.
//!
//! Data flows one direction: a clock reading and viewport aspect come
//! in, the [`updater`] advances the [`AnimationState`], and a
//! [`TransformUniforms`](crate::gfx::TransformUniforms) value comes out
//! for the rendering layer to bind.

pub mod config;
pub mod state;
pub mod updater;

pub use config::{AnimationConfig, ConfigError};
pub use state::AnimationState;
pub use updater::{advance_frame, spin_angle, SceneAnimator};
