//! # Spindle Prelude
//!
//! A convenient import for the types a typical consumer touches: the
//! math primitives, the animator and its configuration, and the data
//! that crosses the rendering seam.
//!
//! ## Usage
//!
//! ```rust
//! use spindle::prelude::*;
//!
//! let mut animator = spindle::default();
//! let uniforms = animator.advance(Viewport::new(1280, 720));
//! let _bytes = bytemuck::bytes_of(&uniforms);
//! ```

// Re-export the animation core
pub use crate::animation::{
    advance_frame, spin_angle, AnimationConfig, AnimationState, ConfigError, SceneAnimator,
};
pub use crate::default;

// Re-export the math primitives
pub use crate::math::{Matrix4x4, Vector3, Vector4};

// Re-export the rendering-seam data types
pub use crate::gfx::{
    geometry::{clip_space_triangle, colored_cube},
    ColorVertex, GeometryData, TransformUniforms,
};

// Re-export the collaborator seams
pub use crate::time::{FrameClock, ManualClock, SystemClock};
pub use crate::viewport::Viewport;
