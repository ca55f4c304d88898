//! # Graphics Interface
//!
//! The boundary between the animation core and the excluded rendering
//! layer. Nothing in this crate talks to a graphics device; this module
//! defines the data that crosses the seam:
//!
//! - **Uniforms** ([`uniforms`]) - the per-frame transform payload,
//!   laid out for direct upload
//! - **Geometry** ([`geometry`]) - the example meshes as indexed
//!   triangle lists
//!
//! Device creation, shader loading, pipeline state, and buffer upload
//! all belong to the consuming application.

pub mod geometry;
pub mod uniforms;

pub use geometry::{ColorVertex, GeometryData};
pub use uniforms::TransformUniforms;
