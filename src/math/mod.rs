//! # 3D Math
//!
//! Small, self-contained vector/matrix math for the transform pipeline:
//! 3- and 4-component vectors and a row-major 4x4 matrix with the
//! constructors a model-view-projection chain needs.
//!
//! This is deliberately not a general-purpose linear-algebra library.
//! There is no inversion, no quaternions, and no SIMD; only the
//! operations the animation core exercises. All values are `Copy` value
//! types and every operation is a pure function of its inputs.
//!
//! Inputs are assumed well-formed: apart from the zero-length guards in
//! [`Vector3::length`] and [`Vector3::normalized`] nothing is checked,
//! and violated preconditions (a non-unit rotation axis, a degenerate
//! frustum) silently propagate incorrect numbers rather than panicking.

pub mod matrix;
pub mod vector;

pub use matrix::Matrix4x4;
pub use vector::{Vector3, Vector4};
