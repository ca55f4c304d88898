//! # Uniform Payloads
//!
//! GPU-ready uniform data produced by the frame updater. The excluded
//! rendering layer binds these bytes to the vertex stage before the draw
//! call; this crate stops at the byte layout.

use crate::math::Matrix4x4;

/// The per-frame transform uniform block.
///
/// Contains the combined model-view-projection matrix as row-major
/// `[[f32; 4]; 4]`, matching [`Matrix4x4`]'s storage exactly. Shaders
/// expecting column-major data should receive
/// `TransformUniforms::from(mvp.transpose())` instead.
///
/// `#[repr(C)]` plus the bytemuck derives make the struct uploadable as
/// a plain byte slice via `bytemuck::bytes_of`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniforms {
    /// Combined model-view-projection matrix, row-major.
    pub mvp: [[f32; 4]; 4],
}

impl TransformUniforms {
    pub fn new(mvp: Matrix4x4) -> Self {
        Self {
            mvp: mvp.to_array(),
        }
    }

    /// The contained matrix as a math type again.
    pub fn matrix(&self) -> Matrix4x4 {
        Matrix4x4::from_rows(self.mvp)
    }
}

impl Default for TransformUniforms {
    fn default() -> Self {
        Self::new(Matrix4x4::IDENTITY)
    }
}

impl From<Matrix4x4> for TransformUniforms {
    fn from(mvp: Matrix4x4) -> Self {
        Self::new(mvp)
    }
}
