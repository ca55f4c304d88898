//! # Vertex Data
//!
//! GPU-compatible vertex formats for the example geometry.

/// A vertex with a homogeneous position and an RGBA color.
///
/// Both components are four floats: positions carry `w = 1` and colors
/// carry alpha, which keeps every attribute 16-byte aligned the way GPU
/// APIs want vertex data laid out. `#[repr(C)]` plus the bytemuck
/// derives make a `&[ColorVertex]` uploadable as plain bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    /// Homogeneous position [x, y, z, w].
    pub position: [f32; 4],
    /// RGBA color, each channel in [0, 1].
    pub color: [f32; 4],
}

impl ColorVertex {
    pub const fn new(position: [f32; 4], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}
