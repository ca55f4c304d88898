//! # Geometry
//!
//! A small parameterized geometry interface over the meshes the example
//! stages draw. The math library is independent of any particular mesh;
//! this module only packages vertex and index data for upload by the
//! excluded buffer/pipeline layer.

pub mod primitives;
pub mod vertex;

pub use primitives::{clip_space_triangle, colored_cube};
pub use vertex::ColorVertex;

/// An indexed triangle list ready for GPU upload.
///
/// Indices are `u16` (all example meshes are tiny) with
/// counter-clockwise front faces.
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    pub vertices: Vec<ColorVertex>,
    pub indices: Vec<u16>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
