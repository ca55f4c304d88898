//! # Primitive Geometry
//!
//! The example meshes used by the rendering stages, generated as indexed
//! triangle lists with counter-clockwise winding.

use super::{ColorVertex, GeometryData};

/// The classic RGB triangle, already in clip space.
///
/// No transform is needed to draw it; each corner carries one primary
/// color so interpolation across the face is visible.
pub fn clip_space_triangle() -> GeometryData {
    let vertices = vec![
        ColorVertex::new([0.0, 0.5, 0.0, 1.0], [1.0, 0.0, 0.0, 1.0]),
        ColorVertex::new([-0.5, -0.5, 0.0, 1.0], [0.0, 1.0, 0.0, 1.0]),
        ColorVertex::new([0.5, -0.5, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]),
    ];

    GeometryData {
        indices: vec![0, 1, 2],
        vertices,
    }
}

/// A cube spanning -1..1 on all axes, one color per corner.
///
/// Eight shared vertices and 36 indices, two triangles per face. Corner
/// colors are the corner coordinates mapped into [0, 1], so the cube
/// shades through the RGB color space.
pub fn colored_cube() -> GeometryData {
    let vertices = vec![
        ColorVertex::new([-1.0, 1.0, 1.0, 1.0], [0.0, 1.0, 1.0, 1.0]),
        ColorVertex::new([-1.0, -1.0, 1.0, 1.0], [0.0, 0.0, 1.0, 1.0]),
        ColorVertex::new([1.0, -1.0, 1.0, 1.0], [1.0, 0.0, 1.0, 1.0]),
        ColorVertex::new([1.0, 1.0, 1.0, 1.0], [1.0, 1.0, 1.0, 1.0]),
        ColorVertex::new([-1.0, 1.0, -1.0, 1.0], [0.0, 1.0, 0.0, 1.0]),
        ColorVertex::new([-1.0, -1.0, -1.0, 1.0], [0.0, 0.0, 0.0, 1.0]),
        ColorVertex::new([1.0, -1.0, -1.0, 1.0], [1.0, 0.0, 0.0, 1.0]),
        ColorVertex::new([1.0, 1.0, -1.0, 1.0], [1.0, 1.0, 0.0, 1.0]),
    ];

    let indices = vec![
        3, 2, 6, 6, 7, 3, // right
        4, 5, 1, 1, 0, 4, // left
        4, 0, 3, 3, 7, 4, // top
        1, 5, 6, 6, 2, 1, // bottom
        0, 1, 2, 2, 3, 0, // front
        7, 6, 5, 5, 4, 7, // back
    ];

    GeometryData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_generation() {
        let triangle = clip_space_triangle();
        assert_eq!(triangle.vertex_count(), 3);
        assert_eq!(triangle.triangle_count(), 1);

        // Already in clip space: every coordinate within the unit range.
        for v in &triangle.vertices {
            assert!(v.position[0].abs() <= 1.0);
            assert!(v.position[1].abs() <= 1.0);
            assert_eq!(v.position[3], 1.0);
        }
    }

    #[test]
    fn test_cube_generation() {
        let cube = colored_cube();
        assert_eq!(cube.vertex_count(), 8); // shared corners
        assert_eq!(cube.index_count(), 36); // 6 faces * 2 triangles * 3
        assert_eq!(cube.triangle_count(), 12);

        // Every index refers to a real vertex.
        assert!(cube
            .indices
            .iter()
            .all(|&i| (i as usize) < cube.vertex_count()));
    }

    #[test]
    fn test_cube_corners_are_homogeneous_points() {
        let cube = colored_cube();
        for v in &cube.vertices {
            assert_eq!(v.position[3], 1.0);
            for channel in v.color {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
