//! Procedural unit cube, the fallback primitive callers show when a model
//! fails to load.

use glam::Vec3;

use crate::mesh::{Extents, MeshData, Vertex};

const CUBE_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Axis-aligned cube spanning [-1, 1] on every axis: six quad faces with
/// per-face normals, 24 vertices and 36 indices, in the same layout the OBJ
/// loader emits.
pub fn unit_cube() -> MeshData {
    let s = 1.0;
    let corners = [
        Vec3::new(s, s, s),
        Vec3::new(s, s, -s),
        Vec3::new(-s, s, -s),
        Vec3::new(-s, s, s),
        Vec3::new(s, -s, s),
        Vec3::new(s, -s, -s),
        Vec3::new(-s, -s, -s),
        Vec3::new(-s, -s, s),
    ];
    let faces: [([usize; 4], Vec3); 6] = [
        ([0, 1, 2, 3], Vec3::Y),
        ([4, 5, 6, 7], Vec3::NEG_Y),
        ([1, 0, 4, 5], Vec3::X),
        ([3, 2, 6, 7], Vec3::NEG_X),
        ([0, 3, 7, 4], Vec3::Z),
        ([1, 5, 6, 2], Vec3::NEG_Z),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    let mut extents = Extents::new();

    for (quad, normal) in faces {
        let offset = vertices.len() as u16;
        for corner in quad {
            extents.update(corners[corner]);
            vertices.push(Vertex::new(corners[corner], normal, CUBE_COLOR));
        }
        indices.extend([0u16, 1, 2, 0, 2, 3].map(|i| i + offset));
    }

    MeshData::new(vertices, indices, extents)
}
