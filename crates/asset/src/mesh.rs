//! CPU-side mesh representation produced by the loaders.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Vertex with position/normal/diffuse color. Values are in object space.
/// Tightly packed 3x float32x3 (36 bytes), ready for direct GPU upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
        }
    }
}

/// Running per-axis extrema of absolute position values, accumulated while
/// parsing. Callers use these for framing/placement; the loader itself never
/// consumes them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub max: Vec3,
    pub min: Vec3,
}

impl Extents {
    pub fn new() -> Self {
        Self {
            max: Vec3::ZERO,
            min: Vec3::INFINITY,
        }
    }

    /// Fold one position into the running extrema.
    pub fn update(&mut self, position: Vec3) {
        let abs = position.abs();
        self.max = self.max.max(abs);
        self.min = self.min.min(abs);
    }
}

impl Default for Extents {
    fn default() -> Self {
        Self::new()
    }
}

/// Indexed triangle mesh with tightly-packed vertices and 16-bit indices.
/// Vertices are append-only and never deduplicated; the index buffer is what
/// expresses topology.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
    pub extents: Extents,
}

impl MeshData {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u16>, extents: Extents) -> Self {
        Self {
            vertices,
            indices,
            extents,
        }
    }

    /// Returns `true` if both vertex and index buffers are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.vertices.is_empty() && !self.indices.is_empty()
    }

    /// Uniform post-load scale over all positions. Normals and colors are
    /// untouched; extents scale by |factor| so they keep describing absolute
    /// values.
    pub fn scaled(mut self, factor: f32) -> Self {
        for vertex in &mut self.vertices {
            for component in &mut vertex.position {
                *component *= factor;
            }
        }
        self.extents.max *= factor.abs();
        self.extents.min *= factor.abs();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn mesh_data_validity() {
        let data = MeshData::new(vec![Vertex::default()], vec![0], Extents::new());
        assert!(data.is_valid());
        assert!(!MeshData::default().is_valid());
    }

    #[test]
    fn vertex_layout_is_36_bytes() {
        assert_eq!(std::mem::size_of::<Vertex>(), 36);
    }

    #[test]
    fn extents_track_absolute_extrema() {
        let mut extents = Extents::new();
        extents.update(vec3(1.0, 2.0, 3.0));
        extents.update(vec3(-4.0, 0.5, 0.0));
        assert_eq!(extents.max, vec3(4.0, 2.0, 3.0));
        assert_eq!(extents.min, vec3(1.0, 0.5, 0.0));
    }

    #[test]
    fn scaled_multiplies_positions_and_extents() {
        let mut extents = Extents::new();
        extents.update(vec3(1.0, -2.0, 0.5));
        let mesh = MeshData::new(
            vec![Vertex::new(vec3(1.0, -2.0, 0.5), Vec3::Y, Vec3::ONE)],
            vec![0],
            extents,
        );
        let scaled = mesh.scaled(-2.0);
        assert_eq!(scaled.vertices[0].position, [-2.0, 4.0, -1.0]);
        // Extents stay absolute regardless of the factor's sign.
        assert_eq!(scaled.extents.max, vec3(2.0, 4.0, 1.0));
        assert_eq!(scaled.extents.min, vec3(2.0, 4.0, 1.0));
        assert_eq!(scaled.vertices[0].normal, [0.0, 1.0, 0.0]);
    }
}
