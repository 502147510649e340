use bytemuck::{Pod, Zeroable};
use lumen_math::{vec2, vec3, Vec2, Vec3};

/// Vertex layout shared by every mesh: position, normal, texture coordinate.
///
/// Shader locations: 0 = position, 1 = normal, 2 = uv.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x2  // uv
    ];

    pub const fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self { position, normal, uv }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Unit quad centered on the origin in the z = 0 plane, facing +Z.
///
/// uv follows position: `(0, 0)` at the bottom-left corner.
pub struct QuadMesh;

impl QuadMesh {
    pub const VERTICES: [MeshVertex; 4] = [
        MeshVertex::new(vec3(-0.5, -0.5, 0.0), Vec3::Z, vec2(0.0, 0.0)),
        MeshVertex::new(vec3(0.5, -0.5, 0.0), Vec3::Z, vec2(1.0, 0.0)),
        MeshVertex::new(vec3(0.5, 0.5, 0.0), Vec3::Z, vec2(1.0, 1.0)),
        MeshVertex::new(vec3(-0.5, 0.5, 0.0), Vec3::Z, vec2(0.0, 1.0)),
    ];

    /// Two counter-clockwise triangles.
    pub const INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

    pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint16;

    pub const fn index_count() -> u32 {
        Self::INDICES.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::offset_of;

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(offset_of!(MeshVertex, position), 0);
        assert_eq!(offset_of!(MeshVertex, normal), 12);
        assert_eq!(offset_of!(MeshVertex, uv), 24);
        assert_eq!(std::mem::size_of::<MeshVertex>(), 32);
    }

    #[test]
    fn attributes_match_struct_offsets() {
        let layout = MeshVertex::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);

        let offsets: Vec<(u32, u64)> = layout
            .attributes
            .iter()
            .map(|a| (a.shader_location, a.offset))
            .collect();
        assert_eq!(offsets, vec![(0, 0), (1, 12), (2, 24)]);
        assert_eq!(layout.attributes[2].format, wgpu::VertexFormat::Float32x2);
    }

    // ── quad ──────────────────────────────────────────────────────────────

    #[test]
    fn quad_spans_unit_square() {
        for v in QuadMesh::VERTICES {
            assert_eq!(v.position.x.abs(), 0.5);
            assert_eq!(v.position.y.abs(), 0.5);
            assert_eq!(v.position.z, 0.0);
            assert_eq!(v.normal, Vec3::Z);
        }
    }

    #[test]
    fn quad_triangles_wind_counter_clockwise() {
        for tri in QuadMesh::INDICES.chunks(3) {
            let a = QuadMesh::VERTICES[tri[0] as usize].position;
            let b = QuadMesh::VERTICES[tri[1] as usize].position;
            let c = QuadMesh::VERTICES[tri[2] as usize].position;
            let n = Vec3::cross(b - a, c - a);
            assert!(n.z > 0.0);
        }
    }

    #[test]
    fn quad_indices_in_range() {
        assert_eq!(QuadMesh::index_count(), 6);
        assert!(QuadMesh::INDICES.iter().all(|&i| (i as usize) < QuadMesh::VERTICES.len()));
    }

    #[test]
    fn quad_uvs_cover_texture() {
        let uvs: Vec<[f32; 2]> = QuadMesh::VERTICES.iter().map(|v| v.uv.into()).collect();
        assert_eq!(uvs, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    }
}
