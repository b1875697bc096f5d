//! CPU-side geometry generation for the primitive shapes the scenes use.

use std::f32::consts::{PI, TAU};

use crate::types::Vertex;

/// Indexed triangle mesh ready for upload
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// UV sphere centred on the origin.
///
/// Rows run from the north pole (+Y) to the south pole; the seam column is
/// duplicated so there are `(width_segments + 1) * (height_segments + 1)`
/// vertices. Degenerate triangles at the poles are skipped.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);

    let mut vertices = Vec::with_capacity(((width_segments + 1) * (height_segments + 1)) as usize);
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let normal = [
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            ];
            let position = normal.map(|n| n * radius);
            vertices.push(Vertex::new(position, normal));
        }
    }

    let row = width_segments + 1;
    let mut indices = Vec::new();
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Axis-aligned box centred on the origin, one quad per face with flat normals
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);

    // (normal, u axis, v axis, half extents along normal / u / v)
    let faces: [([f32; 3], [f32; 3], [f32; 3], f32, f32, f32); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0], hx, hz, hy),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0], hx, hz, hy),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0], hy, hx, hz),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], hy, hx, hz),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], hz, hx, hy),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], hz, hx, hy),
    ];

    let mut mesh = MeshData::default();
    for (normal, u_axis, v_axis, along, half_u, half_v) in faces {
        let base = mesh.vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let position = [0, 1, 2].map(|k| {
                normal[k] * along + u_axis[k] * half_u * su + v_axis[k] * half_v * sv
            });
            mesh.vertices.push(Vertex::new(position, normal));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Rectangle in the XY plane facing +Z
pub fn plane(width: f32, height: f32) -> MeshData {
    let (hx, hy) = (width * 0.5, height * 0.5);
    let normal = [0.0, 0.0, 1.0];
    MeshData {
        vertices: vec![
            Vertex::new([-hx, -hy, 0.0], normal),
            Vertex::new([hx, -hy, 0.0], normal),
            Vertex::new([hx, hy, 0.0], normal),
            Vertex::new([-hx, hy, 0.0], normal),
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Unindexed point list; normals are unused by the point pipeline
pub fn point_cloud(positions: &[[f32; 3]]) -> Vec<Vertex> {
    positions
        .iter()
        .map(|&p| Vertex::new(p, [0.0; 3]))
        .collect()
}
