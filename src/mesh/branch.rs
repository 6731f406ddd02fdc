use std::f32::consts::TAU;
use crate::math::Vec3;

/// A vertex with position and normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}

/// Triangle mesh uploaded once to the batched renderer
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add vertices and return the starting index
    pub fn add_vertices(&mut self, verts: impl IntoIterator<Item = Vertex>) -> u32 {
        let start = self.vertices.len() as u32;
        self.vertices.extend(verts);
        start
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Two triangles, CCW winding
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    /// Flat `xyz` positions
    pub fn positions(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.position.to_array()).collect()
    }

    /// Flat `xyz` normals
    pub fn normals(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.normal.to_array()).collect()
    }

    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Height range covered along +Y
    pub fn y_extent(&self) -> (f32, f32) {
        self.vertices.iter().fold((f32::MAX, f32::MIN), |(lo, hi), v| {
            (lo.min(v.position.y), hi.max(v.position.y))
        })
    }
}

/// Ring of vertices around the +Y axis at height `y`
pub fn create_ring(y: f32, radius: f32, segments: usize) -> Vec<Vertex> {
    (0..segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * TAU;
            let (sin_a, cos_a) = angle.sin_cos();
            let normal = Vec3::new(cos_a, 0.0, sin_a);
            Vertex::new(Vec3::new(cos_a * radius, y, sin_a * radius), normal)
        })
        .collect()
}

/// Connect two rings with triangles
pub fn connect_rings(mesh: &mut Mesh, lower_start: u32, upper_start: u32, segments: usize) {
    for i in 0..segments {
        let i_next = (i + 1) % segments;

        let a = lower_start + i as u32;
        let b = lower_start + i_next as u32;
        let c = upper_start + i_next as u32;
        let d = upper_start + i as u32;

        // Outward-facing when seen from outside the tube
        mesh.add_quad(a, d, c, b);
    }
}

/// Close a ring with a fan to a single apex vertex
pub fn cap_ring(mesh: &mut Mesh, ring_start: u32, segments: usize, apex: Vec3) {
    let apex_index = mesh.add_vertices([Vertex::new(apex, Vec3::UP)]);
    for i in 0..segments {
        let a = ring_start + i as u32;
        let b = ring_start + ((i + 1) % segments) as u32;
        mesh.add_triangle(a, apex_index, b);
    }
}
