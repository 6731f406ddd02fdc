use serde::{Deserialize, Serialize};
use crate::growth::BranchNode;
use crate::math::Vec3;
use super::branch::{cap_ring, connect_rings, create_ring, Mesh};

/// Parameters for the branch meshes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshParams {
    /// Vertices around each ring
    pub radial_segments: usize,
    /// Rings along the branch, including both ends
    pub rings: usize,
    /// Radius at the base of a segment
    pub base_radius: f32,
    /// Radius at the top of a segment
    pub tip_radius: f32,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            radial_segments: 8,
            rings: 2,
            base_radius: 0.1,
            tip_radius: 0.07,
        }
    }
}

/// Which precomputed mesh a renderer slot draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryHandle {
    /// Open tapered tube, used by internal nodes
    Segment,
    /// Tube closed with a pointed cap, used by leaves
    Tip,
}

impl GeometryHandle {
    pub const ALL: [GeometryHandle; 2] = [GeometryHandle::Segment, GeometryHandle::Tip];

    pub fn index(self) -> usize {
        match self {
            GeometryHandle::Segment => 0,
            GeometryHandle::Tip => 1,
        }
    }
}

/// Branch meshes, built once. Every mesh spans y = 0..1 so a child placed
/// one unit up its parent's axis starts exactly at the parent's top.
#[derive(Debug, Clone)]
pub struct GeometryCatalog {
    meshes: [Mesh; 2],
}

impl GeometryCatalog {
    pub fn new(params: MeshParams) -> Self {
        Self {
            meshes: [segment_mesh(&params), tip_mesh(&params)],
        }
    }

    /// Geometry for a node: tips on leaves, segments elsewhere
    pub fn handle_for(&self, node: &BranchNode) -> GeometryHandle {
        if node.is_leaf() {
            GeometryHandle::Tip
        } else {
            GeometryHandle::Segment
        }
    }

    pub fn mesh(&self, handle: GeometryHandle) -> &Mesh {
        &self.meshes[handle.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeometryHandle, &Mesh)> {
        GeometryHandle::ALL.into_iter().map(move |h| (h, self.mesh(h)))
    }
}

fn tube(params: &MeshParams, rings: usize, top_radius: f32) -> (Mesh, u32) {
    let mut mesh = Mesh::new();
    let rings = rings.max(2);
    let segments = params.radial_segments;
    let mut previous = None;
    let mut last = 0;

    for i in 0..rings {
        let t = i as f32 / (rings - 1) as f32;
        let radius = params.base_radius + (top_radius - params.base_radius) * t;
        let start = mesh.add_vertices(create_ring(t, radius, segments));
        if let Some(lower) = previous {
            connect_rings(&mut mesh, lower, start, segments);
        }
        previous = Some(start);
        last = start;
    }

    (mesh, last)
}

fn segment_mesh(params: &MeshParams) -> Mesh {
    tube(params, params.rings, params.tip_radius).0
}

fn tip_mesh(params: &MeshParams) -> Mesh {
    // Stop short of the top and close with a point at y = 1
    let (mut mesh, top_ring) = tube(params, params.rings, params.tip_radius * 0.5);
    for v in mesh.vertices.iter_mut() {
        v.position.y *= 0.85;
    }
    cap_ring(&mut mesh, top_ring, params.radial_segments, Vec3::UP);
    mesh
}
