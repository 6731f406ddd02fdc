use crate::error::TreeError;
use crate::growth::NodeId;
use crate::math::Mat4;
use crate::mesh::GeometryHandle;

/// Floats per instance matrix
pub const MATRIX_FLOATS: usize = 16;

/// Batched renderer as seen by the animation core.
///
/// Slots are registered once, densely and in id order, right after the tree
/// is built. Each frame then submits exactly one transform per slot.
pub trait Renderer {
    /// Number of instance slots the renderer can hold
    fn capacity(&self) -> usize;

    /// Slots registered so far
    fn registered(&self) -> usize;

    /// Bind slot `id` to `geometry`. Slots must arrive as `0, 1, 2, ...`
    /// and never exceed `capacity`.
    fn register_geometry(&mut self, id: NodeId, geometry: GeometryHandle) -> Result<(), TreeError>;

    /// World transforms indexed by slot id; one consolidated draw per call
    fn submit_frame(&mut self, transforms: &[Mat4]);
}

/// CPU side of a batched draw: per-slot geometry plus a packed matrix array
#[derive(Debug, Clone)]
pub struct InstanceBuffer {
    capacity: usize,
    geometry: Vec<GeometryHandle>,
    matrices: Vec<f32>,
    submitted_frames: u64,
}

impl InstanceBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            geometry: Vec::with_capacity(capacity),
            matrices: Vec::with_capacity(capacity * MATRIX_FLOATS),
            submitted_frames: 0,
        }
    }

    pub fn geometry(&self, id: NodeId) -> Option<GeometryHandle> {
        self.geometry.get(id).copied()
    }

    /// Column-major matrices, 16 floats per slot in id order
    pub fn packed(&self) -> &[f32] {
        &self.matrices
    }

    /// Matrix last submitted for `id`
    pub fn matrix(&self, id: NodeId) -> Option<Mat4> {
        let start = id * MATRIX_FLOATS;
        let chunk = self.matrices.get(start..start + MATRIX_FLOATS)?;
        let mut data = [0.0; MATRIX_FLOATS];
        data.copy_from_slice(chunk);
        Some(Mat4 { data })
    }

    pub fn submitted_frames(&self) -> u64 {
        self.submitted_frames
    }
}

impl Renderer for InstanceBuffer {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn registered(&self) -> usize {
        self.geometry.len()
    }

    fn register_geometry(&mut self, id: NodeId, geometry: GeometryHandle) -> Result<(), TreeError> {
        let next = self.geometry.len();
        if id != next {
            return Err(TreeError::PreconditionViolated(format!(
                "slot {id} registered out of order, expected {next}"
            )));
        }
        if next >= self.capacity {
            return Err(TreeError::InvalidArgument(format!(
                "instance buffer is full at {} slots",
                self.capacity
            )));
        }
        self.geometry.push(geometry);
        Ok(())
    }

    fn submit_frame(&mut self, transforms: &[Mat4]) {
        debug_assert_eq!(transforms.len(), self.geometry.len());
        self.matrices.clear();
        for m in transforms {
            self.matrices.extend_from_slice(m.as_slice());
        }
        self.submitted_frames += 1;
    }
}
