//! Bridge to the page's batched mesh (three.js `BatchedMesh` or similar).
//!
//! The host passes an object with these members:
//!
//! ```text
//! maxInstanceCount: number
//! addGeometry(positions: Float32Array, normals: Float32Array, indices: Uint32Array): number
//! addInstance(geometryId: number): number
//! setMatrices(matrices: Float32Array)        // 16 column-major floats per instance
//! setCamera(view: Float32Array, projection: Float32Array)
//! setSize(width: number, height: number)
//! render()
//! ```

use js_sys::{Float32Array, Uint32Array};
use wasm_bindgen::prelude::*;
use crate::error::TreeError;
use crate::growth::NodeId;
use crate::math::Mat4;
use crate::mesh::{GeometryCatalog, GeometryHandle};
use super::backend::{InstanceBuffer, Renderer};
use super::camera::{Camera, Viewport};

#[wasm_bindgen]
extern "C" {
    /// Host-side batched mesh
    pub type BatchedBackend;

    #[wasm_bindgen(method, getter, js_name = maxInstanceCount)]
    fn max_instance_count(this: &BatchedBackend) -> u32;

    #[wasm_bindgen(method, js_name = addGeometry)]
    fn add_geometry(
        this: &BatchedBackend,
        positions: &Float32Array,
        normals: &Float32Array,
        indices: &Uint32Array,
    ) -> u32;

    #[wasm_bindgen(method, js_name = addInstance)]
    fn add_instance(this: &BatchedBackend, geometry_id: u32) -> u32;

    #[wasm_bindgen(method, js_name = setMatrices)]
    fn set_matrices(this: &BatchedBackend, matrices: &Float32Array);

    #[wasm_bindgen(method, js_name = setCamera)]
    fn set_camera(this: &BatchedBackend, view: &Float32Array, projection: &Float32Array);

    #[wasm_bindgen(method, js_name = setSize)]
    fn set_size(this: &BatchedBackend, width: u32, height: u32);

    #[wasm_bindgen(method)]
    fn render(this: &BatchedBackend);
}

/// Renderer that mirrors an `InstanceBuffer` into the host's batched mesh
pub struct JsBatchedRenderer {
    backend: BatchedBackend,
    instances: InstanceBuffer,
    /// Backend geometry id per `GeometryHandle::index`
    geometry_ids: [u32; 2],
}

impl JsBatchedRenderer {
    /// Upload every catalog mesh to the backend once
    pub fn new(backend: BatchedBackend, catalog: &GeometryCatalog) -> Self {
        let capacity = backend.max_instance_count() as usize;
        let mut geometry_ids = [0; 2];

        for (handle, mesh) in catalog.iter() {
            let positions = Float32Array::from(mesh.positions().as_slice());
            let normals = Float32Array::from(mesh.normals().as_slice());
            let indices = Uint32Array::from(mesh.index_data());
            geometry_ids[handle.index()] = backend.add_geometry(&positions, &normals, &indices);
            log::debug!(
                "Uploaded {:?} geometry: {} vertices, {} triangles",
                handle,
                mesh.vertex_count(),
                mesh.triangle_count()
            );
        }

        Self {
            backend,
            instances: InstanceBuffer::new(capacity),
            geometry_ids,
        }
    }

    pub fn instances(&self) -> &InstanceBuffer {
        &self.instances
    }

    pub fn update_camera(&self, camera: &Camera) {
        let view = Float32Array::from(camera.view().as_slice().as_slice());
        let projection = Float32Array::from(camera.projection().as_slice().as_slice());
        self.backend.set_camera(&view, &projection);
    }

    pub fn resize(&self, viewport: &Viewport) {
        self.backend.set_size(viewport.width(), viewport.height());
    }
}

impl Renderer for JsBatchedRenderer {
    fn capacity(&self) -> usize {
        self.instances.capacity()
    }

    fn registered(&self) -> usize {
        self.instances.registered()
    }

    /// Matrices are uploaded in slot order, so the backend must number its
    /// instances the same way.
    fn register_geometry(&mut self, id: NodeId, geometry: GeometryHandle) -> Result<(), TreeError> {
        self.instances.register_geometry(id, geometry)?;
        let instance = self.backend.add_instance(self.geometry_ids[geometry.index()]);
        if instance as usize != id {
            log::error!("Backend assigned instance {} to slot {}", instance, id);
            return Err(TreeError::PreconditionViolated(format!(
                "backend assigned instance {instance} to slot {id}"
            )));
        }
        Ok(())
    }

    fn submit_frame(&mut self, transforms: &[Mat4]) {
        self.instances.submit_frame(transforms);
        let packed = Float32Array::from(self.instances.packed());
        self.backend.set_matrices(&packed);
        self.backend.render();
    }
}
