pub mod backend;
pub mod camera;
pub mod js;

pub use backend::{InstanceBuffer, Renderer, MATRIX_FLOATS};
pub use camera::{Camera, CameraParams, Viewport};
pub use js::{BatchedBackend, JsBatchedRenderer};
