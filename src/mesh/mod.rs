pub mod branch;
pub mod catalog;

pub use branch::{Mesh, Vertex};
pub use catalog::{GeometryCatalog, GeometryHandle, MeshParams};
