//! # gravwell-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`]: The core mesh type. Stores positions, normals, UVs,
//!   and triangle indices in contiguous SoA buffers.
//! - Procedural generators for the fabric grid (XZ plane) and body spheres.
//! - Area-weighted vertex normal recomputation.

pub mod generators;
pub mod mesh;
pub mod normals;

pub use mesh::TriangleMesh;
