//! # gravwell-math
//!
//! Geometry primitives for the gravwell engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Quat`, `Mat4`, etc.)
//! - [`FabricTransform`]: the single source of truth for local↔world conversion
//! - [`Ray`] and [`Plane`] with the intersection queries picking and dragging need

pub mod ray;
pub mod transform;

pub use ray::{Plane, Ray};
pub use transform::FabricTransform;

// Re-export glam types as the canonical math types for gravwell.
pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
