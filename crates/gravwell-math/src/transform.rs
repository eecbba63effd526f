//! World placement of the fabric.
//!
//! The fabric's sample grid lives in its own local frame: the XZ plane at
//! `y = 0`, centered on the origin. `FabricTransform` holds where that
//! frame sits in the world and caches both the world matrix and its
//! inverse so every local↔world conversion in the engine goes through
//! one place.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position and orientation of the fabric in world space.
///
/// The cached matrices are private and rebuilt by every setter, so the
/// inverse can never fall out of sync with the forward transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabricTransform {
    translation: Vec3,
    rotation: Quat,
    world: Mat4,
    inverse_world: Mat4,
}

impl FabricTransform {
    /// Creates a transform from a translation and rotation.
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        let rotation = rotation.normalize();
        let world = Mat4::from_rotation_translation(rotation, translation);
        Self {
            translation,
            rotation,
            world,
            inverse_world: world.inverse(),
        }
    }

    /// Creates a transform tilted about the world X axis by `tilt` radians.
    pub fn tilted(translation: Vec3, tilt: f32) -> Self {
        Self::new(translation, Quat::from_rotation_x(tilt))
    }

    /// The identity placement (local space == world space).
    pub fn identity() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }

    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Local → world matrix.
    #[inline]
    pub fn world_matrix(&self) -> Mat4 {
        self.world
    }

    /// World → local matrix.
    #[inline]
    pub fn inverse_world_matrix(&self) -> Mat4 {
        self.inverse_world
    }

    /// Moves the fabric, refreshing the cached matrices.
    pub fn set_translation(&mut self, translation: Vec3) {
        *self = Self::new(translation, self.rotation);
    }

    /// Reorients the fabric, refreshing the cached matrices.
    pub fn set_rotation(&mut self, rotation: Quat) {
        *self = Self::new(self.translation, rotation);
    }

    /// Converts a world-space point into fabric-local space.
    #[inline]
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        self.inverse_world.transform_point3(world)
    }

    /// Converts a fabric-local point into world space.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.world.transform_point3(local)
    }

    /// Rotates a local direction into world space (no translation).
    #[inline]
    pub fn direction_to_world(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// The fabric's local +Y axis expressed in world space.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.direction_to_world(Vec3::Y)
    }

    /// Rotation about the X axis, in radians.
    ///
    /// For the tilted-plane placements this engine builds, this is the
    /// whole rotation; other components are ignored.
    pub fn tilt_angle(&self) -> f32 {
        let (x, _, _) = self.rotation.to_euler(EulerRot::XYZ);
        x
    }

    /// Where the vertical world line through `(x, z)` meets the fabric's
    /// rest plane. Returns `None` when the fabric stands vertical.
    pub fn vertical_projection(&self, x: f32, z: f32) -> Option<Vec3> {
        let n = self.up();
        if n.y.abs() < 1.0e-6 {
            return None;
        }
        let c = self.translation;
        let y = c.y - (n.x * (x - c.x) + n.z * (z - c.z)) / n.y;
        Some(Vec3::new(x, y, z))
    }
}

impl Default for FabricTransform {
    fn default() -> Self {
        Self::identity()
    }
}
