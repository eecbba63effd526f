//! Pick rays from a camera.

use gravwell_math::{Mat4, Ray, Vec2, Vec3};

/// Produces world-space rays for points on the screen.
pub trait RayCaster {
    /// Ray through `ndc` (both axes in `[-1, 1]`, +Y up), or `None` if the
    /// camera cannot produce one.
    fn ray(&self, ndc: Vec2) -> Option<Ray>;
}

/// A perspective camera described by its eye and inverse view-projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// World position of the eye.
    pub eye: Vec3,
    /// Clip space to world space (`(projection * view)⁻¹`).
    pub world_from_clip: Mat4,
}

impl PerspectiveCamera {
    pub fn new(eye: Vec3, world_from_clip: Mat4) -> Self {
        Self {
            eye,
            world_from_clip,
        }
    }

    /// Right-handed camera at `eye` looking at `target`, with a `[0, 1]`
    /// depth range.
    pub fn look_at(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let view = Mat4::look_at_rh(eye, target, up);
        let projection = Mat4::perspective_rh(fov_y, aspect, near, far);
        Self::new(eye, (projection * view).inverse())
    }
}

impl RayCaster for PerspectiveCamera {
    fn ray(&self, ndc: Vec2) -> Option<Ray> {
        // Any depth strictly inside the frustum lies on the pixel's ray; 0.5
        // is inside for both standard and reverse-Z projections.
        let through = self
            .world_from_clip
            .project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        if !through.is_finite() {
            return None;
        }
        Ray::new(self.eye, through - self.eye)
    }
}

/// Window pixel coordinates (origin top-left) to NDC.
///
/// Returns `None` for an empty viewport.
pub fn ndc_from_cursor(cursor: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / viewport.x * 2.0 - 1.0,
        -(cursor.y / viewport.y) * 2.0 + 1.0,
    ))
}
