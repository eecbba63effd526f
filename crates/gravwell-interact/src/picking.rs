//! Ray picking against body spheres.

use gravwell_math::{Ray, Vec3};
use gravwell_solver::MassObject;
use gravwell_types::MassId;

/// The body a ray hit first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub id: MassId,
    /// Distance along the ray.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Nearest body whose sphere (world position, radius) the ray hits.
///
/// Ties keep the earlier body in iteration order.
pub fn pick_nearest<'a>(
    ray: &Ray,
    objects: impl IntoIterator<Item = &'a MassObject>,
) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for object in objects {
        let Some(t) = ray.intersect_sphere(object.world_position(), object.radius()) else {
            continue;
        };
        if best.map_or(true, |hit| t < hit.distance) {
            best = Some(PickHit {
                id: object.id(),
                distance: t,
                point: ray.at(t),
            });
        }
    }
    best
}
