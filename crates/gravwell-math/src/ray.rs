//! Rays and planes.
//!
//! Conventions follow the usual scene-graph ones: a ray has a unit
//! direction and only hits things in front of its origin; a plane is
//! `normal · p + constant = 0` with a unit normal.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use gravwell_types::constants::EPSILON;

/// A half-line starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// An infinite plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed offset: points `p` on the plane satisfy `normal · p + constant = 0`.
    pub constant: f32,
}

impl Ray {
    /// Creates a ray; returns `None` if `direction` cannot be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to `plane`, if the ray hits it in front of the origin.
    ///
    /// A ray parallel to the plane never hits it.
    pub fn distance_to_plane(&self, plane: &Plane) -> Option<f32> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() < EPSILON {
            return None;
        }
        let t = -(plane.normal.dot(self.origin) + plane.constant) / denom;
        (t >= 0.0).then_some(t)
    }

    /// Intersection point with `plane`.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        self.distance_to_plane(plane).map(|t| self.at(t))
    }

    /// Distance to the first surface hit on a sphere.
    ///
    /// If the origin is inside the sphere the exit point is returned.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let to_center = center - self.origin;
        let tca = to_center.dot(self.direction);
        let d2 = to_center.length_squared() - tca * tca;
        let r2 = radius * radius;
        if d2 > r2 {
            return None;
        }
        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;
        if t1 < 0.0 {
            return None;
        }
        Some(if t0 < 0.0 { t1 } else { t0 })
    }
}

impl Plane {
    /// Plane with the given normal passing through `point`.
    ///
    /// Returns `None` for a zero normal.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self {
            normal,
            constant: -normal.dot(point),
        })
    }

    /// Signed distance from the plane to `point` (positive on the normal side).
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}
