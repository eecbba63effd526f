//! Object registry: every placed body, in insertion order.
//!
//! The registry validates bodies on the way in and never removes them.
//! Iteration order is insertion order, which the simulation step relies
//! on when it walks the bodies twice per step.

use serde::{Deserialize, Serialize};

use gravwell_math::Vec3;
use gravwell_types::{MassId, SpacetimeError, SpacetimeResult};

/// What kind of body a mass is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassKind {
    /// A planet built from the palette entry at `preset`.
    Planet { preset: usize },
    /// The fixed-size collapsed body.
    Collapsed,
}

/// Everything needed to create a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassSpec {
    pub name: String,
    pub kind: MassKind,
    pub radius: f32,
    pub mass: f32,
    /// Render color as `0xRRGGBB`.
    pub color: u32,
    /// Initial world position. Y is a placeholder until the first step.
    pub position: Vec3,
}

/// A placed body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassObject {
    id: MassId,
    name: String,
    kind: MassKind,
    radius: f32,
    mass: f32,
    color: u32,
    world_position: Vec3,
}

impl MassObject {
    #[inline]
    pub fn id(&self) -> MassId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> MassKind {
        self.kind
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Authoritative world position. Rendering mirrors this.
    #[inline]
    pub fn world_position(&self) -> Vec3 {
        self.world_position
    }

    pub(crate) fn set_planar(&mut self, x: f32, z: f32) {
        self.world_position.x = x;
        self.world_position.z = z;
    }

    pub(crate) fn set_height(&mut self, y: f32) {
        self.world_position.y = y;
    }
}

/// Insertion-ordered collection of bodies.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    objects: Vec<MassObject>,
    next_id: u32,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `spec` and appends it, returning the new id.
    ///
    /// Radius and mass must be positive and finite; a rejected spec never
    /// enters the registry.
    pub fn add(&mut self, spec: MassSpec) -> SpacetimeResult<MassId> {
        if !(spec.radius.is_finite() && spec.radius > 0.0) {
            return Err(SpacetimeError::InvalidMass(format!(
                "radius must be positive, got {}",
                spec.radius
            )));
        }
        if !(spec.mass.is_finite() && spec.mass > 0.0) {
            return Err(SpacetimeError::InvalidMass(format!(
                "mass must be positive, got {}",
                spec.mass
            )));
        }
        if !spec.position.is_finite() {
            return Err(SpacetimeError::InvalidMass(format!(
                "position must be finite, got {}",
                spec.position
            )));
        }

        let id = MassId(self.next_id);
        self.next_id += 1;
        self.objects.push(MassObject {
            id,
            name: spec.name,
            kind: spec.kind,
            radius: spec.radius,
            mass: spec.mass,
            color: spec.color,
            world_position: spec.position,
        });
        Ok(id)
    }

    /// All bodies in insertion order.
    #[inline]
    pub fn all(&self) -> &[MassObject] {
        &self.objects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MassObject> {
        self.objects.iter()
    }

    pub fn find(&self, id: MassId) -> Option<&MassObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: MassId) -> Option<&mut MassObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, MassObject> {
        self.objects.iter_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a MassObject;
    type IntoIter = std::slice::Iter<'a, MassObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
