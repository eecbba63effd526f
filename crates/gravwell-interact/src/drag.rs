//! Drag controller: select a body, slide it over the fabric, release.
//!
//! ```text
//!            pointer_down + hit
//!   Idle ───────────────────────▶ Dragging { id, plane }
//!    ▲                                   │ pointer_move: X/Z from ray ∩ plane,
//!    │            pointer_up             │ clamped to the fabric, then step
//!    └───────────────────────────────────┘
//! ```
//!
//! The drag plane passes through the body and is parallel to the fabric.
//! The controller only writes X/Z; heights come from the step.

use tracing::debug;

use gravwell_math::{Plane, Vec2};
use gravwell_solver::Simulation;
use gravwell_telemetry::EventKind;
use gravwell_types::{MassId, SpacetimeError, SpacetimeResult};

use crate::camera::RayCaster;
use crate::picking::pick_nearest;

/// Camera navigation that must be paused while a body is dragged.
pub trait NavigationControl {
    fn set_navigation_enabled(&mut self, enabled: bool);
}

/// Selection state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { id: MassId, plane: Plane },
}

/// Pointer-driven drag state machine.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// The body being dragged, if any.
    pub fn selected(&self) -> Option<MassId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { id, .. } => Some(id),
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Picks the nearest body under `ndc` and starts dragging it.
    ///
    /// Ignored while a drag is in progress. Returns the selected body.
    pub fn pointer_down(
        &mut self,
        ndc: Vec2,
        camera: &dyn RayCaster,
        navigation: &mut dyn NavigationControl,
        sim: &mut Simulation,
    ) -> Option<MassId> {
        if self.is_dragging() {
            return None;
        }
        let ray = camera.ray(ndc)?;
        let hit = pick_nearest(&ray, sim.registry())?;
        let object = sim.registry().find(hit.id)?;

        let up = sim.fabric().transform().up();
        let plane = Plane::from_normal_and_point(up, object.world_position())?;

        self.state = DragState::Dragging { id: hit.id, plane };
        navigation.set_navigation_enabled(false);
        debug!(id = %hit.id, distance = hit.distance, "drag started");
        sim.emit(EventKind::DragStarted { id: hit.id });
        Some(hit.id)
    }

    /// Moves the dragged body to where the pointer ray meets the drag plane.
    ///
    /// Returns `Ok(false)` when idle or when the ray misses the plane
    /// (parallel, or plane behind the camera).
    pub fn pointer_move(
        &mut self,
        ndc: Vec2,
        camera: &dyn RayCaster,
        sim: &mut Simulation,
    ) -> SpacetimeResult<bool> {
        let DragState::Dragging { id, plane } = self.state else {
            return Ok(false);
        };
        let Some(hit) = camera.ray(ndc).and_then(|ray| ray.intersect_plane(&plane)) else {
            return Ok(false);
        };

        let fabric = sim.fabric();
        let center = fabric.transform().translation();
        let half_x = fabric.half_size();
        let half_z = fabric.effective_z_bound();
        let x = hit.x.clamp(center.x - half_x, center.x + half_x);
        let z = hit.z.clamp(center.z - half_z, center.z + half_z);

        sim.set_planar_position(id, x, z)?;
        sim.step();
        Ok(true)
    }

    /// Ends the drag: re-steps, clears the selection, resumes navigation.
    pub fn pointer_up(
        &mut self,
        navigation: &mut dyn NavigationControl,
        sim: &mut Simulation,
    ) -> SpacetimeResult<()> {
        let DragState::Dragging { id, .. } = self.state else {
            return Ok(());
        };
        sim.step();
        self.state = DragState::Idle;
        navigation.set_navigation_enabled(true);

        let position = sim
            .registry()
            .find(id)
            .ok_or(SpacetimeError::UnknownMass(id))?
            .world_position();
        debug!(id = %id, x = position.x, z = position.z, "drag ended");
        sim.emit(EventKind::DragEnded {
            id,
            position: position.to_array(),
        });
        Ok(())
    }
}
