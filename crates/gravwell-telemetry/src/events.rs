//! Simulation event types.
//!
//! Events are lightweight value types tagged with the step counter at
//! the moment they were emitted.

use serde::{Deserialize, Serialize};

use gravwell_types::MassId;

/// A simulation event emitted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Number of completed simulation steps when the event was emitted.
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A body entered the registry.
    MassAdded {
        id: MassId,
        name: String,
        radius: f32,
        mass: f32,
    },

    /// The fabric and every body height were re-derived.
    StepCompleted {
        /// Number of fabric samples written.
        samples: u32,
        /// Number of bodies re-seated.
        masses: u32,
        /// Deepest local height on the fabric (≤ 0).
        min_height: f32,
        /// Wall-clock time for the step (seconds).
        wall_time: f64,
    },

    /// A pointer press picked a body.
    DragStarted { id: MassId },

    /// The pointer released the dragged body.
    DragEnded {
        id: MassId,
        /// Final world position `[x, y, z]`.
        position: [f32; 3],
    },
}

impl SimulationEvent {
    /// Creates a new event stamped with the given step counter.
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }
}
