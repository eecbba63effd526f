//! Simulation step: re-derives the whole scene from body placement.
//!
//! Each step:
//!
//! ```text
//! entries  = footprint(world position) for every body, in registry order
//! heights  = field(rest_xz, entries)          for every fabric sample
//! normals  → stale
//! body.y   = to_world(lx, field(lxz, entries), lz).y + radius
//! ```
//!
//! Both passes read the same `entries`, built from the authoritative
//! positions before any Y is written. Nothing carries over from the
//! previous step except the positions themselves.

use std::time::Instant;

use tracing::{debug, info};

use gravwell_math::{FabricTransform, Vec2, Vec3};
use gravwell_telemetry::{EventBus, EventKind, EventSink, SimulationEvent};
use gravwell_types::{MassId, SpacetimeError, SpacetimeResult};

use crate::config::{Footprint, SceneConfig};
use crate::fabric::Fabric;
use crate::field::{DeformationField, MassEntry};
use crate::kernel::{FalloffKernel, GaussianKernel};
use crate::registry::{MassSpec, Registry};
use crate::spawner::Spawner;

/// Summary of one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Fabric samples written.
    pub samples: usize,
    /// Bodies re-seated.
    pub masses: usize,
    /// Deepest local fabric height after the step.
    pub min_height: f32,
    /// Wall-clock time (seconds).
    pub wall_time: f64,
}

/// Footprint of a world-space point on the fabric, in local XZ.
pub fn footprint(transform: &FabricTransform, mode: Footprint, world: Vec3) -> Vec2 {
    let anchor = match mode {
        Footprint::Vertical => transform.vertical_projection(world.x, world.z).unwrap_or(world),
        Footprint::Transformed => world,
    };
    let local = transform.to_local(anchor);
    Vec2::new(local.x, local.z)
}

/// The fabric, its bodies, and the field that couples them.
pub struct Simulation {
    fabric: Fabric,
    registry: Registry,
    field: DeformationField,
    footprint: Footprint,
    spawner: Spawner,
    bus: EventBus,
    steps: u64,
}

/// Assembles a [`Simulation`]. A fabric is mandatory.
pub struct SimulationBuilder {
    config: SceneConfig,
    fabric: Option<Fabric>,
    kernel: Option<Box<dyn FalloffKernel>>,
    bus: EventBus,
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self {
            config: SceneConfig::default(),
            fabric: None,
            kernel: None,
            bus: EventBus::new(),
        }
    }

    /// Field, footprint and spawn settings. Does not build a fabric.
    pub fn config(mut self, config: SceneConfig) -> Self {
        self.config = config;
        self
    }

    pub fn fabric(mut self, fabric: Fabric) -> Self {
        self.fabric = Some(fabric);
        self
    }

    /// Replaces the Gaussian kernel the config would build.
    pub fn kernel(mut self, kernel: Box<dyn FalloffKernel>) -> Self {
        self.kernel = Some(kernel);
        self
    }

    pub fn sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.bus.add_sink(sink);
        self
    }

    /// Fails with [`SpacetimeError::PrerequisiteMissing`] if no fabric was given.
    pub fn build(self) -> SpacetimeResult<Simulation> {
        let fabric = self
            .fabric
            .ok_or(SpacetimeError::PrerequisiteMissing("fabric"))?;
        let kernel = self
            .kernel
            .unwrap_or_else(|| Box::new(GaussianKernel::from(&self.config.field)));

        Ok(Simulation {
            fabric,
            registry: Registry::new(),
            field: DeformationField::new(kernel),
            footprint: self.config.field.footprint,
            spawner: Spawner::new(self.config.spawn.clone(), self.config.seed),
            bus: self.bus,
            steps: 0,
        })
    }
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    /// Validates `config`, builds its fabric, and assembles the simulation.
    pub fn from_config(config: SceneConfig) -> SpacetimeResult<Self> {
        config.validate()?;
        let fabric = Fabric::new(&config.fabric)?;
        SimulationBuilder::new().config(config).fabric(fabric).build()
    }

    #[inline]
    pub fn fabric(&self) -> &Fabric {
        &self.fabric
    }

    /// Mutable fabric access for the renderer (normal refresh).
    #[inline]
    pub fn fabric_mut(&mut self) -> &mut Fabric {
        &mut self.fabric
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn field(&self) -> &DeformationField {
        &self.field
    }

    #[inline]
    pub fn footprint_mode(&self) -> Footprint {
        self.footprint
    }

    /// Completed steps so far.
    #[inline]
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Queue a telemetry event stamped with the current step count.
    pub fn emit(&mut self, kind: EventKind) {
        self.bus.emit(SimulationEvent::new(self.steps, kind));
    }

    /// Dispatch queued telemetry to the sinks.
    pub fn flush_events(&mut self) {
        self.bus.flush();
    }

    /// Adds a body and immediately re-steps so it is seated on the fabric.
    pub fn add(&mut self, spec: MassSpec) -> SpacetimeResult<MassId> {
        let (name, radius, mass) = (spec.name.clone(), spec.radius, spec.mass);
        let id = self.registry.add(spec)?;
        info!(%id, name = %name, radius, mass, "mass added");
        self.emit(EventKind::MassAdded { id, name, radius, mass });
        self.step();
        Ok(id)
    }

    /// Adds the next planet of the palette at a random spot.
    pub fn add_planet(&mut self) -> SpacetimeResult<MassId> {
        let spec = self.spawner.planet(&self.fabric);
        self.add(spec)
    }

    /// Adds a collapsed body at a random spot.
    pub fn add_collapsed(&mut self) -> SpacetimeResult<MassId> {
        let spec = self.spawner.collapsed(&self.fabric);
        self.add(spec)
    }

    /// Moves a body in world X/Z. Its Y is left for the next step.
    pub fn set_planar_position(&mut self, id: MassId, x: f32, z: f32) -> SpacetimeResult<()> {
        let object = self
            .registry
            .find_mut(id)
            .ok_or(SpacetimeError::UnknownMass(id))?;
        object.set_planar(x, z);
        Ok(())
    }

    /// Re-places the fabric and re-steps so heights and bodies follow it.
    pub fn set_fabric_transform(&mut self, transform: FabricTransform) -> StepReport {
        self.fabric.set_transform(transform);
        self.step()
    }

    /// Current field input: one entry per body, in registry order.
    pub fn mass_entries(&self) -> Vec<MassEntry> {
        let transform = self.fabric.transform();
        self.registry
            .iter()
            .map(|o| MassEntry {
                local_xz: footprint(transform, self.footprint, o.world_position()),
                mass: o.mass(),
                radius: o.radius(),
            })
            .collect()
    }

    /// Field height at a local XZ point for the current placement.
    pub fn height_at(&self, local_xz: Vec2) -> f32 {
        self.field.evaluate(local_xz, &self.mass_entries())
    }

    /// Recomputes fabric heights, then every body's resting height.
    pub fn step(&mut self) -> StepReport {
        let start = Instant::now();

        let entries = self.mass_entries();
        let field = &self.field;

        self.fabric
            .write_heights(|rest| field.evaluate(rest, &entries));

        // Self-term included: a body sits on the same surface the grid shows.
        let transform = *self.fabric.transform();
        for (object, entry) in self.registry.iter_mut().zip(&entries) {
            let h = field.evaluate(entry.local_xz, &entries);
            let surface = transform.to_world(Vec3::new(entry.local_xz.x, h, entry.local_xz.y));
            object.set_height(surface.y + object.radius());
        }

        self.steps += 1;
        let report = StepReport {
            samples: self.fabric.sample_count(),
            masses: entries.len(),
            min_height: self.fabric.min_height(),
            wall_time: start.elapsed().as_secs_f64(),
        };
        debug!(
            step = self.steps,
            masses = report.masses,
            min_height = report.min_height,
            "fabric re-derived"
        );
        self.emit(EventKind::StepCompleted {
            samples: report.samples as u32,
            masses: report.masses as u32,
            min_height: report.min_height,
            wall_time: report.wall_time,
        });
        report
    }
}
