//! # gravwell-solver
//!
//! The deformation engine: fabric state, the mass registry, and the
//! closed-form field that couples them.
//!
//! ## Key Types
//!
//! - [`Simulation`]: owns fabric, registry and field; [`Simulation::step`]
//!   re-derives every height from current body placement
//! - [`DeformationField`]: superposition of [`FalloffKernel`]s
//! - [`Fabric`]: sample grid with immutable rest XZ and mutable heights
//! - [`Registry`]: insertion-ordered, validated bodies
//! - [`SceneConfig`]: TOML-loadable scene configuration

pub mod config;
pub mod fabric;
pub mod field;
pub mod kernel;
pub mod presets;
pub mod registry;
pub mod simulation;
pub mod spawner;

pub use config::{FabricConfig, FieldConfig, Footprint, SceneConfig, SpawnConfig};
pub use fabric::Fabric;
pub use field::{DeformationField, MassEntry};
pub use kernel::{FalloffKernel, GaussianKernel};
pub use presets::{PlanetPreset, PLANET_PALETTE};
pub use registry::{MassKind, MassObject, MassSpec, Registry};
pub use simulation::{Simulation, SimulationBuilder, StepReport};
pub use spawner::Spawner;
