//! Tuned defaults for the fabric and the deformation kernel.
//!
//! None of these are physical constants. They shape the picture and are
//! exposed again through the scene configuration so they can be changed.

/// Default edge length of the square fabric (world units).
pub const DEFAULT_FABRIC_SIZE: f32 = 100.0;

/// Default number of grid cells along each fabric edge.
pub const DEFAULT_FABRIC_DIVISIONS: u32 = 50;

/// Default fabric tilt about the world X axis (radians).
pub const DEFAULT_FABRIC_TILT: f32 = -std::f32::consts::PI / 6.0;

/// Kernel spread per unit of radius (`spread = radius * K`).
pub const DEFAULT_SPREAD_FACTOR: f32 = 5.0;

/// Influence cutoff in units of spread (`d < spread * C`).
pub const DEFAULT_CUTOFF_FACTOR: f32 = 10.0;

/// Planet mass per unit of radius.
pub const PLANET_MASS_PER_RADIUS: f32 = 5.0;

/// Radius of the collapsed ("black hole") body.
pub const COLLAPSED_RADIUS: f32 = 5.0;

/// Mass of the collapsed body.
pub const COLLAPSED_MASS: f32 = 50.0;

/// Fraction of the fabric extent used for randomized spawns.
pub const DEFAULT_SPAWN_RANGE_FACTOR: f32 = 0.8;

/// Height above the fabric at which planets are dropped.
pub const DEFAULT_DROP_HEIGHT: f32 = 10.0;

/// World Y placeholder for a freshly spawned collapsed body.
pub const DEFAULT_COLLAPSED_SPAWN_HEIGHT: f32 = 5.0;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-6;
