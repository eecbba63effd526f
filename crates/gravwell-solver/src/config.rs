//! Scene configuration.
//!
//! Everything that shapes a scene: the fabric's size, resolution and
//! placement, the deformation kernel's tuning constants, and how bodies
//! are spawned. Loaded from TOML; every section is optional and falls
//! back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use gravwell_math::{FabricTransform, Vec3};
use gravwell_types::constants::{
    DEFAULT_COLLAPSED_SPAWN_HEIGHT, DEFAULT_CUTOFF_FACTOR, DEFAULT_DROP_HEIGHT,
    DEFAULT_FABRIC_DIVISIONS, DEFAULT_FABRIC_SIZE, DEFAULT_FABRIC_TILT,
    DEFAULT_SPAWN_RANGE_FACTOR, DEFAULT_SPREAD_FACTOR,
};
use gravwell_types::{SpacetimeError, SpacetimeResult};

/// Top-level scene configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub fabric: FabricConfig,
    pub field: FieldConfig,
    pub spawn: SpawnConfig,
    /// Seed for spawn placement. `None` seeds from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Fabric geometry and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FabricConfig {
    /// Edge length of the square fabric.
    pub size: f32,
    /// Grid cells per edge.
    pub divisions: u32,
    /// Rotation about the world X axis (radians).
    pub tilt: f32,
    /// World position of the fabric's center.
    pub position: [f32; 3],
}

/// How a body's world position becomes its footprint on the fabric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Footprint {
    /// Project the body straight down (world −Y) onto the fabric's rest
    /// plane. Depends only on world X/Z, so repeated steps don't drift.
    #[default]
    Vertical,
    /// Transform the full world position into local space and use its X/Z.
    /// On a tilted fabric the footprint then shifts with the body's height.
    Transformed,
}

/// Deformation kernel tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// `spread = radius * spread_factor`.
    pub spread_factor: f32,
    /// Influence is exactly zero beyond `spread * cutoff_factor`.
    pub cutoff_factor: f32,
    pub footprint: Footprint,
}

/// Randomized spawn placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Fraction of the fabric extent planets may spawn in.
    pub range_factor: f32,
    /// Planets are dropped this far above the fabric center.
    pub drop_height: f32,
    /// World Y placeholder for collapsed bodies.
    pub collapsed_height: f32,
}

impl Default for FabricConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_FABRIC_SIZE,
            divisions: DEFAULT_FABRIC_DIVISIONS,
            tilt: DEFAULT_FABRIC_TILT,
            position: [0.0, 0.0, 0.0],
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            spread_factor: DEFAULT_SPREAD_FACTOR,
            cutoff_factor: DEFAULT_CUTOFF_FACTOR,
            footprint: Footprint::default(),
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            range_factor: DEFAULT_SPAWN_RANGE_FACTOR,
            drop_height: DEFAULT_DROP_HEIGHT,
            collapsed_height: DEFAULT_COLLAPSED_SPAWN_HEIGHT,
        }
    }
}

impl FabricConfig {
    /// The world placement this config describes.
    pub fn transform(&self) -> FabricTransform {
        FabricTransform::tilted(Vec3::from_array(self.position), self.tilt)
    }

    /// A flat fabric at the origin.
    pub fn flat(size: f32, divisions: u32) -> Self {
        Self {
            size,
            divisions,
            tilt: 0.0,
            position: [0.0, 0.0, 0.0],
        }
    }
}

impl SceneConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> SpacetimeResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| SpacetimeError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SpacetimeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> SpacetimeResult<String> {
        toml::to_string_pretty(self).map_err(|e| SpacetimeError::Serialization(e.to_string()))
    }

    /// Checks every value is usable.
    pub fn validate(&self) -> SpacetimeResult<()> {
        let f = &self.fabric;
        if !(f.size.is_finite() && f.size > 0.0) {
            return Err(SpacetimeError::InvalidConfig(format!(
                "fabric.size must be positive, got {}",
                f.size
            )));
        }
        if f.divisions == 0 {
            return Err(SpacetimeError::InvalidConfig(
                "fabric.divisions must be at least 1".into(),
            ));
        }
        if !f.tilt.is_finite() || f.tilt.abs() >= std::f32::consts::FRAC_PI_2 {
            return Err(SpacetimeError::InvalidConfig(format!(
                "fabric.tilt must lie strictly between -pi/2 and pi/2, got {}",
                f.tilt
            )));
        }
        if f.position.iter().any(|c| !c.is_finite()) {
            return Err(SpacetimeError::InvalidConfig(
                "fabric.position must be finite".into(),
            ));
        }

        let k = &self.field;
        if !(k.spread_factor.is_finite() && k.spread_factor > 0.0) {
            return Err(SpacetimeError::InvalidConfig(format!(
                "field.spread_factor must be positive, got {}",
                k.spread_factor
            )));
        }
        if !(k.cutoff_factor.is_finite() && k.cutoff_factor > 0.0) {
            return Err(SpacetimeError::InvalidConfig(format!(
                "field.cutoff_factor must be positive, got {}",
                k.cutoff_factor
            )));
        }

        let s = &self.spawn;
        if !(s.range_factor > 0.0 && s.range_factor <= 1.0) {
            return Err(SpacetimeError::InvalidConfig(format!(
                "spawn.range_factor must be in (0, 1], got {}",
                s.range_factor
            )));
        }
        if !s.drop_height.is_finite() || !s.collapsed_height.is_finite() {
            return Err(SpacetimeError::InvalidConfig(
                "spawn heights must be finite".into(),
            ));
        }

        Ok(())
    }
}
