//! Randomized spawn placement.
//!
//! Planets cycle through the palette and are dropped above the fabric at a
//! random spot within a shrunken footprint; collapsed bodies are placed
//! anywhere in the central half of the fabric. Heights are placeholders,
//! the first step seats every body on the surface.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gravwell_math::Vec3;

use crate::config::SpawnConfig;
use crate::fabric::Fabric;
use crate::presets::PLANET_PALETTE;
use crate::registry::MassSpec;

/// Produces creation specs for new bodies.
pub struct Spawner {
    rng: StdRng,
    next_preset: usize,
    config: SpawnConfig,
}

impl Spawner {
    /// Creates a spawner. `seed = None` seeds from OS entropy.
    pub fn new(config: SpawnConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            next_preset: 0,
            config,
        }
    }

    /// Palette slot the next planet will use.
    #[inline]
    pub fn next_preset(&self) -> usize {
        self.next_preset
    }

    /// Uniform sample in `[-0.5, 0.5)`.
    fn centered(&mut self) -> f32 {
        self.rng.gen::<f32>() - 0.5
    }

    /// Spec for the next planet in the palette, advancing the cycle.
    pub fn planet(&mut self, fabric: &Fabric) -> MassSpec {
        let preset = self.next_preset;
        self.next_preset = (self.next_preset + 1) % PLANET_PALETTE.len();

        let radius = PLANET_PALETTE[preset].radius;
        let x_span = (fabric.half_size() * self.config.range_factor - radius).max(0.0);
        let z_span = (fabric.effective_z_bound() * self.config.range_factor - radius).max(0.0);

        let x = self.centered() * x_span;
        let z = self.centered() * z_span;
        let y = fabric.transform().translation().y + self.config.drop_height + radius;

        MassSpec::planet(preset, Vec3::new(x, y, z))
    }

    /// Spec for a collapsed body.
    pub fn collapsed(&mut self, fabric: &Fabric) -> MassSpec {
        let x = self.centered() * fabric.half_size();
        let z = self.centered() * fabric.effective_z_bound();
        MassSpec::collapsed(Vec3::new(x, self.config.collapsed_height, z))
    }
}
