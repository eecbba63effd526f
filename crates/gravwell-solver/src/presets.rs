//! Body presets: the planet palette and the collapsed body.

use gravwell_math::Vec3;
use gravwell_types::constants::{COLLAPSED_MASS, COLLAPSED_RADIUS, PLANET_MASS_PER_RADIUS};

use crate::registry::{MassKind, MassSpec};

/// One entry of the planet palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPreset {
    pub name: &'static str,
    pub radius: f32,
    /// `0xRRGGBB`
    pub color: u32,
}

/// Planets are added in this order, wrapping around.
pub const PLANET_PALETTE: [PlanetPreset; 6] = [
    PlanetPreset { name: "Ruby Planet (Small)", radius: 1.5, color: 0xE0115F },
    PlanetPreset { name: "Sapphire Planet (Medium)", radius: 3.0, color: 0x0F52BA },
    PlanetPreset { name: "Emerald Planet (Large)", radius: 4.5, color: 0x50C878 },
    PlanetPreset { name: "Gold Planet (Small)", radius: 1.5, color: 0xFFD700 },
    PlanetPreset { name: "Amethyst Planet (Medium)", radius: 3.0, color: 0x9966CC },
    PlanetPreset { name: "Citrine Planet (Large)", radius: 4.5, color: 0xE4D00A },
];

pub const COLLAPSED_NAME: &str = "Collapsed Body";
pub const COLLAPSED_COLOR: u32 = 0x111111;

impl PlanetPreset {
    /// Planet mass scales with radius.
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius * PLANET_MASS_PER_RADIUS
    }
}

impl MassSpec {
    /// A planet from palette slot `preset` (taken modulo the palette length).
    pub fn planet(preset: usize, position: Vec3) -> Self {
        let slot = preset % PLANET_PALETTE.len();
        let p = &PLANET_PALETTE[slot];
        Self {
            name: p.name.to_string(),
            kind: MassKind::Planet { preset: slot },
            radius: p.radius,
            mass: p.mass(),
            color: p.color,
            position,
        }
    }

    /// The collapsed body.
    pub fn collapsed(position: Vec3) -> Self {
        Self {
            name: COLLAPSED_NAME.to_string(),
            kind: MassKind::Collapsed,
            radius: COLLAPSED_RADIUS,
            mass: COLLAPSED_MASS,
            color: COLLAPSED_COLOR,
            position,
        }
    }
}
