//! Falloff kernels: the per-mass displacement shape.
//!
//! A kernel turns one mass and a squared planar distance into a local-Y
//! displacement. The field sums kernels; it never looks inside one.

use crate::config::FieldConfig;

/// Trait for displacement kernels.
///
/// Implementations must return exactly `0.0` outside their support so
/// regions far from every mass stay perfectly flat.
pub trait FalloffKernel: Send + Sync {
    /// Displacement contributed by a body of `mass` and `radius` at squared
    /// planar distance `distance_sq` from its footprint.
    fn displacement(&self, distance_sq: f32, mass: f32, radius: f32) -> f32;

    /// Squared distance at and beyond which the field skips this kernel.
    /// `None` means unbounded.
    fn support_sq(&self, radius: f32) -> Option<f32>;

    /// Returns the kernel's name.
    fn name(&self) -> &str;
}

/// Negative Gaussian bump with a hard cutoff.
///
/// `spread = radius * spread_factor`; inside `spread * cutoff_factor` the
/// displacement is `-mass * exp(-d² / (2 spread²))`, outside it is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel {
    pub spread_factor: f32,
    pub cutoff_factor: f32,
}

impl GaussianKernel {
    pub fn new(spread_factor: f32, cutoff_factor: f32) -> Self {
        Self {
            spread_factor,
            cutoff_factor,
        }
    }

    /// Kernel width for a body of `radius`.
    #[inline]
    pub fn spread(&self, radius: f32) -> f32 {
        radius * self.spread_factor
    }
}

impl From<&FieldConfig> for GaussianKernel {
    fn from(config: &FieldConfig) -> Self {
        Self::new(config.spread_factor, config.cutoff_factor)
    }
}

impl Default for GaussianKernel {
    fn default() -> Self {
        Self::from(&FieldConfig::default())
    }
}

impl FalloffKernel for GaussianKernel {
    #[inline]
    fn displacement(&self, distance_sq: f32, mass: f32, radius: f32) -> f32 {
        let spread = self.spread(radius);
        if spread <= 0.0 {
            return 0.0;
        }
        let cutoff = spread * self.cutoff_factor;
        if distance_sq >= cutoff * cutoff {
            return 0.0;
        }
        -mass * (-distance_sq / (2.0 * spread * spread)).exp()
    }

    fn support_sq(&self, radius: f32) -> Option<f32> {
        let cutoff = self.spread(radius) * self.cutoff_factor;
        Some(cutoff * cutoff)
    }

    fn name(&self) -> &str {
        "gaussian"
    }
}
