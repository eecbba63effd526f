//! Deformation field: superposition of per-mass kernels.
//!
//! The field is closed-form: a query costs one kernel evaluation per mass
//! and needs no solver state, so the same field can be sampled on the
//! fabric grid and under each body and give matching answers.

use gravwell_math::Vec2;

use crate::kernel::{FalloffKernel, GaussianKernel};

/// One body as the field sees it: footprint in fabric-local XZ plus
/// the parameters its kernel needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassEntry {
    /// Footprint `(local x, local z)`.
    pub local_xz: Vec2,
    pub mass: f32,
    pub radius: f32,
}

/// Scalar displacement field over the fabric's local XZ plane.
pub struct DeformationField {
    kernel: Box<dyn FalloffKernel>,
}

impl DeformationField {
    /// Creates a field with the given kernel.
    pub fn new(kernel: Box<dyn FalloffKernel>) -> Self {
        Self { kernel }
    }

    /// The kernel in use.
    pub fn kernel(&self) -> &dyn FalloffKernel {
        self.kernel.as_ref()
    }

    /// Net local-Y displacement at `query` (local XZ).
    ///
    /// Empty `masses` gives `0.0`. Entries whose kernel support ends before
    /// `query` are skipped. The result is a plain sum, so it does not depend
    /// on the order of `masses` beyond float rounding.
    pub fn evaluate(&self, query: Vec2, masses: &[MassEntry]) -> f32 {
        masses
            .iter()
            .filter_map(|m| {
                let d2 = (query - m.local_xz).length_squared();
                match self.kernel.support_sq(m.radius) {
                    Some(support) if d2 >= support => None,
                    _ => Some(self.kernel.displacement(d2, m.mass, m.radius)),
                }
            })
            .sum()
    }
}

impl Default for DeformationField {
    fn default() -> Self {
        Self::new(Box::new(GaussianKernel::default()))
    }
}
