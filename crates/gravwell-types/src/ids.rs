//! Strongly-typed identifiers for placed bodies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle of a mass in the registry.
///
/// Ids are assigned monotonically by the registry and never reused,
/// since masses are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MassId(pub u32);

impl MassId {
    /// Returns the raw value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for MassId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl fmt::Display for MassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mass#{}", self.0)
    }
}
