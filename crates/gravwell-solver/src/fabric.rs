//! Fabric mesh state.
//!
//! The fabric is a square grid in its own local XZ plane. Rest X/Z of every
//! sample are fixed when the grid is built; the simulation only ever
//! rewrites the per-sample local height (`pos_y`). Normals are left to the
//! rendering side: a height write marks them stale and
//! [`Fabric::refresh_normals`] rebuilds them on demand.

use gravwell_math::{FabricTransform, Vec2};
use gravwell_mesh::generators::fabric_grid;
use gravwell_mesh::normals::compute_vertex_normals;
use gravwell_mesh::TriangleMesh;
use gravwell_types::{SpacetimeError, SpacetimeResult};

use crate::config::FabricConfig;

/// The deformable surface.
pub struct Fabric {
    mesh: TriangleMesh,
    transform: FabricTransform,
    size: f32,
    normals_stale: bool,
}

impl Fabric {
    /// Builds a flat fabric from its configuration.
    pub fn new(config: &FabricConfig) -> SpacetimeResult<Self> {
        if !(config.size.is_finite() && config.size > 0.0) {
            return Err(SpacetimeError::InvalidConfig(format!(
                "fabric size must be positive, got {}",
                config.size
            )));
        }
        if config.divisions == 0 {
            return Err(SpacetimeError::InvalidConfig(
                "fabric needs at least one division".into(),
            ));
        }

        let mesh = fabric_grid(config.divisions as usize, config.size);
        mesh.validate()?;

        Ok(Self {
            mesh,
            transform: config.transform(),
            size: config.size,
            normals_stale: false,
        })
    }

    /// Number of grid samples, `(divisions + 1)²`.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Half the edge length; the local X/Z bound of the grid.
    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    /// World-space Z bound as seen through the tilt: `half * cos|tilt|`.
    pub fn effective_z_bound(&self) -> f32 {
        self.half_size() * self.transform.tilt_angle().abs().cos()
    }

    #[inline]
    pub fn transform(&self) -> &FabricTransform {
        &self.transform
    }

    /// Moves or reorients the fabric. Heights go stale until the next step.
    pub(crate) fn set_transform(&mut self, transform: FabricTransform) {
        self.transform = transform;
    }

    /// Rest position of sample `i` in local XZ.
    #[inline]
    pub fn rest_xz(&self, i: usize) -> Vec2 {
        Vec2::new(self.mesh.pos_x[i], self.mesh.pos_z[i])
    }

    /// Current local height of sample `i`.
    #[inline]
    pub fn height(&self, i: usize) -> f32 {
        self.mesh.pos_y[i]
    }

    /// Current local heights, one per sample.
    #[inline]
    pub fn heights(&self) -> &[f32] {
        &self.mesh.pos_y
    }

    /// Lowest current height (0 for an undisturbed fabric).
    pub fn min_height(&self) -> f32 {
        self.mesh.pos_y.iter().copied().fold(0.0, f32::min)
    }

    /// Replaces every sample height with `height_at(rest_xz)`.
    ///
    /// Heights are overwritten, never accumulated, so the surface is a
    /// function of the current inputs only.
    pub(crate) fn write_heights(&mut self, mut height_at: impl FnMut(Vec2) -> f32) {
        for i in 0..self.mesh.vertex_count() {
            let rest = Vec2::new(self.mesh.pos_x[i], self.mesh.pos_z[i]);
            self.mesh.pos_y[i] = height_at(rest);
        }
        self.normals_stale = true;
    }

    /// True when heights changed since the last [`Fabric::refresh_normals`].
    #[inline]
    pub fn normals_stale(&self) -> bool {
        self.normals_stale
    }

    /// Recomputes vertex normals if heights changed.
    pub fn refresh_normals(&mut self) {
        if self.normals_stale {
            compute_vertex_normals(&mut self.mesh);
            self.normals_stale = false;
        }
    }

    /// Local-space vertex positions, interleaved for upload.
    pub fn local_positions(&self) -> Vec<[f32; 3]> {
        self.mesh.interleaved_positions()
    }

    /// Vertex normals as of the last refresh.
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.mesh.normals
    }

    /// The underlying mesh in local space, for vertex-buffer upload.
    #[inline]
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }
}
