//! Triangle mesh with split position channels.
//!
//! Positions are stored one axis per array (`pos_x`, `pos_y`, `pos_z`)
//! because the fabric rewrites only `pos_y` each step; rest X/Z never move.
//! Normals and UVs are only ever handed to a vertex buffer, so they are
//! kept interleaved in the layout the renderer consumes.

use serde::{Deserialize, Serialize};

use gravwell_math::Vec3;
use gravwell_types::{SpacetimeError, SpacetimeResult};

/// An indexed triangle list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,

    /// Per-vertex unit normals.
    pub normals: Vec<[f32; 3]>,
    /// Per-vertex texture coordinates.
    pub uvs: Vec<[f32; 2]>,

    /// Flat index list, three per triangle.
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Empty mesh with room for the given counts.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertices),
            pos_y: Vec::with_capacity(vertices),
            pos_z: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) -> u32 {
        let index = self.pos_x.len() as u32;
        self.pos_x.push(position.x);
        self.pos_y.push(position.y);
        self.pos_z.push(position.z);
        self.normals.push(normal.to_array());
        self.uvs.push(uv);
        index
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.position(i))
    }

    #[inline]
    pub fn normal_vec3(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.normals[i])
    }

    /// Vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Positions as `[x, y, z]` triples, ready for upload.
    pub fn interleaved_positions(&self) -> Vec<[f32; 3]> {
        (0..self.vertex_count()).map(|i| self.position(i)).collect()
    }

    /// Checks channel lengths agree and every triangle references three
    /// distinct, existing vertices.
    pub fn validate(&self) -> SpacetimeResult<()> {
        let n = self.vertex_count();
        let channels = [
            ("pos_y", self.pos_y.len()),
            ("pos_z", self.pos_z.len()),
            ("normals", self.normals.len()),
            ("uvs", self.uvs.len()),
        ];
        if let Some((name, len)) = channels.iter().find(|(_, len)| *len != n) {
            return Err(SpacetimeError::InvalidMesh(format!(
                "{name} has {len} entries, expected {n}"
            )));
        }

        if self.indices.len() % 3 != 0 {
            return Err(SpacetimeError::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        for (t, [a, b, c]) in self.triangles().enumerate() {
            if [a, b, c].iter().any(|&i| i as usize >= n) {
                return Err(SpacetimeError::InvalidMesh(format!(
                    "triangle {t} references a missing vertex: [{a}, {b}, {c}] with {n} vertices"
                )));
            }
            if a == b || b == c || a == c {
                return Err(SpacetimeError::InvalidMesh(format!(
                    "triangle {t} is degenerate: [{a}, {b}, {c}]"
                )));
            }
        }

        Ok(())
    }
}
