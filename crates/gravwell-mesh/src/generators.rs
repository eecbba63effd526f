//! Procedural meshes: the fabric grid and body spheres.

use std::f32::consts::{PI, TAU};

use gravwell_math::Vec3;

use crate::mesh::TriangleMesh;

/// The flat fabric grid in the local XZ plane.
///
/// Spans `[-size/2, size/2]` on both axes at `y = 0` with `divisions`
/// cells per edge, so `(divisions + 1)²` vertices. Row-major: rows advance
/// along +Z, columns along +X. Faces wind so normals point along +Y.
///
/// # Example
/// ```
/// use gravwell_mesh::generators::fabric_grid;
/// let mesh = fabric_grid(2, 10.0);
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn fabric_grid(divisions: usize, size: f32) -> TriangleMesh {
    let row = divisions + 1;
    let mut mesh = TriangleMesh::with_capacity(row * row, divisions * divisions * 2);
    let half = size / 2.0;

    for j in 0..row {
        let v = j as f32 / divisions as f32;
        for i in 0..row {
            let u = i as f32 / divisions as f32;
            let rest = Vec3::new(-half + u * size, 0.0, -half + v * size);
            mesh.push_vertex(rest, Vec3::Y, [u, 1.0 - v]);
        }
    }

    let row = row as u32;
    for j in 0..divisions as u32 {
        for i in 0..divisions as u32 {
            let near_left = j * row + i;
            let near_right = near_left + 1;
            let far_left = near_left + row;
            let far_right = far_left + 1;

            mesh.push_triangle(near_left, far_left, near_right);
            mesh.push_triangle(near_right, far_left, far_right);
        }
    }

    mesh
}

/// A UV sphere of `radius` centered at the origin.
///
/// `stacks` latitude bands from pole to pole, `slices` longitude bands.
/// The seam column is duplicated so UVs wrap cleanly; pole caps use one
/// triangle per slice.
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let ring = slices + 1;
    let mut mesh = TriangleMesh::with_capacity((stacks + 1) * ring, stacks * slices * 2);

    for i in 0..=stacks {
        let v = i as f32 / stacks as f32;
        let (sin_phi, cos_phi) = (PI * v).sin_cos();
        for j in 0..=slices {
            let u = j as f32 / slices as f32;
            let (sin_theta, cos_theta) = (TAU * u).sin_cos();
            let dir = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
            mesh.push_vertex(dir * radius, dir, [u, v]);
        }
    }

    let ring = ring as u32;
    for i in 0..stacks as u32 {
        for j in 0..slices as u32 {
            let upper = i * ring + j;
            let lower = upper + ring;

            // Counter-clockwise seen from outside
            if i != 0 {
                mesh.push_triangle(upper, upper + 1, lower);
            }
            if i + 1 != stacks as u32 {
                mesh.push_triangle(upper + 1, lower + 1, lower);
            }
        }
    }

    mesh
}
