//! Vertex normals from triangle geometry.

use gravwell_math::Vec3;

use crate::mesh::TriangleMesh;

/// Recomputes area-weighted vertex normals in place.
///
/// Each face's unnormalized cross product is added to its three corners,
/// so larger faces weigh more. Vertices with no usable adjacent area fall
/// back to `+Y`, the fabric's rest normal.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let mut accum = vec![Vec3::ZERO; mesh.vertex_count()];

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let pa = mesh.position_vec3(a);
        let face = (mesh.position_vec3(b) - pa).cross(mesh.position_vec3(c) - pa);
        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }

    for (normal, sum) in mesh.normals.iter_mut().zip(accum) {
        *normal = sum.try_normalize().unwrap_or(Vec3::Y).to_array();
    }
}
