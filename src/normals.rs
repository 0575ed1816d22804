use glam::DVec3;

use crate::error::{Result, TerrainError};

/// Unit normal of the triangle `(v0, v1, v2)` following its winding order.
/// Returns `None` for a zero-area triangle.
pub fn face_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> Option<DVec3> {
    (v1 - v0).cross(v2 - v0).try_normalize()
}

/// Per-vertex lighting normals for an indexed triangle mesh.
///
/// Every triangle adds its unit face normal to each of its three
/// vertices; the sums are normalized once all triangles are in. A vertex
/// whose sum has zero length (no incident triangles, or contributions
/// that cancel out) is reported rather than turned into NaN.
pub fn vertex_normals(positions: &[DVec3], triangles: &[[u32; 3]]) -> Result<Vec<DVec3>> {
    let mut sums = vec![DVec3::ZERO; positions.len()];

    for (triangle, &[a, b, c]) in triangles.iter().enumerate() {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let normal = face_normal(positions[a], positions[b], positions[c])
            .ok_or(TerrainError::DegenerateFace { triangle })?;

        sums[a] += normal;
        sums[b] += normal;
        sums[c] += normal;
    }

    sums.into_iter()
        .enumerate()
        .map(|(vertex, sum)| {
            sum.try_normalize()
                .ok_or(TerrainError::DegenerateNormal { vertex })
        })
        .collect()
}
