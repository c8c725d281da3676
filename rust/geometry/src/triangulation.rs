// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon triangulation utilities
//!
//! Faces of a compiled level are convex, so a fan anchored at the first
//! vertex is enough. No vertex sharing: every triangle carries its own copy
//! of each corner.

use crate::vertex::{ReconstructedFace, Triangle};
use crate::{Error, Point3, Result, Vector3};

/// Color channels per vertex in the flat color buffer (RGB reflectivity)
pub const COLOR_CHANNELS: usize = 3;

/// Fan triangle corner indices for an n-gon
#[inline]
pub fn fan_triangle_indices(n: usize) -> Vec<[usize; 3]> {
    if n < 3 {
        return Vec::new();
    }
    (1..n - 1).map(|i| [0, i, i + 1]).collect()
}

/// Fan-triangulate one face
pub fn triangulate_face(face: &ReconstructedFace) -> Result<Vec<Triangle>> {
    if face.is_degenerate() {
        return Err(Error::DegenerateFace {
            vertex_count: face.len(),
        });
    }

    let v = &face.vertices;
    Ok(fan_triangle_indices(v.len())
        .into_iter()
        .map(|[a, b, c]| [v[a], v[b], v[c]])
        .collect())
}

/// Total fan triangle count over all faces
#[inline]
pub fn total_triangle_count(faces: &[ReconstructedFace]) -> usize {
    faces.iter().map(ReconstructedFace::triangle_count).sum()
}

/// Triangle stream of all faces in face order; degenerate faces emit nothing
pub fn triangulate_faces(faces: &[ReconstructedFace]) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(total_triangle_count(faces));
    for face in faces {
        if let Ok(face_triangles) = triangulate_face(face) {
            triangles.extend(face_triangles);
        }
    }
    triangles
}

/// (position, color) per triangle corner, three consecutive entries per triangle
pub fn triangulate_faces_colored(faces: &[ReconstructedFace]) -> Vec<(Point3<f64>, Vector3<f64>)> {
    triangulate_faces(faces)
        .iter()
        .flatten()
        .map(|vertex| (vertex.position, vertex.color))
        .collect()
}

/// Flat position and color buffers ready for upload.
///
/// With `T` triangles the buffers hold `9T` and `3T * COLOR_CHANNELS` values.
pub fn triangulate_faces_flat(faces: &[ReconstructedFace]) -> (Vec<f32>, Vec<f32>) {
    let corner_count = total_triangle_count(faces) * 3;
    let mut positions = Vec::with_capacity(corner_count * 3);
    let mut colors = Vec::with_capacity(corner_count * COLOR_CHANNELS);

    for (position, color) in triangulate_faces_colored(faces) {
        positions.extend_from_slice(&[position.x as f32, position.y as f32, position.z as f32]);
        colors.extend_from_slice(&[color.x as f32, color.y as f32, color.z as f32]);
    }

    (positions, colors)
}
