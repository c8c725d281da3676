// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-vertex and per-face output records

use bsp_lite_core::Vec3;
use nalgebra::{Point2, Point3, Vector3};

/// Fully attributed vertex of one face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRecord {
    pub position: Point3<f64>,
    /// Face plane normal (flat shading)
    pub normal: Vector3<f64>,
    /// Texture coordinate
    pub uv: Point2<f64>,
    /// Lightmap coordinate
    pub lightmap_uv: Point2<f64>,
    /// Face reflectivity (flat tint)
    pub color: Vector3<f64>,
}

/// Ordered vertex loop of one reconstructed face
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconstructedFace {
    /// Index into the map's FACES table
    pub face_index: usize,
    pub vertices: Vec<VertexRecord>,
}

impl ReconstructedFace {
    pub fn new(face_index: usize, vertices: Vec<VertexRecord>) -> Self {
        Self {
            face_index,
            vertices,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Faces with fewer than three vertices emit no triangles
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Number of fan triangles this face produces
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }

    pub fn positions(&self) -> impl Iterator<Item = &Point3<f64>> + '_ {
        self.vertices.iter().map(|v| &v.position)
    }
}

/// Triangle carrying its own copy of every corner's attributes
pub type Triangle = [VertexRecord; 3];

/// Widen a table vector to a nalgebra point
#[inline]
pub fn to_point(v: &Vec3) -> Point3<f64> {
    let [x, y, z] = v.to_f64();
    Point3::new(x, y, z)
}

/// Widen a table vector to a nalgebra vector
#[inline]
pub fn to_vector(v: &Vec3) -> Vector3<f64> {
    let [x, y, z] = v.to_f64();
    Vector3::new(x, y, z)
}
