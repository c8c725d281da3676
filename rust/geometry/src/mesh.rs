// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use crate::triangulation::{total_triangle_count, triangulate_face, COLOR_CHANNELS};
use crate::vertex::{ReconstructedFace, Triangle, VertexRecord};
use nalgebra::Point3;

/// Non-indexed triangle mesh
///
/// Every three consecutive vertices form one triangle; vertices are never
/// shared between triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Vertex colors (r, g, b)
    pub colors: Vec<f32>,
    /// Texture coordinates (u, v)
    pub uvs: Vec<f32>,
    /// Lightmap coordinates (u, v)
    pub lightmap_uvs: Vec<f32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
            uvs: Vec::new(),
            lightmap_uvs: Vec::new(),
        }
    }

    /// Create a mesh with capacity
    pub fn with_capacity(triangle_count: usize) -> Self {
        let vertex_count = triangle_count * 3;
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            colors: Vec::with_capacity(vertex_count * COLOR_CHANNELS),
            uvs: Vec::with_capacity(vertex_count * 2),
            lightmap_uvs: Vec::with_capacity(vertex_count * 2),
        }
    }

    /// Fan-triangulate faces into one mesh, in face order.
    /// Degenerate faces contribute nothing.
    pub fn from_faces(faces: &[ReconstructedFace]) -> Self {
        let mut mesh = Self::with_capacity(total_triangle_count(faces));
        for face in faces {
            if let Ok(triangles) = triangulate_face(face) {
                for triangle in &triangles {
                    mesh.add_triangle(triangle);
                }
            }
        }
        mesh
    }

    /// Add a vertex with all its attributes
    #[inline]
    pub fn add_vertex(&mut self, vertex: &VertexRecord) {
        let p = &vertex.position;
        let n = &vertex.normal;
        let c = &vertex.color;

        self.positions
            .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        self.normals
            .extend_from_slice(&[n.x as f32, n.y as f32, n.z as f32]);
        self.colors
            .extend_from_slice(&[c.x as f32, c.y as f32, c.z as f32]);
        self.uvs
            .extend_from_slice(&[vertex.uv.x as f32, vertex.uv.y as f32]);
        self.lightmap_uvs.extend_from_slice(&[
            vertex.lightmap_uv.x as f32,
            vertex.lightmap_uv.y as f32,
        ]);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, triangle: &Triangle) {
        for vertex in triangle {
            self.add_vertex(vertex);
        }
    }

    /// Merge another mesh into this one
    #[inline]
    pub fn merge(&mut self, other: &Mesh) {
        if other.is_empty() {
            return;
        }

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.colors.extend_from_slice(&other.colors);
        self.uvs.extend_from_slice(&other.uvs);
        self.lightmap_uvs.extend_from_slice(&other.lightmap_uvs);
    }

    /// Merge several meshes, reserving space once
    pub fn merge_all(&mut self, meshes: &[Mesh]) {
        let total_triangles: usize = meshes.iter().map(Mesh::triangle_count).sum();
        let vertex_count = total_triangles * 3;

        self.positions.reserve(vertex_count * 3);
        self.normals.reserve(vertex_count * 3);
        self.colors.reserve(vertex_count * COLOR_CHANNELS);
        self.uvs.reserve(vertex_count * 2);
        self.lightmap_uvs.reserve(vertex_count * 2);

        for mesh in meshes {
            self.merge(mesh);
        }
    }

    /// Flat (positions, colors) buffers
    #[inline]
    pub fn flat_buffers(&self) -> (&[f32], &[f32]) {
        (&self.positions, &self.colors)
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Axis-aligned bounds (min, max) of all corners; origin for an empty mesh
    pub fn bounds(&self) -> (Point3<f32>, Point3<f32>) {
        let mut corners = self
            .positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]));

        let Some(first) = corners.next() else {
            return (Point3::origin(), Point3::origin());
        };
        corners.fold((first, first), |(min, max), p| (min.inf(&p), max.sup(&p)))
    }

    /// Clear the mesh
    #[inline]
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.colors.clear();
        self.uvs.clear();
        self.lightmap_uvs.clear();
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point2, Vector3};

    fn record(x: f64, y: f64, z: f64) -> VertexRecord {
        VertexRecord {
            position: Point3::new(x, y, z),
            normal: Vector3::z(),
            uv: Point2::new(0.5, 0.25),
            lightmap_uv: Point2::origin(),
            color: Vector3::new(1.0, 0.5, 0.0),
        }
    }

    fn square(face_index: usize, z: f64) -> ReconstructedFace {
        ReconstructedFace::new(
            face_index,
            vec![
                record(0.0, 0.0, z),
                record(1.0, 0.0, z),
                record(1.0, 1.0, z),
                record(0.0, 1.0, z),
            ],
        )
    }

    #[test]
    fn test_mesh_creation() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_add_vertex() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(&record(1.0, 2.0, 3.0));
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.positions, vec![1.0, 2.0, 3.0]);
        assert_eq!(mesh.normals, vec![0.0, 0.0, 1.0]);
        assert_eq!(mesh.colors, vec![1.0, 0.5, 0.0]);
        assert_eq!(mesh.uvs, vec![0.5, 0.25]);
        assert_eq!(mesh.lightmap_uvs, vec![0.0, 0.0]);
    }

    #[test]
    fn test_from_faces() {
        let faces = vec![
            square(0, 0.0),
            ReconstructedFace::new(1, vec![record(0.0, 0.0, 0.0)]),
            square(2, 2.0),
        ];
        let mesh = Mesh::from_faces(&faces);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.colors.len(), 12 * COLOR_CHANNELS);
        assert_eq!(mesh.uvs.len(), 24);

        // First triangle of the second square starts at its anchor vertex
        assert_eq!(&mesh.positions[18..21], &[0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_merge() {
        let mut mesh1 = Mesh::from_faces(&[square(0, 0.0)]);
        let mesh2 = Mesh::from_faces(&[square(1, 1.0)]);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.triangle_count(), 4);

        let mut combined = Mesh::new();
        combined.merge_all(&[mesh2.clone(), Mesh::new(), mesh2]);
        assert_eq!(combined.triangle_count(), 4);
    }

    #[test]
    fn test_bounds() {
        let mesh = Mesh::from_faces(&[square(0, -1.0), square(1, 3.0)]);
        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::new(0.0, 0.0, -1.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 3.0));

        let (min, max) = Mesh::new().bounds();
        assert_eq!(min, Point3::origin());
        assert_eq!(max, Point3::origin());
    }

    #[test]
    fn test_clear() {
        let mut mesh = Mesh::from_faces(&[square(0, 0.0)]);
        assert!(!mesh.is_empty());
        mesh.clear();
        assert!(mesh.is_empty());
        assert!(mesh.colors.is_empty());
    }
}
