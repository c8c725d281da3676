// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BSP-Lite Geometry Processing
//!
//! Rebuilds renderable faces from BSP map tables: winding reconstruction
//! with T-junction repair, texture and lightmap UV projection, and fan
//! triangulation into flat buffers. Uses nalgebra for vector math and rayon
//! for per-face parallelism.

pub mod error;
pub mod face;
pub mod mesh;
pub mod router;
pub mod triangulation;
pub mod uv;
pub mod vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use error::{Error, Result};
pub use face::{reconstruct_face_loop, reconstruct_loop, resolve_surfedge, Repair, RepairingLoop};
pub use mesh::Mesh;
pub use router::{FaceResult, MapGeometry};
pub use triangulation::{
    fan_triangle_indices, total_triangle_count, triangulate_face, triangulate_faces,
    triangulate_faces_colored, triangulate_faces_flat, COLOR_CHANNELS,
};
pub use uv::{map_face_vertices, project_lightmap_uv, project_texture_uv};
pub use vertex::{ReconstructedFace, Triangle, VertexRecord};
