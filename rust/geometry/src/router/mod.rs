// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Map Geometry - drives face reconstruction over a whole map
//!
//! Borrows the read-only [`MapData`] and runs loop reconstruction followed by
//! UV mapping for each face. Failures carry the face index.

mod processing;

#[cfg(test)]
mod tests;

use crate::face::reconstruct_face_loop;
use crate::uv::map_face_vertices;
use crate::vertex::ReconstructedFace;
use crate::Result;
use bsp_lite_core::MapData;

/// Per-face result in face order
pub type FaceResult = Result<ReconstructedFace>;

/// Face geometry builder for one map
#[derive(Debug, Clone, Copy)]
pub struct MapGeometry<'a> {
    map: &'a MapData,
}

impl<'a> MapGeometry<'a> {
    pub fn new(map: &'a MapData) -> Self {
        Self { map }
    }

    #[inline]
    pub fn map(&self) -> &'a MapData {
        self.map
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.map.face_count()
    }

    /// Reconstruct and attribute one face.
    ///
    /// Errors are wrapped with the face index (see [`crate::Error::Face`]).
    pub fn reconstruct_face(&self, face_index: usize) -> FaceResult {
        self.reconstruct_face_inner(face_index)
            .map_err(|e| e.in_face(face_index))
    }

    #[inline]
    fn reconstruct_face_inner(&self, face_index: usize) -> FaceResult {
        let positions = reconstruct_face_loop(self.map, face_index)?;
        map_face_vertices(self.map, face_index, &positions)
    }
}
