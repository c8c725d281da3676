// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole-map processing, sequential and parallel.

use super::{FaceResult, MapGeometry};
use crate::vertex::ReconstructedFace;
use crate::{Error, Mesh};
use rayon::prelude::*;

impl MapGeometry<'_> {
    /// Reconstruct every face in face order
    pub fn reconstruct_all(&self) -> Vec<FaceResult> {
        (0..self.face_count())
            .map(|i| self.reconstruct_face(i))
            .collect()
    }

    /// Reconstruct every face in parallel.
    ///
    /// Faces share nothing but the read-only map, so this needs no locking;
    /// output order matches [`Self::reconstruct_all`].
    pub fn reconstruct_all_par(&self) -> Vec<FaceResult> {
        (0..self.face_count())
            .into_par_iter()
            .map(|i| self.reconstruct_face(i))
            .collect()
    }

    /// Split per-face results into successes and failures, keeping order
    pub fn partition(results: Vec<FaceResult>) -> (Vec<ReconstructedFace>, Vec<Error>) {
        let mut faces = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(face) => faces.push(face),
                Err(e) => failures.push(e),
            }
        }
        (faces, failures)
    }

    /// Mesh of every face that reconstructs; failed faces are left out
    pub fn build_mesh(&self) -> Mesh {
        let (faces, _) = Self::partition(self.reconstruct_all());
        Mesh::from_faces(&faces)
    }

    /// Parallel [`Self::build_mesh`]
    pub fn build_mesh_par(&self) -> Mesh {
        let (faces, _) = Self::partition(self.reconstruct_all_par());
        Mesh::from_faces(&faces)
    }
}
