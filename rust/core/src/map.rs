// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loaded map context
//!
//! [`MapData`] owns every table the external loader extracted. It is built
//! once, never mutated afterwards and shared by reference (it is `Sync`), so
//! faces can be reconstructed from any number of threads.

use crate::entity::Entity;
use crate::error::{Error, Lump, Result};
use crate::lumps::{Edge, Face, Plane, Surfedge, TextureData, TextureInfo, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All level tables of one map
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapData {
    pub faces: Vec<Face>,
    pub surfedges: Vec<Surfedge>,
    pub edges: Vec<Edge>,
    pub vertices: Vec<Vec3>,
    pub texture_info: Vec<TextureInfo>,
    pub texture_data: Vec<TextureData>,
    pub planes: Vec<Plane>,
    pub entities: Vec<Entity>,
}

/// Bounds-checked table lookup
#[inline]
fn lookup<T>(table: &[T], lump: Lump, index: usize) -> Result<&T> {
    table
        .get(index)
        .ok_or_else(|| Error::malformed_index(lump, index as i64, table.len()))
}

impl MapData {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn face(&self, index: usize) -> Result<&Face> {
        lookup(&self.faces, Lump::Faces, index)
    }

    /// SURFEDGES slice covering a face's edge loop
    pub fn face_surfedges(&self, face: &Face) -> Result<&[Surfedge]> {
        let range = face.surfedge_range();
        let len = self.surfedges.len();
        if range.end > len {
            return Err(Error::malformed_index(
                Lump::Surfedges,
                range.end as i64 - 1,
                len,
            ));
        }
        Ok(&self.surfedges[range])
    }

    #[inline]
    pub fn edge(&self, index: usize) -> Result<&Edge> {
        lookup(&self.edges, Lump::Edges, index)
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> Result<&Vec3> {
        lookup(&self.vertices, Lump::Vertices, index)
    }

    #[inline]
    pub fn texture_info(&self, index: usize) -> Result<&TextureInfo> {
        lookup(&self.texture_info, Lump::TextureInfo, index)
    }

    #[inline]
    pub fn texture_data(&self, index: usize) -> Result<&TextureData> {
        lookup(&self.texture_data, Lump::TextureData, index)
    }

    #[inline]
    pub fn plane(&self, index: usize) -> Result<&Plane> {
        lookup(&self.planes, Lump::Planes, index)
    }

    /// Check that every table the faces depend on is present.
    ///
    /// Only structural emptiness is checked here; individual indices are
    /// checked lazily when a face is reconstructed.
    pub fn validate_structure(&self) -> Result<()> {
        if self.faces.is_empty() {
            return Ok(());
        }

        let required = [
            (Lump::Surfedges, self.surfedges.is_empty()),
            (Lump::Edges, self.edges.is_empty()),
            (Lump::Vertices, self.vertices.is_empty()),
            (Lump::TextureInfo, self.texture_info.is_empty()),
            (Lump::TextureData, self.texture_data.is_empty()),
            (Lump::Planes, self.planes.is_empty()),
        ];

        match required.iter().find(|(_, missing)| *missing) {
            Some((lump, _)) => Err(Error::MissingLump { lump: *lump }),
            None => Ok(()),
        }
    }
}
