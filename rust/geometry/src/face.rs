// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face winding reconstruction
//!
//! Walks a face's signed edge references to build its vertex loop and
//! repairs the duplicate positions ("T-junction" bridges) the level
//! compiler leaves behind.

use crate::vertex::to_point;
use crate::{Error, Point3, Result};
use bsp_lite_core::{Edge, EdgeDirection, Face, MapData, Surfedge};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Exact-equality key for a position.
///
/// Compares bit patterns; `+ 0.0` folds `-0.0` into `0.0` so the key agrees
/// with float `==` for every non-NaN value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PositionKey([u64; 3]);

impl PositionKey {
    #[inline]
    fn of(p: &Point3<f64>) -> Self {
        Self([
            (p.x + 0.0).to_bits(),
            (p.y + 0.0).to_bits(),
            (p.z + 0.0).to_bits(),
        ])
    }
}

/// What a [`RepairingLoop::push`] did to the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repair {
    /// No duplicates present
    Clean,
    /// Two repeats two apart: the pair between them was dropped
    BridgeCollapsed,
    /// Three consecutive repeats: the middle one and its successor were dropped
    TripleCollapsed,
    /// Duplicates present that match no known pattern (yet)
    Pending,
}

/// Vertex loop that repairs duplicate positions as it grows
///
/// Occurrence counts are kept in a running frequency table, so a push
/// without duplicates costs one hash update.
#[derive(Debug, Clone, Default)]
pub struct RepairingLoop {
    positions: Vec<Point3<f64>>,
    counts: FxHashMap<PositionKey, u32>,
    /// Number of keys with a count above one
    duplicated: usize,
}

impl RepairingLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            duplicated: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// True when some position occurs more than once
    #[inline]
    pub fn has_duplicates(&self) -> bool {
        self.duplicated > 0
    }

    #[inline]
    fn count_of(&self, p: &Point3<f64>) -> u32 {
        self.counts.get(&PositionKey::of(p)).copied().unwrap_or(0)
    }

    fn increment(&mut self, key: PositionKey) {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        if *count == 2 {
            self.duplicated += 1;
        }
    }

    fn decrement(&mut self, key: PositionKey) {
        if let Some(count) = self.counts.get_mut(&key) {
            *count -= 1;
            match *count {
                0 => {
                    self.counts.remove(&key);
                }
                1 => self.duplicated -= 1,
                _ => {}
            }
        }
    }

    fn remove_at(&mut self, index: usize) {
        let removed = self.positions.remove(index);
        self.decrement(PositionKey::of(&removed));
    }

    /// Loop indices of every position whose occurrence count is not one
    pub fn repeat_indices(&self) -> SmallVec<[usize; 4]> {
        if !self.has_duplicates() {
            return SmallVec::new();
        }
        self.positions
            .iter()
            .enumerate()
            .filter(|(_, p)| self.count_of(p) != 1)
            .map(|(i, _)| i)
            .collect()
    }

    /// Append a position, then repair the loop if it now holds duplicates
    pub fn push(&mut self, position: Point3<f64>) -> Repair {
        self.positions.push(position);
        self.increment(PositionKey::of(&position));

        if !self.has_duplicates() {
            return Repair::Clean;
        }

        let repeats = self.repeat_indices();
        match *repeats.as_slice() {
            [a, b] if b - a == 2 => {
                self.remove_at(a + 1);
                self.remove_at(a + 1);
                Repair::BridgeCollapsed
            }
            [r0, r1, r2] if r1 == r0 + 1 && r1 + 1 == r2 => {
                self.remove_at(r1);
                self.remove_at(r1);
                Repair::TripleCollapsed
            }
            _ => Repair::Pending,
        }
    }

    /// Final loop, or the repeat pattern that could not be repaired
    pub fn finish(self) -> Result<Vec<Point3<f64>>> {
        let repeats = self.repeat_indices();
        if !repeats.is_empty() {
            return Err(Error::UnrepairedDuplicatePattern { repeats });
        }
        Ok(self.positions)
    }
}

/// Resolve a signed edge reference.
///
/// Returns the edge oriented in traversal order and the position the
/// reference introduces: the first endpoint of a forward edge, or the
/// second endpoint of the stored (unreversed) edge for a reversed one.
pub fn resolve_surfedge(map: &MapData, surfedge: Surfedge) -> Result<(Edge, Point3<f64>)> {
    let (index, direction) = surfedge.resolve();
    let edge = *map.edge(index)?;

    let (oriented, vertex_index) = match direction {
        EdgeDirection::Forward => (edge, edge.first()),
        EdgeDirection::Reversed => (edge.reversed(), edge.second()),
    };

    let vertex = map.vertex(vertex_index as usize)?;
    Ok((oriented, to_point(vertex)))
}

/// Build the repaired vertex loop of a face record
pub fn reconstruct_loop(map: &MapData, face: &Face) -> Result<Vec<Point3<f64>>> {
    let surfedges = map.face_surfedges(face)?;
    let mut face_loop = RepairingLoop::with_capacity(surfedges.len());

    for &surfedge in surfedges {
        let (_, position) = resolve_surfedge(map, surfedge)?;
        face_loop.push(position);
    }

    face_loop.finish()
}

/// Build the repaired vertex loop of the face at `face_index`
pub fn reconstruct_face_loop(map: &MapData, face_index: usize) -> Result<Vec<Point3<f64>>> {
    let face = map.face(face_index)?;
    reconstruct_loop(map, face)
}
