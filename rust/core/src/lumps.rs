// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Level table records
//!
//! Plain, immutable records as the external loader hands them over. Field
//! layout follows the level format's lumps; all indices are zero-based.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 3-component vector in the level format's storage precision
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Widen to f64 components
    #[inline]
    pub fn to_f64(self) -> [f64; 3] {
        [self.x as f64, self.y as f64, self.z as f64]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Integer 2D pair measured in lightmap luxels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Luxels {
    pub x: i32,
    pub y: i32,
}

impl Luxels {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Face lightmap placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LightmapExtent {
    /// Lightmap origin in luxel space
    pub mins: Luxels,
    /// Lightmap dimensions in luxels
    pub size: Luxels,
}

impl LightmapExtent {
    /// True when either origin coordinate is zero. Faces flagged this way
    /// get a zero lightmap UV.
    #[inline]
    pub fn has_zero_origin(&self) -> bool {
        self.mins.x == 0 || self.mins.y == 0
    }
}

/// Polygon face record
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Index of the first entry in SURFEDGES
    pub first_edge: u32,
    /// Number of consecutive SURFEDGES entries
    pub num_edges: u32,
    /// Index into TEXTURE_INFO
    pub texture_info: u32,
    /// Index into PLANES
    pub plane: u32,
    pub lightmap: LightmapExtent,
}

impl Face {
    /// Half-open SURFEDGES range covered by this face
    #[inline]
    pub fn surfedge_range(&self) -> std::ops::Range<usize> {
        let start = self.first_edge as usize;
        start..start + self.num_edges as usize
    }
}

/// Ordered pair of VERTICES indices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge(pub [u32; 2]);

impl Edge {
    #[inline]
    pub const fn new(first: u32, second: u32) -> Self {
        Self([first, second])
    }

    #[inline]
    pub fn first(&self) -> u32 {
        self.0[0]
    }

    #[inline]
    pub fn second(&self) -> u32 {
        self.0[1]
    }

    /// Same edge with its endpoints swapped
    #[inline]
    pub fn reversed(&self) -> Self {
        Self([self.0[1], self.0[0]])
    }
}

/// Traversal direction encoded in a surfedge's sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    Forward,
    Reversed,
}

/// Signed reference into EDGES
///
/// Non-negative values walk the edge forward, negative values walk edge
/// `-value` backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Surfedge(pub i32);

impl Surfedge {
    /// Edge index and traversal direction
    #[inline]
    pub fn resolve(self) -> (usize, EdgeDirection) {
        let direction = if self.0 >= 0 {
            EdgeDirection::Forward
        } else {
            EdgeDirection::Reversed
        };
        (self.0.unsigned_abs() as usize, direction)
    }
}

impl From<i32> for Surfedge {
    fn from(v: i32) -> Self {
        Surfedge(v)
    }
}

/// One projection axis: `dot(p, vector) + offset`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextureAxis {
    pub vector: Vec3,
    pub offset: f32,
}

impl TextureAxis {
    #[inline]
    pub const fn new(vector: Vec3, offset: f32) -> Self {
        Self { vector, offset }
    }
}

/// Pair of projection axes mapping 3D positions onto a 2D plane
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextureProjection {
    pub s: TextureAxis,
    pub t: TextureAxis,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextureInfo {
    /// Texture-space projection
    pub texture: TextureProjection,
    /// Lightmap-space projection (luxels)
    pub lightmap: TextureProjection,
    /// Index into TEXTURE_DATA
    pub texture_data: u32,
}

/// Texture view dimensions; either side may be zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextureData {
    /// Average texture color, used as a flat per-face tint
    pub reflectivity: Vec3,
    pub view: ViewSize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    pub distance: f32,
}
