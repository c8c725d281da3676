// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use smallvec::SmallVec;
use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during face reconstruction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Duplicate positions remain that match neither repair pattern
    #[error("unrepaired duplicate vertex pattern at loop indices {repeats:?}")]
    UnrepairedDuplicatePattern { repeats: SmallVec<[usize; 4]> },

    /// Lightmap size of zero on a face with a usable lightmap origin
    #[error("invalid lightmap size {x}x{y}")]
    InvalidLightmapSize { x: i32, y: i32 },

    /// Fewer than three vertices survived repair
    #[error("degenerate face with {vertex_count} vertices")]
    DegenerateFace { vertex_count: usize },

    /// Failure while reconstructing a specific face
    #[error("face {face}: {source}")]
    Face {
        face: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Core map error: {0}")]
    CoreError(#[from] bsp_lite_core::Error),
}

impl Error {
    /// Attach the offending face index
    pub fn in_face(self, face: usize) -> Self {
        match self {
            Error::Face { .. } => self,
            other => Error::Face {
                face,
                source: Box::new(other),
            },
        }
    }

    /// Face index this error is attached to, if any
    pub fn face_index(&self) -> Option<usize> {
        match self {
            Error::Face { face, .. } => Some(*face),
            _ => None,
        }
    }

    /// Error with any face wrapper removed
    pub fn root(&self) -> &Error {
        match self {
            Error::Face { source, .. } => source.root(),
            other => other,
        }
    }

    /// Stable snake_case name of the underlying failure, for reporting
    pub fn kind(&self) -> &'static str {
        match self.root() {
            Error::UnrepairedDuplicatePattern { .. } => "unrepaired_duplicate_pattern",
            Error::InvalidLightmapSize { .. } => "invalid_lightmap_size",
            Error::DegenerateFace { .. } => "degenerate_face",
            Error::CoreError(bsp_lite_core::Error::MalformedIndex { .. }) => "malformed_index",
            Error::CoreError(_) => "map_error",
            Error::Face { .. } => "face",
        }
    }
}
