// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for map table access and entity parsing.

use std::fmt;
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Level tables a face can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lump {
    Faces,
    Surfedges,
    Edges,
    Vertices,
    TextureInfo,
    TextureData,
    Planes,
    Entities,
}

impl Lump {
    /// Upper-case table name as it appears in the level format
    pub fn name(&self) -> &'static str {
        match self {
            Lump::Faces => "FACES",
            Lump::Surfedges => "SURFEDGES",
            Lump::Edges => "EDGES",
            Lump::Vertices => "VERTICES",
            Lump::TextureInfo => "TEXTURE_INFO",
            Lump::TextureData => "TEXTURE_DATA",
            Lump::Planes => "PLANES",
            Lump::Entities => "ENTITIES",
        }
    }
}

impl fmt::Display for Lump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while reading map tables or entity records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An index points outside its table.
    #[error("index {index} out of bounds for {lump} (len {len})")]
    MalformedIndex { lump: Lump, index: i64, len: usize },

    /// A required table is empty although faces reference it.
    #[error("missing required lump {lump}")]
    MissingLump { lump: Lump },

    /// An entity "origin" string is not three parseable floats.
    #[error("cannot parse coordinate {input:?}: {reason}")]
    CoordinateParse { input: String, reason: String },

    /// A required entity key is absent.
    #[error("entity is missing field {field:?}")]
    MissingField { field: String },
}

impl Error {
    pub fn malformed_index(lump: Lump, index: i64, len: usize) -> Self {
        Error::MalformedIndex { lump, index, len }
    }

    pub fn coordinate_parse(input: &str, reason: impl Into<String>) -> Self {
        Error::CoordinateParse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
