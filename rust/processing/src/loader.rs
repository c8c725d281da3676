// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON hand-off from the external level loader.
//!
//! The binary level format is parsed elsewhere; this only reads the already
//! extracted tables as JSON (field names match [`MapData`]).

use crate::Result;
use bsp_lite_core::MapData;
use std::path::Path;

/// Deserialize map tables from a JSON document.
pub fn load_map_json(content: &str) -> Result<MapData> {
    let map: MapData = serde_json::from_str(content)?;
    tracing::debug!(
        faces = map.faces.len(),
        edges = map.edges.len(),
        vertices = map.vertices.len(),
        entities = map.entities.len(),
        "Loaded map tables from JSON"
    );
    Ok(map)
}

/// Read and deserialize a JSON map file.
pub fn load_map_file(path: impl AsRef<Path>) -> Result<MapData> {
    let content = std::fs::read_to_string(path.as_ref())?;
    load_map_json(&content)
}
