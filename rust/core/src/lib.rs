// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # BSP-Lite Core
//!
//! Read-only level tables for BSP maps, as handed over by an external
//! loader, plus entity record helpers.
//!
//! ## Overview
//!
//! - **Lump records**: faces, signed edge references (surfedges), edges,
//!   vertices, texture projections, texture data and planes
//! - **Map context**: [`MapData`] owns all tables and offers bounds-checked
//!   lookups, so a malformed index surfaces as [`Error::MalformedIndex`]
//!   instead of a panic
//! - **Entities**: key/value records with `origin` coordinate parsing and
//!   player spawn filtering
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bsp_lite_core::{parse_coordinate, spawn_points, MapData};
//!
//! let origin = parse_coordinate("75 2 81")?;
//! assert_eq!(origin, (75.0, 2.0, 81.0));
//!
//! let map: MapData = load_from_somewhere();
//! map.validate_structure()?;
//! for spawn in spawn_points(&map.entities)? {
//!     println!("spawn at {:?}", spawn);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for all table records

pub mod entity;
pub mod error;
pub mod lumps;
pub mod map;

pub use entity::{
    entity_origins, entity_origins_flat, parse_coordinate, spawn_points,
    spawn_points_with_prefix, Coordinate, Entity, SPAWN_CLASSNAME_PREFIX,
};
pub use error::{Error, Lump, Result};
pub use lumps::{
    Edge, EdgeDirection, Face, LightmapExtent, Luxels, Plane, Surfedge, TextureAxis,
    TextureData, TextureInfo, TextureProjection, Vec3, ViewSize,
};
pub use map::MapData;
