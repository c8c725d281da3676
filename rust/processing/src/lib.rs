// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # BSP-Lite Processing
//!
//! End-to-end pipeline over a loaded map: reconstruct every face (in
//! parallel on a rayon pool when enabled), collect per-face failures with
//! their face index, triangulate the survivors into flat buffers and
//! extract entity origins and spawn points.
//!
//! ```rust,ignore
//! use bsp_lite_processing::{load_map_file, process_map, ProcessingConfig};
//!
//! let map = load_map_file("level.json")?;
//! let result = process_map(&map, &ProcessingConfig::from_env())?;
//! let (positions, colors) = result.flat_buffers();
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;

pub use config::ProcessingConfig;
pub use error::{Error, Result};
pub use loader::{load_map_file, load_map_json};
pub use pipeline::{process_map, FaceFailure, FailureReport, ProcessingResult, ProcessingStats};
