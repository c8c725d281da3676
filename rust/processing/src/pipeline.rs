// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Map processing service with parallel face reconstruction.

use crate::config::ProcessingConfig;
use crate::Result;
use bsp_lite_core::{entity_origins, spawn_points_with_prefix, Coordinate, MapData};
use bsp_lite_geometry::{FaceResult, MapGeometry, Mesh, ReconstructedFace};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::time::Instant;

/// A face that could not be reconstructed.
#[derive(Debug, Clone)]
pub struct FaceFailure {
    pub face: usize,
    pub error: bsp_lite_geometry::Error,
}

/// Serializable view of a [`FaceFailure`].
#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    pub face: usize,
    pub kind: &'static str,
    pub message: String,
}

impl From<&FaceFailure> for FailureReport {
    fn from(failure: &FaceFailure) -> Self {
        Self {
            face: failure.face,
            kind: failure.error.kind(),
            message: failure.error.root().to_string(),
        }
    }
}

/// Processing statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessingStats {
    pub total_faces: usize,
    pub reconstructed_faces: usize,
    pub degenerate_faces: usize,
    pub failed_faces: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
    pub entity_origins: usize,
    pub spawn_points: usize,
    /// Failure count per error kind
    pub failures_by_kind: FxHashMap<String, usize>,
    pub geometry_time_ms: u64,
    pub total_time_ms: u64,
}

/// Result of processing a map.
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Reconstructed faces in face order (degenerate ones included)
    pub faces: Vec<ReconstructedFace>,
    pub failures: Vec<FaceFailure>,
    /// Fan-triangulated geometry of all faces
    pub mesh: Mesh,
    pub entity_origins: Vec<Coordinate>,
    pub spawn_points: Vec<Coordinate>,
    pub stats: ProcessingStats,
}

#[derive(Serialize)]
struct Summary<'a> {
    stats: &'a ProcessingStats,
    bounds: Option<[[f32; 3]; 2]>,
    spawn_points: &'a [Coordinate],
    failures: Vec<FailureReport>,
}

impl ProcessingResult {
    /// Flat (positions, colors) buffers for upload
    #[inline]
    pub fn flat_buffers(&self) -> (&[f32], &[f32]) {
        self.mesh.flat_buffers()
    }

    /// Serializable failure list
    pub fn failure_reports(&self) -> Vec<FailureReport> {
        self.failures.iter().map(FailureReport::from).collect()
    }

    /// Stats, bounds, spawns and failures as pretty JSON
    pub fn summary_json(&self) -> Result<String> {
        let bounds = if self.mesh.is_empty() {
            None
        } else {
            let (min, max) = self.mesh.bounds();
            Some([[min.x, min.y, min.z], [max.x, max.y, max.z]])
        };

        let summary = Summary {
            stats: &self.stats,
            bounds,
            spawn_points: &self.spawn_points,
            failures: self.failure_reports(),
        };
        Ok(serde_json::to_string_pretty(&summary)?)
    }
}

/// Reconstruct every face, on a local pool when configured
fn reconstruct_faces(geometry: &MapGeometry<'_>, config: &ProcessingConfig) -> Result<Vec<FaceResult>> {
    if !config.parallel {
        return Ok(geometry.reconstruct_all());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads)
        .build()?;
    Ok(pool.install(|| geometry.reconstruct_all_par()))
}

/// Process a loaded map into render-ready geometry.
///
/// Structural problems (missing tables) fail the whole call. Per-face
/// failures are collected and logged unless `skip_failed_faces` is off, in
/// which case the first one is returned as the error.
pub fn process_map(map: &MapData, config: &ProcessingConfig) -> Result<ProcessingResult> {
    let total_start = Instant::now();

    map.validate_structure()?;

    tracing::info!(
        faces = map.face_count(),
        entities = map.entities.len(),
        parallel = config.parallel,
        worker_threads = config.worker_threads,
        "Starting map geometry processing"
    );

    let geometry_start = Instant::now();
    let geometry = MapGeometry::new(map);
    let results = reconstruct_faces(&geometry, config)?;

    let mut stats = ProcessingStats {
        total_faces: map.face_count(),
        ..Default::default()
    };
    let mut faces = Vec::with_capacity(results.len());
    let mut failures = Vec::new();

    for (face_index, result) in results.into_iter().enumerate() {
        match result {
            Ok(face) => {
                if face.is_degenerate() {
                    tracing::debug!(
                        face = face_index,
                        vertices = face.len(),
                        "Degenerate face, no triangles emitted"
                    );
                    stats.degenerate_faces += 1;
                }
                faces.push(face);
            }
            Err(error) => {
                tracing::warn!(face = face_index, error = %error, "Face reconstruction failed");
                if !config.skip_failed_faces {
                    return Err(error.into());
                }
                *stats
                    .failures_by_kind
                    .entry(error.kind().to_string())
                    .or_insert(0) += 1;
                failures.push(FaceFailure {
                    face: face_index,
                    error,
                });
            }
        }
    }

    let mesh = Mesh::from_faces(&faces);
    let geometry_time = geometry_start.elapsed();

    let origins = entity_origins(&map.entities)?;
    let spawns = spawn_points_with_prefix(&map.entities, &config.spawn_prefix)?;

    stats.reconstructed_faces = faces.len();
    stats.failed_faces = failures.len();
    stats.total_triangles = mesh.triangle_count();
    stats.total_vertices = mesh.vertex_count();
    stats.entity_origins = origins.len();
    stats.spawn_points = spawns.len();
    stats.geometry_time_ms = geometry_time.as_millis() as u64;
    stats.total_time_ms = total_start.elapsed().as_millis() as u64;

    tracing::info!(
        faces = stats.reconstructed_faces,
        degenerate = stats.degenerate_faces,
        failed = stats.failed_faces,
        triangles = stats.total_triangles,
        spawns = stats.spawn_points,
        geometry_time_ms = stats.geometry_time_ms,
        total_time_ms = stats.total_time_ms,
        "Map geometry processing complete"
    );

    Ok(ProcessingResult {
        faces,
        failures,
        mesh,
        entity_origins: origins,
        spawn_points: spawns,
        stats,
    })
}
