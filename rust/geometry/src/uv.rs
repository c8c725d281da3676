// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Texture and lightmap UV projection
//!
//! Turns a reconstructed position loop into [`VertexRecord`]s: two planar
//! UV projections per vertex plus the face's flat normal and tint.

use crate::vertex::{to_vector, ReconstructedFace, VertexRecord};
use crate::{Error, Point2, Point3, Result};
use bsp_lite_core::{LightmapExtent, MapData, TextureAxis, TextureProjection, ViewSize};

/// `dot(p, axis.vector) + axis.offset`
#[inline]
fn project_axis(position: &Point3<f64>, axis: &TextureAxis) -> f64 {
    position.coords.dot(&to_vector(&axis.vector)) + axis.offset as f64
}

/// Zero view sides divide by one instead
#[inline]
fn view_divisor(side: u32) -> f64 {
    if side != 0 {
        side as f64
    } else {
        1.0
    }
}

/// Texture UV of a position, normalized by the texture view size
#[inline]
pub fn project_texture_uv(
    position: &Point3<f64>,
    projection: &TextureProjection,
    view: &ViewSize,
) -> Point2<f64> {
    Point2::new(
        project_axis(position, &projection.s) / view_divisor(view.width),
        project_axis(position, &projection.t) / view_divisor(view.height),
    )
}

/// Lightmap UV of a position.
///
/// A face whose lightmap origin has a zero coordinate gets `(0, 0)`. Other
/// faces are shifted by the origin and scaled by the lightmap size, which
/// must then be nonzero.
#[inline]
pub fn project_lightmap_uv(
    position: &Point3<f64>,
    projection: &TextureProjection,
    lightmap: &LightmapExtent,
) -> Result<Point2<f64>> {
    if lightmap.has_zero_origin() {
        return Ok(Point2::origin());
    }

    let size = lightmap.size;
    if size.x == 0 || size.y == 0 {
        return Err(Error::InvalidLightmapSize {
            x: size.x,
            y: size.y,
        });
    }

    let u = project_axis(position, &projection.s) - lightmap.mins.x as f64;
    let v = project_axis(position, &projection.t) - lightmap.mins.y as f64;
    Ok(Point2::new(u / size.x as f64, v / size.y as f64))
}

/// Attribute every position of a face loop.
///
/// Output has the same length and order as `positions`; normal and color
/// are shared by all vertices.
pub fn map_face_vertices(
    map: &MapData,
    face_index: usize,
    positions: &[Point3<f64>],
) -> Result<ReconstructedFace> {
    let face = map.face(face_index)?;
    let texture_info = map.texture_info(face.texture_info as usize)?;
    let texture_data = map.texture_data(texture_info.texture_data as usize)?;
    let plane = map.plane(face.plane as usize)?;

    let normal = to_vector(&plane.normal);
    let color = to_vector(&texture_data.reflectivity);

    let vertices = positions
        .iter()
        .map(|position| {
            Ok(VertexRecord {
                position: *position,
                normal,
                uv: project_texture_uv(position, &texture_info.texture, &texture_data.view),
                lightmap_uv: project_lightmap_uv(
                    position,
                    &texture_info.lightmap,
                    &face.lightmap,
                )?,
                color,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ReconstructedFace::new(face_index, vertices))
}
