// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::MapGeometry;
use crate::{Error, Point2, Point3};
use approx::assert_relative_eq;
use bsp_lite_core::{
    Edge, Face, LightmapExtent, Lump, Luxels, MapData, Plane, Surfedge, TextureAxis, TextureData,
    TextureInfo, TextureProjection, Vec3, ViewSize,
};

fn face(first_edge: u32, num_edges: u32) -> Face {
    Face {
        first_edge,
        num_edges,
        texture_info: 0,
        plane: 0,
        lightmap: LightmapExtent::default(),
    }
}

fn planar_projection() -> TextureProjection {
    TextureProjection {
        s: TextureAxis::new(Vec3::new(1.0, 0.0, 0.0), 0.0),
        t: TextureAxis::new(Vec3::new(0.0, 1.0, 0.0), 0.0),
    }
}

/// Six faces sharing one square:
/// 0 quad, 1 reversed quad, 2 quad with a T-junction bridge,
/// 3 collapses to two vertices, 4 has an unrepairable repeat,
/// 5 points at a missing texture info.
fn fixture() -> MapData {
    let surfedges = [
        1, 2, 3, 4, // face 0
        -4, -3, -2, -1, // face 1
        1, 2, 5, 6, 3, 4, // face 2
        1, 2, 3, -1, // face 3
        1, 2, 3, 4, 1, // face 4
        1, 2, 3, 4, // face 5
    ];

    let mut faces = vec![
        face(0, 4),
        face(4, 4),
        face(8, 6),
        face(14, 4),
        face(18, 5),
        face(23, 4),
    ];
    faces[0].lightmap = LightmapExtent {
        mins: Luxels::new(1, 1),
        size: Luxels::new(4, 4),
    };
    faces[5].texture_info = 7;

    MapData {
        faces,
        surfedges: surfedges.into_iter().map(Surfedge).collect(),
        edges: vec![
            Edge::new(0, 0),
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(3, 0),
            Edge::new(2, 4),
            Edge::new(4, 2),
        ],
        vertices: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(64.0, 0.0, 0.0),
            Vec3::new(64.0, 64.0, 0.0),
            Vec3::new(0.0, 64.0, 0.0),
            Vec3::new(32.0, 96.0, 0.0),
        ],
        texture_info: vec![TextureInfo {
            texture: planar_projection(),
            lightmap: planar_projection(),
            texture_data: 0,
        }],
        texture_data: vec![TextureData {
            reflectivity: Vec3::new(0.5, 0.25, 1.0),
            view: ViewSize {
                width: 64,
                height: 64,
            },
        }],
        planes: vec![Plane {
            normal: Vec3::new(0.0, 0.0, 1.0),
            distance: 0.0,
        }],
        entities: Vec::new(),
    }
}

fn square_positions(order: [usize; 4]) -> Vec<Point3<f64>> {
    let corners = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(64.0, 0.0, 0.0),
        Point3::new(64.0, 64.0, 0.0),
        Point3::new(0.0, 64.0, 0.0),
    ];
    order.iter().map(|&i| corners[i]).collect()
}

#[test]
fn test_reconstruct_quad() {
    let map = fixture();
    let geometry = MapGeometry::new(&map);

    let face = geometry.reconstruct_face(0).unwrap();
    let positions: Vec<_> = face.positions().copied().collect();
    assert_eq!(positions, square_positions([0, 1, 2, 3]));

    let far = &face.vertices[2];
    assert_eq!(far.uv, Point2::new(1.0, 1.0));
    assert_relative_eq!(far.lightmap_uv.x, (64.0 - 1.0) / 4.0);
    assert_relative_eq!(far.lightmap_uv.y, (64.0 - 1.0) / 4.0);
    assert_relative_eq!(face.vertices[1].lightmap_uv.y, -0.25);
}

#[test]
fn test_reconstruct_reversed_quad() {
    let map = fixture();
    let face = MapGeometry::new(&map).reconstruct_face(1).unwrap();
    let positions: Vec<_> = face.positions().copied().collect();
    assert_eq!(positions, square_positions([0, 3, 2, 1]));
    assert!(face.vertices.iter().all(|v| v.lightmap_uv == Point2::origin()));
}

#[test]
fn test_reconstruct_repairs_bridge() {
    let map = fixture();
    let face = MapGeometry::new(&map).reconstruct_face(2).unwrap();
    let positions: Vec<_> = face.positions().copied().collect();
    assert_eq!(positions, square_positions([0, 1, 2, 3]));
}

#[test]
fn test_reconstruct_degenerate_face_is_not_an_error() {
    let map = fixture();
    let face = MapGeometry::new(&map).reconstruct_face(3).unwrap();
    assert_eq!(face.len(), 2);
    assert!(face.is_degenerate());
    assert_eq!(face.triangle_count(), 0);
}

#[test]
fn test_reconstruct_errors_carry_face_index() {
    let map = fixture();
    let geometry = MapGeometry::new(&map);

    let err = geometry.reconstruct_face(4).unwrap_err();
    assert_eq!(err.face_index(), Some(4));
    match err.root() {
        Error::UnrepairedDuplicatePattern { repeats } => assert_eq!(repeats.as_slice(), &[0, 4]),
        other => panic!("unexpected error {:?}", other),
    }

    let err = geometry.reconstruct_face(5).unwrap_err();
    assert_eq!(err.face_index(), Some(5));
    assert_eq!(
        err.root(),
        &Error::CoreError(bsp_lite_core::Error::MalformedIndex {
            lump: Lump::TextureInfo,
            index: 7,
            len: 1,
        })
    );

    let err = geometry.reconstruct_face(99).unwrap_err();
    assert_eq!(err.face_index(), Some(99));
}

#[test]
fn test_failures_do_not_stop_other_faces() {
    let map = fixture();
    let results = MapGeometry::new(&map).reconstruct_all();
    assert_eq!(results.len(), 6);

    let (faces, failures) = MapGeometry::partition(results);
    let indices: Vec<_> = faces.iter().map(|f| f.face_index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    let failed: Vec<_> = failures.iter().filter_map(Error::face_index).collect();
    assert_eq!(failed, vec![4, 5]);
}

#[test]
fn test_parallel_matches_sequential() {
    let map = fixture();
    let geometry = MapGeometry::new(&map);
    assert_eq!(geometry.reconstruct_all(), geometry.reconstruct_all_par());
    assert_eq!(geometry.build_mesh(), geometry.build_mesh_par());
}

#[test]
fn test_build_mesh_skips_failed_and_degenerate_faces() {
    let map = fixture();
    let mesh = MapGeometry::new(&map).build_mesh();
    assert_eq!(mesh.triangle_count(), 6);
    assert_eq!(mesh.positions.len(), 9 * 6);
    assert_eq!(&mesh.colors[..3], &[0.5, 0.25, 1.0]);
}

#[test]
fn test_repaired_loops_have_distinct_positions() {
    let map = fixture();
    for face in MapGeometry::new(&map).reconstruct_all().into_iter().flatten() {
        let positions: Vec<_> = face.positions().collect();
        for (i, a) in positions.iter().enumerate() {
            assert!(positions[i + 1..].iter().all(|b| a != b));
        }
    }
}
