//! Nearest-area query behavior: tier precedence, the allow-below gate,
//! determinism, and index/full-scan equivalence.

use waymesh_core::{AreaId, Vector3};
use waymesh_graph::{Area, AssembleConfig, Mesh, MeshBuilder, MeshInfo};

fn flat_area(id: u32, min: (f32, f32), max: (f32, f32), z: f32) -> Area {
    Area::new(
        AreaId(id),
        Vector3::new(min.0, min.1, z),
        Vector3::new(max.0, max.1, z),
        z,
        z,
    )
    .unwrap()
}

fn mesh_of(areas: Vec<Area>) -> Mesh {
    let mut builder = MeshBuilder::new(MeshInfo::default());
    for area in areas {
        builder.insert_area(area).unwrap();
    }
    builder.assemble(&AssembleConfig::default())
}

#[test]
fn empty_mesh_returns_no_match() {
    let mesh = mesh_of(vec![]);
    for allow_below in [false, true] {
        assert!(mesh.nearest_area(Vector3::new(0.0, 0.0, 0.0), allow_below).is_none());
        assert!(mesh.nearest_area(Vector3::new(-50.0, 3.0, 99.0), allow_below).is_none());
    }
}

#[test]
fn single_containing_area_wins_regardless_of_flag() {
    let mesh = mesh_of(vec![flat_area(1, (-1.0, -1.0), (1.0, 1.0), 0.0)]);
    let origin = Vector3::new(0.0, 0.0, 0.0);
    assert_eq!(mesh.nearest_area(origin, false).map(Area::id), Some(AreaId(1)));
    assert_eq!(mesh.nearest_area(origin, true).map(Area::id), Some(AreaId(1)));
}

#[test]
fn containment_beats_closer_center() {
    // The point floats well above area 1 but inside its footprint; area 2
    // does not contain it but its center is far closer in 3D.
    let mesh = mesh_of(vec![
        flat_area(1, (0.0, 0.0), (10.0, 10.0), 0.0),
        flat_area(2, (4.0, 4.0), (4.9, 4.9), 8.0),
    ]);
    let point = Vector3::new(5.0, 5.0, 8.0);
    assert_eq!(mesh.nearest_area(point, false).map(Area::id), Some(AreaId(1)));
}

#[test]
fn areas_above_are_excluded_unless_allowed() {
    // Area 1's surface is above the query point; with allow_below = false
    // it neither contains the point nor competes in the proximity tier,
    // so the much farther area 2 wins. Allowing below flips the answer.
    let mesh = mesh_of(vec![
        flat_area(1, (0.0, 0.0), (2.0, 2.0), 10.0),
        flat_area(2, (30.0, 30.0), (32.0, 32.0), 0.0),
    ]);
    let point = Vector3::new(1.0, 1.0, 0.0);
    assert_eq!(mesh.nearest_area(point, false).map(Area::id), Some(AreaId(2)));
    assert_eq!(mesh.nearest_area(point, true).map(Area::id), Some(AreaId(1)));
}

#[test]
fn proximity_tier_picks_nearest_eligible_center() {
    let mesh = mesh_of(vec![
        flat_area(1, (10.0, 0.0), (12.0, 2.0), 0.0),
        flat_area(2, (20.0, 0.0), (22.0, 2.0), 0.0),
    ]);
    // Outside every footprint; area 1's center is nearer.
    let point = Vector3::new(5.0, 1.0, 0.0);
    assert_eq!(mesh.nearest_area(point, false).map(Area::id), Some(AreaId(1)));
}

#[test]
fn stacked_areas_resolve_to_matching_height() {
    // Two stacked footprints plus a far one. The ground-level query must
    // land on the ground-level area, not the floor hovering above it.
    let mesh = mesh_of(vec![
        flat_area(1, (0.0, 0.0), (1.0, 1.0), 0.0),
        flat_area(2, (5.0, 5.0), (6.0, 6.0), 0.0),
        flat_area(3, (0.0, 0.0), (1.0, 1.0), 10.0),
    ]);
    let point = Vector3::new(0.5, 0.5, 0.0);
    assert_eq!(mesh.nearest_area(point, false).map(Area::id), Some(AreaId(1)));
}

#[test]
fn containment_tie_breaks_to_lowest_id() {
    // Identical geometry under two ids, inserted high id first.
    let mesh = mesh_of(vec![
        flat_area(9, (0.0, 0.0), (1.0, 1.0), 0.0),
        flat_area(4, (0.0, 0.0), (1.0, 1.0), 0.0),
    ]);
    let point = Vector3::new(0.5, 0.5, 0.0);
    assert_eq!(mesh.nearest_area(point, false).map(Area::id), Some(AreaId(4)));
}

#[test]
fn proximity_tie_breaks_to_lowest_id() {
    // Centers equidistant from the query point, on either side of it.
    let mesh = mesh_of(vec![
        flat_area(8, (10.0, 0.0), (12.0, 2.0), 0.0),
        flat_area(3, (-12.0, 0.0), (-10.0, 2.0), 0.0),
    ]);
    let point = Vector3::new(0.0, 1.0, 0.0);
    assert_eq!(mesh.nearest_area(point, false).map(Area::id), Some(AreaId(3)));
}

#[test]
fn result_is_independent_of_insertion_order() {
    let forward = mesh_of(vec![
        flat_area(1, (0.0, 0.0), (1.0, 1.0), 0.0),
        flat_area(2, (0.0, 0.0), (1.0, 1.0), 0.0),
        flat_area(3, (4.0, 4.0), (5.0, 5.0), 0.0),
    ]);
    let reverse = mesh_of(vec![
        flat_area(3, (4.0, 4.0), (5.0, 5.0), 0.0),
        flat_area(2, (0.0, 0.0), (1.0, 1.0), 0.0),
        flat_area(1, (0.0, 0.0), (1.0, 1.0), 0.0),
    ]);
    for point in [
        Vector3::new(0.5, 0.5, 0.0),
        Vector3::new(4.5, 4.5, 0.0),
        Vector3::new(2.0, 2.0, 5.0),
    ] {
        for allow_below in [false, true] {
            assert_eq!(
                forward.nearest_area(point, allow_below).map(Area::id),
                reverse.nearest_area(point, allow_below).map(Area::id),
            );
        }
    }
}

#[test]
fn index_and_full_scan_agree() {
    let build = |with_index: bool| {
        let mut builder = MeshBuilder::new(MeshInfo::default());
        for i in 0..10u32 {
            for j in 0..10u32 {
                let x = i as f32 * 10.0;
                let y = j as f32 * 10.0;
                let z = ((i + j) % 4) as f32 * 5.0;
                builder
                    .insert_area(flat_area(i * 10 + j + 1, (x, y), (x + 10.0, y + 10.0), z))
                    .unwrap();
            }
        }
        builder.assemble(&AssembleConfig {
            build_index: with_index,
            ..Default::default()
        })
    };
    let scanned = build(false);
    let indexed = build(true);

    let mut step = 0u32;
    for x in [-5.0f32, 0.0, 3.3, 45.0, 50.0, 99.9, 120.0] {
        for y in [-5.0f32, 7.1, 50.0, 95.0, 110.0] {
            for z in [-10.0f32, 0.0, 7.5, 40.0] {
                step += 1;
                let point = Vector3::new(x, y, z);
                let allow_below = step % 2 == 0;
                assert_eq!(
                    scanned.nearest_area(point, allow_below).map(Area::id),
                    indexed.nearest_area(point, allow_below).map(Area::id),
                    "diverged at {point} allow_below={allow_below}"
                );
            }
        }
    }
}
