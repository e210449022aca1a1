//! Benchmark profiles for the Waymesh navigation library.
//!
//! Provides pre-built mesh generators shared by the benches:
//!
//! - [`grid_profile`]: an n×n grid of connected areas with varied heights
//! - [`query_points`]: deterministic pseudo-random query points over a grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use waymesh_core::{AreaId, Vector3};
use waymesh_graph::{Area, Direction, MeshBuilder, MeshInfo};

/// Side length of one grid cell in level units.
pub const CELL: f32 = 25.0;

/// Build a populated (unassembled) builder for an `n`×`n` grid of areas.
///
/// Cell `(i, j)` gets id `i * n + j + 1`, a footprint of [`CELL`] units on
/// each side, a height cycling through four levels, and raw connections to
/// its four orthogonal neighbours where they exist.
pub fn grid_profile(n: u32) -> MeshBuilder {
    let mut builder = MeshBuilder::new(MeshInfo::default());
    let id_of = |i: u32, j: u32| i * n + j + 1;
    for i in 0..n {
        for j in 0..n {
            let x = i as f32 * CELL;
            let y = j as f32 * CELL;
            let z = ((i + j) % 4) as f32 * 10.0;
            let mut area = Area::new(
                AreaId(id_of(i, j)),
                Vector3::new(x, y, z),
                Vector3::new(x + CELL, y + CELL, z),
                z,
                z,
            )
            .expect("grid cells are non-degenerate");
            if j > 0 {
                area.add_connection(Direction::North, id_of(i, j - 1));
            }
            if i + 1 < n {
                area.add_connection(Direction::East, id_of(i + 1, j));
            }
            if j + 1 < n {
                area.add_connection(Direction::South, id_of(i, j + 1));
            }
            if i > 0 {
                area.add_connection(Direction::West, id_of(i - 1, j));
            }
            builder.insert_area(area).expect("grid ids are unique");
        }
    }
    builder
}

/// `count` deterministic pseudo-random points spread over (and a little
/// beyond) an `n`×`n` grid built by [`grid_profile`].
pub fn query_points(n: u32, count: usize) -> Vec<Vector3> {
    let extent = n as f32 * CELL;
    (0..count as u64)
        .map(|i| {
            // Deterministic mixing; no RNG dependency needed for benches.
            let a = i.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let b = a.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
            let fx = (a >> 11) as f32 / (1u64 << 53) as f32;
            let fy = (b >> 11) as f32 / (1u64 << 53) as f32;
            let fz = ((a ^ b) >> 40) as f32 / (1u64 << 24) as f32;
            Vector3::new(
                fx * extent * 1.1 - extent * 0.05,
                fy * extent * 1.1 - extent * 0.05,
                fz * 40.0 - 5.0,
            )
        })
        .collect()
}
