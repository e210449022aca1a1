//! Waymesh: navigation-mesh queries and graph assembly for parsed level
//! meshes.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Waymesh sub-crates. For most users, adding `waymesh` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use waymesh::prelude::*;
//!
//! // A parser would do this part: two connected ground areas.
//! let mut builder = MeshBuilder::new(MeshInfo::default());
//! let mut left = Area::new(
//!     AreaId(1),
//!     Vector3::new(0.0, 0.0, 0.0),
//!     Vector3::new(10.0, 10.0, 0.0),
//!     0.0,
//!     0.0,
//! )
//! .unwrap();
//! left.add_connection(Direction::East, 2);
//! let mut right = Area::new(
//!     AreaId(2),
//!     Vector3::new(10.0, 0.0, 0.0),
//!     Vector3::new(20.0, 10.0, 0.0),
//!     0.0,
//!     0.0,
//! )
//! .unwrap();
//! right.add_connection(Direction::West, 1);
//! builder.insert_area(left).unwrap();
//! builder.insert_area(right).unwrap();
//!
//! // Assembly resolves the raw references into a traversable graph.
//! let mesh = builder.assemble(&AssembleConfig::default());
//! assert!(mesh.unresolved().is_empty());
//!
//! let area = mesh.nearest_area(Vector3::new(14.0, 5.0, 1.0), false).unwrap();
//! assert_eq!(area.id(), AreaId(2));
//! assert_eq!(area.connections(Direction::West), &[AreaId(1)]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `waymesh-core` | Ids, `Vector3`, error types |
//! | [`space`] | `waymesh-space` | `Aabb`, `SpatialIndex`, `QuadTree` |
//! | [`graph`] | `waymesh-graph` | Entities, builder, assembly, `Mesh` queries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core ids, geometry, and errors (`waymesh-core`).
pub use waymesh_core as types;

/// Spatial index trait and quadtree (`waymesh-space`).
pub use waymesh_space as space;

/// Mesh entities, assembly, and queries (`waymesh-graph`).
pub use waymesh_graph as graph;

/// Common imports for typical Waymesh usage.
///
/// ```rust
/// use waymesh::prelude::*;
/// ```
pub mod prelude {
    // Ids and geometry
    pub use waymesh_core::{AreaId, BuildError, LadderId, PlaceId, Vector3};

    // Spatial index seam
    pub use waymesh_space::{Aabb, QuadTree, SpatialIndex};

    // Entities, builder, and queries
    pub use waymesh_graph::{
        Area, AssembleConfig, Direction, Ladder, LadderAttachment, LadderSlot, Mesh, MeshBuilder,
        MeshInfo, Place, UnresolvedRef,
    };
}
