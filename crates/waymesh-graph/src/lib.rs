//! Mesh entities, graph assembly, and spatial queries for Waymesh.
//!
//! This crate holds the in-memory representation of a parsed navigation
//! mesh and the operations over it:
//!
//! - [`Area`], [`Place`], and [`Ladder`]: the mesh's atomic entities,
//!   carrying the raw numeric cross-references the parser read from disk.
//! - [`MeshBuilder`]: the parser-facing input surface. Populating a builder
//!   and calling [`MeshBuilder::assemble`] runs graph assembly — the
//!   parallel procedure that turns raw references into a directly
//!   traversable area graph — and yields a [`Mesh`].
//! - [`Mesh`]: the read-only assembled container, exposing nearest-area,
//!   identifier, and name lookups.
//!
//! Queries exist only on [`Mesh`], so "query before assembly" is not a
//! state this API can express.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod area;
pub mod assemble;
pub mod builder;
pub mod config;
pub mod ladder;
pub mod mesh;
pub mod place;

pub use area::{Area, Direction, LadderSlot};
pub use assemble::UnresolvedRef;
pub use builder::{MeshBuilder, MeshInfo};
pub use config::AssembleConfig;
pub use ladder::{Ladder, LadderAttachment};
pub use mesh::Mesh;
pub use place::Place;
