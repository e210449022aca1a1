//! Spatial acceleration structures for Waymesh area lookup.
//!
//! This crate defines the [`SpatialIndex`] trait — the seam through which
//! the mesh query layer asks "which areas might be at this location?" —
//! along with the [`Aabb`] footprint primitive and a [`QuadTree`] reference
//! implementation of the trait.
//!
//! An index is purely an acceleration structure. Its contract permits
//! over-approximation (extra candidates are fine; callers re-test exact
//! containment) but never under-approximation: every area whose footprint
//! matches the query must be returned. Query results through an index must
//! therefore be identical to a full scan.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aabb;
pub mod index;
pub mod quadtree;

pub use aabb::Aabb;
pub use index::SpatialIndex;
pub use quadtree::QuadTree;
