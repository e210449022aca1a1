//! The [`SpatialIndex`] trait — the acceleration seam for area lookup.

use crate::aabb::Aabb;
use waymesh_core::AreaId;

/// Candidate lookup over area footprints.
///
/// The mesh query layer consults an index (when one is attached) to narrow
/// the set of areas it must test exactly. Implementations may return extra
/// candidates — callers always re-test exact containment — but must never
/// omit a matching area: a query through an index has to produce the same
/// final answer as a full scan over every area.
///
/// # Thread Safety
///
/// `Send + Sync` so an index can be shared behind the mesh across query
/// threads; indices are immutable once built.
pub trait SpatialIndex: Send + Sync {
    /// Every area whose footprint contains `(x, y)`, possibly with extras.
    fn query_point(&self, x: f32, y: f32) -> Vec<AreaId>;

    /// Every area whose footprint intersects `region`, possibly with extras.
    fn query(&self, region: &Aabb) -> Vec<AreaId>;
}
