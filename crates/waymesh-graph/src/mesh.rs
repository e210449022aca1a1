//! The assembled [`Mesh`]: read-only container and query surface.

use indexmap::IndexMap;

use crate::area::Area;
use crate::assemble::UnresolvedRef;
use crate::builder::MeshInfo;
use crate::ladder::Ladder;
use crate::place::Place;
use waymesh_core::{AreaId, LadderId, PlaceId, Vector3};
use waymesh_space::SpatialIndex;

/// A complete assembled navigation mesh for one level.
///
/// Sole owner of all entity storage. The entity maps were populated once
/// by the parser and are immutable here; every operation takes `&self`,
/// so a mesh can be shared freely across query threads. Area-to-area links
/// are stored as [`AreaId`]s and resolved to `&`[`Area`] at traversal time,
/// which keeps the cyclic adjacency graph free of ownership cycles.
///
/// Obtained only from
/// [`MeshBuilder::assemble`](crate::MeshBuilder::assemble), so a `Mesh` in
/// hand is always fully assembled.
pub struct Mesh {
    info: MeshInfo,
    areas: IndexMap<AreaId, Area>,
    places: IndexMap<PlaceId, Place>,
    ladders: IndexMap<LadderId, Ladder>,
    index: Option<Box<dyn SpatialIndex>>,
    unresolved: Vec<UnresolvedRef>,
}

impl std::fmt::Debug for Mesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("info", &self.info)
            .field("areas", &self.areas.len())
            .field("places", &self.places.len())
            .field("ladders", &self.ladders.len())
            .field("indexed", &self.index.is_some())
            .field("unresolved", &self.unresolved.len())
            .finish()
    }
}

impl Mesh {
    pub(crate) fn from_parts(
        info: MeshInfo,
        areas: IndexMap<AreaId, Area>,
        places: IndexMap<PlaceId, Place>,
        ladders: IndexMap<LadderId, Ladder>,
        unresolved: Vec<UnresolvedRef>,
    ) -> Self {
        Self {
            info,
            areas,
            places,
            ladders,
            index: None,
            unresolved,
        }
    }

    /// Attach a spatial index over this mesh's areas.
    ///
    /// The index is a pure acceleration structure: it must satisfy the
    /// [`SpatialIndex`] contract over exactly this mesh's footprints, and
    /// queries return identical results with or without it.
    pub fn with_index(mut self, index: Box<dyn SpatialIndex>) -> Self {
        self.index = Some(index);
        self
    }

    /// Header metadata from the parsed file.
    pub fn info(&self) -> &MeshInfo {
        &self.info
    }

    /// Dangling references found during assembly, sorted by owning area.
    ///
    /// Each entry is a raw connection whose target area does not exist;
    /// the slot was omitted from the owning area's resolved connections.
    /// A non-empty list means the source data is corrupt in isolated
    /// spots, not that the mesh is unusable.
    pub fn unresolved(&self) -> &[UnresolvedRef] {
        &self.unresolved
    }

    /// Number of areas in the mesh.
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// All areas, in insertion order.
    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        self.areas.values()
    }

    /// All places, in insertion order.
    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.places.values()
    }

    /// All ladders, in insertion order.
    pub fn ladders(&self) -> impl Iterator<Item = &Ladder> {
        self.ladders.values()
    }

    /// The area with the given identifier.
    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.areas.get(&id)
    }

    /// The place with the given identifier.
    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(&id)
    }

    /// The ladder with the given identifier.
    pub fn ladder(&self, id: LadderId) -> Option<&Ladder> {
        self.ladders.get(&id)
    }

    /// The place with the given exact name.
    ///
    /// Linear scan in insertion order. Duplicate names are legal in source
    /// data (a flagged defect, logged at build time); the first match
    /// wins, which makes the lookup deterministic without pretending the
    /// data was unambiguous.
    pub fn place_by_name(&self, name: &str) -> Option<&Place> {
        self.places.values().find(|p| p.name() == name)
    }

    /// The area that best matches `point`.
    ///
    /// Two tiers, containment first:
    ///
    /// 1. Among areas whose footprint contains the point (gated by
    ///    `allow_below`, see [`Area::contains_point`]), the one with the
    ///    smallest vertical offset to its surface wins. When a spatial
    ///    index is attached it pre-filters this tier's candidates.
    /// 2. Only if no area contains the point: among all areas — skipping,
    ///    when `allow_below` is false, those whose center lies above the
    ///    point — the one with the smallest squared 3D distance from
    ///    point to center wins.
    ///
    /// Ties on equal best distance go to the lowest [`AreaId`], so the
    /// query is deterministic. Returns `None` for an empty mesh or when
    /// the `allow_below` filter excludes every candidate; that is a normal
    /// "no match", not a failure.
    pub fn nearest_area(&self, point: Vector3, allow_below: bool) -> Option<&Area> {
        self.best_containing(point, allow_below)
            .or_else(|| self.best_by_center(point, allow_below))
    }

    fn best_containing(&self, point: Vector3, allow_below: bool) -> Option<&Area> {
        let mut best: Option<(f32, &Area)> = None;
        match &self.index {
            Some(index) => {
                for id in index.query_point(point.x, point.y) {
                    if let Some(area) = self.areas.get(&id) {
                        Self::consider_containing(&mut best, area, point, allow_below);
                    }
                }
            }
            None => {
                for area in self.areas.values() {
                    Self::consider_containing(&mut best, area, point, allow_below);
                }
            }
        }
        best.map(|(_, area)| area)
    }

    fn consider_containing<'a>(
        best: &mut Option<(f32, &'a Area)>,
        area: &'a Area,
        point: Vector3,
        allow_below: bool,
    ) {
        if !area.contains_point(point, allow_below) {
            return;
        }
        let distance = area.distance_from_z(point);
        if Self::improves(best, distance, area) {
            *best = Some((distance, area));
        }
    }

    fn best_by_center(&self, point: Vector3, allow_below: bool) -> Option<&Area> {
        let mut best: Option<(f32, &Area)> = None;
        for area in self.areas.values() {
            let center = area.center();
            if !allow_below && center.z > point.z {
                continue;
            }
            let distance = center.distance_squared(point);
            if Self::improves(&best, distance, area) {
                best = Some((distance, area));
            }
        }
        best.map(|(_, area)| area)
    }

    /// Strictly-closer wins; on an exact distance tie the lower id wins.
    fn improves(best: &Option<(f32, &Area)>, distance: f32, area: &Area) -> bool {
        match best {
            None => true,
            Some((best_distance, best_area)) => {
                distance < *best_distance
                    || (distance == *best_distance && area.id() < best_area.id())
            }
        }
    }
}
