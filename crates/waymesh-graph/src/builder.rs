//! The [`MeshBuilder`]: the parser-facing surface for populating a mesh.

use indexmap::IndexMap;

use crate::area::Area;
use crate::assemble;
use crate::config::AssembleConfig;
use crate::ladder::Ladder;
use crate::mesh::Mesh;
use crate::place::Place;
use waymesh_core::{AreaId, BuildError, LadderId, PlaceId};
use waymesh_space::QuadTree;

/// Header metadata carried alongside the entities of one parsed mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshInfo {
    /// Major version of the mesh file format.
    pub major_version: u32,
    /// Minor version of the mesh file format.
    pub minor_version: u32,
    /// Size of the source level file the mesh was generated from; acts as
    /// a checksum tying the mesh to its level.
    pub level_size: u32,
    /// Whether the mesh generator computed derived analysis data. Parse
    /// metadata only — mesh readiness is expressed by the type system, not
    /// this flag.
    pub is_analyzed: bool,
}

/// Accumulates parsed entities and produces an assembled [`Mesh`].
///
/// A parser constructs entities, inserts them here, and finishes with one
/// call to [`assemble`](MeshBuilder::assemble). The entity maps are
/// populated exactly once: insertion rejects duplicate identifiers with
/// [`BuildError`], and after assembly the maps are read-only. Because the
/// query API lives on [`Mesh`] and this type has none, no caller can query
/// an unassembled graph.
#[derive(Clone, Debug, Default)]
pub struct MeshBuilder {
    info: MeshInfo,
    areas: IndexMap<AreaId, Area>,
    places: IndexMap<PlaceId, Place>,
    ladders: IndexMap<LadderId, Ladder>,
}

impl MeshBuilder {
    /// Start a builder carrying the given header metadata.
    pub fn new(info: MeshInfo) -> Self {
        Self {
            info,
            ..Default::default()
        }
    }

    /// Insert an area, rejecting a duplicate identifier.
    pub fn insert_area(&mut self, area: Area) -> Result<(), BuildError> {
        if self.areas.contains_key(&area.id()) {
            return Err(BuildError::DuplicateArea(area.id()));
        }
        self.areas.insert(area.id(), area);
        Ok(())
    }

    /// Insert a place, rejecting a duplicate identifier.
    ///
    /// Duplicate *names* are legal in the source data and are accepted;
    /// [`Mesh::place_by_name`](crate::Mesh::place_by_name) resolves them
    /// first-match-wins. A warning is logged so the defect is visible.
    pub fn insert_place(&mut self, place: Place) -> Result<(), BuildError> {
        if self.places.contains_key(&place.id()) {
            return Err(BuildError::DuplicatePlace(place.id()));
        }
        if let Some(existing) = self.places.values().find(|p| p.name() == place.name()) {
            log::warn!(
                "place {} reuses name {:?} already held by place {}",
                place.id(),
                place.name(),
                existing.id()
            );
        }
        self.places.insert(place.id(), place);
        Ok(())
    }

    /// Insert a ladder, rejecting a duplicate identifier.
    pub fn insert_ladder(&mut self, ladder: Ladder) -> Result<(), BuildError> {
        if self.ladders.contains_key(&ladder.id()) {
            return Err(BuildError::DuplicateLadder(ladder.id()));
        }
        self.ladders.insert(ladder.id(), ladder);
        Ok(())
    }

    /// Number of areas inserted so far.
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Run graph assembly and return the queryable mesh.
    ///
    /// Resolves every area's raw references in parallel (see
    /// [`assemble`](crate::assemble) for the procedure and its guarantees),
    /// then rebuilds place membership and ladder attachments. Returns only
    /// after every worker has finished, so the mesh this hands back always
    /// carries a complete graph.
    pub fn assemble(self, config: &AssembleConfig) -> Mesh {
        let MeshBuilder {
            info,
            mut areas,
            mut places,
            mut ladders,
        } = self;

        let workers = config.resolve_workers();
        let unresolved = assemble::resolve_graph(&mut areas, &ladders, workers);
        assemble::link_places(&areas, &mut places);
        assemble::resolve_ladders(&areas, &mut ladders);

        let mesh = Mesh::from_parts(info, areas, places, ladders, unresolved);
        if config.build_index {
            let index = QuadTree::build(
                mesh.areas().map(|a| (a.id(), a.footprint())),
            );
            mesh.with_index(Box::new(index))
        } else {
            mesh
        }
    }
}
